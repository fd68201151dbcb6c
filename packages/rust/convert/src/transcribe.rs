//! Recursive HTML-subtree-to-markdown transcription.
//!
//! One pass of recursive descent over the rendered-markdown subtree. Every
//! tag the notebook renderer emits maps to a [`Tag`] variant; anything else
//! falls through to [`Tag::Generic`], which recurses into children, so the
//! transcription is total over the node set and never loses nested content.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// Closed dispatch discriminant over the markdown subset the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Heading(u8),
    Paragraph,
    Anchor,
    Bold,
    Italic,
    Code,
    UnorderedList,
    OrderedList,
    Generic,
}

fn classify(name: &str) -> Tag {
    match name {
        "h1" => Tag::Heading(1),
        "h2" => Tag::Heading(2),
        "h3" => Tag::Heading(3),
        "h4" => Tag::Heading(4),
        "h5" => Tag::Heading(5),
        "h6" => Tag::Heading(6),
        "p" => Tag::Paragraph,
        "a" => Tag::Anchor,
        "strong" | "b" => Tag::Bold,
        "em" | "i" => Tag::Italic,
        "code" => Tag::Code,
        "ul" => Tag::UnorderedList,
        "ol" => Tag::OrderedList,
        _ => Tag::Generic,
    }
}

/// Transcribe one node into its markdown-equivalent string.
///
/// Text nodes pass through untrimmed — trimming happens exactly once, at the
/// enclosing heading/paragraph level, so inline-to-inline spacing survives.
/// Comments, doctypes, and other non-content nodes yield the empty string.
pub(crate) fn transcribe(node: NodeRef<'_, Node>) -> String {
    if let Some(el) = ElementRef::wrap(node) {
        return transcribe_element(&el);
    }
    match node.value() {
        Node::Text(text) => text.to_string(),
        _ => String::new(),
    }
}

fn transcribe_element(el: &ElementRef) -> String {
    match classify(el.value().name()) {
        // Full visible text, not inline recursion: heading permalink anchors
        // contribute their pilcrow to the text stream, where the cleaner
        // turns it into a paragraph break.
        Tag::Heading(level) => format!(
            "{} {}\n\n",
            "#".repeat(level as usize),
            visible_text(el).trim()
        ),
        Tag::Paragraph => format!("{}\n\n", inline_content(el).trim()),
        Tag::Anchor => format!(
            "[{}]({})",
            visible_text(el),
            el.value().attr("href").unwrap_or_default()
        ),
        Tag::Bold => format!("**{}**", visible_text(el)),
        Tag::Italic => format!("*{}*", visible_text(el)),
        Tag::Code => format!("`{}`", visible_text(el)),
        Tag::UnorderedList => transcribe_list(el, "- "),
        Tag::OrderedList => transcribe_list(el, "1. "),
        Tag::Generic => join_children(el),
    }
}

/// List items: direct `li` children only, each prefixed and built from the
/// space-joined transcription of its own direct children. Nested lists are
/// reached through that recursion, not at this level.
fn transcribe_list(el: &ElementRef, prefix: &str) -> String {
    let items: Vec<String> = el
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
        .map(|li| {
            let body = li
                .children()
                .map(transcribe)
                .collect::<Vec<_>>()
                .join(" ");
            format!("{prefix}{body}")
        })
        .collect();

    format!("{}\n\n", items.join("\n"))
}

/// Concatenated child transcriptions, used where inline markup must survive
/// (paragraphs). The empty joiner keeps text-node spacing intact.
fn inline_content(el: &ElementRef) -> String {
    el.children().map(transcribe).collect()
}

/// Space-joined child transcriptions — the fallback for unrecognized tags.
fn join_children(el: &ElementRef) -> String {
    el.children().map(transcribe).collect::<Vec<_>>().join(" ")
}

/// The element's full visible text, as rendered, without markup.
fn visible_text(el: &ElementRef) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    /// Parse a fragment and transcribe the root's children, concatenated.
    fn transcribe_fragment(html: &str) -> String {
        let doc = Html::parse_fragment(html);
        doc.root_element().children().map(transcribe).collect()
    }

    #[test]
    fn heading_round_trip() {
        assert_eq!(transcribe_fragment("<h2>Title</h2>"), "## Title\n\n");
    }

    #[test]
    fn heading_levels_map_to_hash_count() {
        assert_eq!(transcribe_fragment("<h1>a</h1>"), "# a\n\n");
        assert_eq!(transcribe_fragment("<h4>deep</h4>"), "#### deep\n\n");
        assert_eq!(transcribe_fragment("<h6>deepest</h6>"), "###### deepest\n\n");
    }

    #[test]
    fn heading_keeps_permalink_anchor_text() {
        // The anchor's pilcrow stays in the text stream; the cleaner later
        // expands it into a paragraph break.
        assert_eq!(
            transcribe_fragment(r##"<h2>Title<a class="anchor-link" href="#Title">¶</a></h2>"##),
            "## Title¶\n\n"
        );
    }

    #[test]
    fn paragraph_trims_exactly_once() {
        assert_eq!(transcribe_fragment("<p>  padded  </p>"), "padded\n\n");
    }

    #[test]
    fn text_node_passes_through_untrimmed() {
        assert_eq!(transcribe_fragment(" spaced "), " spaced ");
    }

    #[test]
    fn anchor_takes_href_verbatim() {
        assert_eq!(
            transcribe_fragment(r#"<a href="https://x/a%20b?q=1#frag">here</a>"#),
            "[here](https://x/a%20b?q=1#frag)"
        );
    }

    #[test]
    fn anchor_without_href_gets_empty_target() {
        assert_eq!(transcribe_fragment("<a>orphan</a>"), "[orphan]()");
    }

    #[test]
    fn inline_markers_wrap_visible_text() {
        assert_eq!(transcribe_fragment("<strong>bold</strong>"), "**bold**");
        assert_eq!(transcribe_fragment("<b>bold</b>"), "**bold**");
        assert_eq!(transcribe_fragment("<em>it</em>"), "*it*");
        assert_eq!(transcribe_fragment("<i>it</i>"), "*it*");
        assert_eq!(transcribe_fragment("<code>df.head()</code>"), "`df.head()`");
    }

    #[test]
    fn unordered_list_items_dashed() {
        assert_eq!(
            transcribe_fragment("<ul><li>a</li><li>b</li></ul>"),
            "- a\n- b\n\n"
        );
    }

    // Pinned behavior: every ordered item keeps the literal "1. " marker.
    // Renderers renumber on display, so the source never did either.
    #[test]
    fn ordered_list_markers_not_renumbered() {
        assert_eq!(
            transcribe_fragment("<ol><li>first</li><li>second</li><li>third</li></ol>"),
            "1. first\n1. second\n1. third\n\n"
        );
    }

    #[test]
    fn link_and_emphasis_compose_inside_paragraph() {
        let out = transcribe_fragment(
            r#"<p>See <a href="https://x">here</a> for <strong>details</strong>.</p>"#,
        );
        assert_eq!(out, "See [here](https://x) for **details**.\n\n");
    }

    #[test]
    fn unknown_tag_falls_through_to_children() {
        assert_eq!(transcribe_fragment("<article>plain</article>"), "plain");
        assert_eq!(
            transcribe_fragment("<div><p>nested</p></div>"),
            "nested\n\n"
        );
    }

    #[test]
    fn empty_element_yields_empty_string() {
        assert_eq!(transcribe_fragment("<div></div>"), "");
    }

    #[test]
    fn comment_nodes_are_ignored() {
        assert_eq!(transcribe_fragment("<!-- note -->"), "");
    }
}
