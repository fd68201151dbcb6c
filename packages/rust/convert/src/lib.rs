//! Rendered-notebook-HTML to notebook-document conversion.
//!
//! Walks the `jp-Cell` containers of a rendered notebook HTML export in
//! document order, classifies each as code or narrative from its class list,
//! and reassembles the ordered cell list into a [`Notebook`]. Narrative
//! cells go through the recursive markdown transcriber; code cells are
//! extracted verbatim so their text is never reinterpreted as markdown.

mod cleanup;
mod transcribe;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

pub use html2ipynb_shared::{Cell, Html2IpynbError, Notebook, Result};

use crate::cleanup::split_source;
use crate::transcribe::transcribe;

// ---------------------------------------------------------------------------
// Cell container markers
// ---------------------------------------------------------------------------

/// Class marker distinguishing code cells among the generic containers.
const CODE_CELL_CLASS: &str = "jp-CodeCell";

/// Class marker distinguishing markdown cells among the generic containers.
const MARKDOWN_CELL_CLASS: &str = "jp-MarkdownCell";

static CELL_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.jp-Cell").expect("valid selector"));

static HIGHLIGHT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.highlight").expect("valid selector"));

static RENDERED_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.jp-RenderedMarkdown").expect("valid selector"));

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Convert a rendered notebook HTML export into a [`Notebook`].
///
/// Selection order over the cell containers is document order and is the
/// sole determinant of output cell order. Containers carrying neither
/// recognized cell class are skipped; a recognized container missing its
/// inner content element aborts the whole conversion — a partially converted
/// notebook is worse than an explicit failure.
#[instrument(skip(html))]
pub fn convert(html: &str) -> Result<Notebook> {
    let doc = Html::parse_document(html);
    let mut notebook = Notebook::new();

    for (index, container) in doc.select(&CELL_SEL).enumerate() {
        if has_class(&container, CODE_CELL_CLASS) {
            let block = container.select(&HIGHLIGHT_SEL).next().ok_or_else(|| {
                Html2IpynbError::malformed_cell(index, "code cell has no highlighted source block")
            })?;

            // Verbatim text extraction — code is never transcribed.
            let source: String = block.text().collect();
            notebook.push(Cell::code(split_source(&source)));
        } else if has_class(&container, MARKDOWN_CELL_CLASS) {
            let rendered = container.select(&RENDERED_SEL).next().ok_or_else(|| {
                Html2IpynbError::malformed_cell(index, "markdown cell has no rendered content block")
            })?;

            let markdown: String = rendered.children().map(transcribe).collect();
            notebook.push(Cell::markdown(split_source(&markdown)));
        } else {
            debug!(index, "skipping container without a recognized cell class");
        }
    }

    debug!(cells = notebook.cells.len(), "assembly complete");
    Ok(notebook)
}

/// Serialize a notebook with stable 2-space indentation.
///
/// The indentation is a compatibility requirement for diff-friendliness,
/// not cosmetic.
pub fn to_json(notebook: &Notebook) -> Result<String> {
    serde_json::to_string_pretty(notebook).map_err(|e| Html2IpynbError::Serialize(e.to_string()))
}

/// Convert and serialize in one step.
pub fn convert_to_json(html: &str) -> Result<String> {
    to_json(&convert(html)?)
}

fn has_class(el: &ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
