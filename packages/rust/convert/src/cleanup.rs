//! Post-transcription text cleaning.
//!
//! The notebook renderer injects pilcrow (¶) permalink markers after
//! headings and paragraphs; they must become paragraph breaks, not literal
//! glyphs. Cleaning runs once per cell, after transcription/extraction and
//! before line splitting.

use std::sync::LazyLock;

use regex::Regex;

static PILCROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("¶").expect("valid regex"));

/// Replace every pilcrow with a double newline, then trim the whole string.
pub(crate) fn clean(text: &str) -> String {
    PILCROW_RE.replace_all(text, "\n\n").trim().to_string()
}

/// Clean, then split into one owned string per line (no trailing newlines).
pub(crate) fn split_source(text: &str) -> Vec<String> {
    clean(text).split('\n').map(str::to_string).collect()
}
