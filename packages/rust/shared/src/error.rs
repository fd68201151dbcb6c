//! Error types for html2ipynb.
//!
//! Library crates use [`Html2IpynbError`] via `thiserror`.
//! The app crate wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all html2ipynb operations.
#[derive(Debug, thiserror::Error)]
pub enum Html2IpynbError {
    /// A recognized cell container is missing its required inner content
    /// element. Fatal — a partially converted notebook is worse than an
    /// explicit failure.
    #[error("malformed cell {index}: {message}")]
    MalformedCell { index: usize, message: String },

    /// HTML parsing or content extraction error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Notebook JSON serialization error.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, Html2IpynbError>;

impl Html2IpynbError {
    /// Create a malformed-cell error for the container at `index`.
    pub fn malformed_cell(index: usize, msg: impl Into<String>) -> Self {
        Self::MalformedCell {
            index,
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = Html2IpynbError::malformed_cell(3, "code cell has no highlighted source block");
        assert_eq!(
            err.to_string(),
            "malformed cell 3: code cell has no highlighted source block"
        );

        let err = Html2IpynbError::parse("unexpected element");
        assert!(err.to_string().contains("unexpected element"));
    }
}
