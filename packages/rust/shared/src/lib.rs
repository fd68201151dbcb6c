//! Shared types and error model for html2ipynb.
//!
//! This crate is the foundation depended on by the conversion and app crates.
//! It provides:
//! - [`Html2IpynbError`] — the unified error type
//! - Notebook domain types ([`Notebook`], [`Cell`])

pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{Html2IpynbError, Result};
pub use types::{Cell, NBFORMAT, NBFORMAT_MINOR, Notebook};
