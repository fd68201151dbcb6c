//! Core domain types for the notebook document format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Major version of the notebook format emitted by the converter.
pub const NBFORMAT: u32 = 4;

/// Minor version of the notebook format emitted by the converter.
pub const NBFORMAT_MINOR: u32 = 4;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One unit of notebook content: executable source or narrative text.
///
/// Internally tagged on `cell_type`, so the serialized form carries
/// `"cell_type": "code"` or `"cell_type": "markdown"` alongside the
/// type-specific fields. The cell type is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Executable source. `execution_count` is always `null` and `outputs`
    /// always empty at conversion time — the HTML export carries neither.
    Code {
        execution_count: Option<i64>,
        metadata: Map<String, Value>,
        outputs: Vec<Value>,
        source: Vec<String>,
    },
    /// Narrative text, one entry per line of transcribed markdown.
    Markdown {
        metadata: Map<String, Value>,
        source: Vec<String>,
    },
}

impl Cell {
    /// Build a code cell from its source lines.
    pub fn code(source: Vec<String>) -> Self {
        Self::Code {
            execution_count: None,
            metadata: Map::new(),
            outputs: Vec::new(),
            source,
        }
    }

    /// Build a markdown cell from its source lines.
    pub fn markdown(source: Vec<String>) -> Self {
        Self::Markdown {
            metadata: Map::new(),
            source,
        }
    }

    /// The serialized `cell_type` discriminant.
    pub fn cell_type(&self) -> &'static str {
        match self {
            Self::Code { .. } => "code",
            Self::Markdown { .. } => "markdown",
        }
    }

    /// The source lines, regardless of cell type.
    pub fn source(&self) -> &[String] {
        match self {
            Self::Code { source, .. } | Self::Markdown { source, .. } => source,
        }
    }
}

// ---------------------------------------------------------------------------
// Notebook
// ---------------------------------------------------------------------------

/// The output artifact: an ordered list of cells plus format metadata.
///
/// Constructed empty, populated by one [`push`](Notebook::push) per
/// recognized cell container, never mutated after serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    /// An empty notebook carrying the fixed format metadata.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Append a cell, preserving insertion order.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}
