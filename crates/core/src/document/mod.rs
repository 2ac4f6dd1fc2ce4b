//! The quotation document as an immutable block tree.
//!
//! A document is an ordered sequence of blocks: paragraphs and tables, where
//! every table cell is itself paragraph-like. Merge and prune are pure
//! transforms that produce a new tree; the loaded template is never mutated,
//! so concurrent requests can share nothing but the asset bytes.

pub mod merge;
pub mod prune;
pub mod template;

use serde::{Deserialize, Serialize};

pub use merge::{merge, PlaceholderMap};
pub use prune::{prune, prune_for_family};
pub use template::{TemplateError, TemplateStore};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Table { rows: Vec<TableRow> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<String>,
}

impl Document {
    pub fn paragraph(text: impl Into<String>) -> Block {
        Block::Paragraph { text: text.into() }
    }

    /// All paragraph-like text in document order: paragraphs first-class,
    /// then each table cell paragraph. Used by tests and diagnostics.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().flat_map(|block| {
            let texts: Vec<&str> = match block {
                Block::Paragraph { text } => vec![text.as_str()],
                Block::Table { rows } => rows
                    .iter()
                    .flat_map(|row| row.cells.iter())
                    .flat_map(|cell| cell.paragraphs.iter().map(String::as_str))
                    .collect(),
            };
            texts
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}
