//! Placeholder substitution over the document tree.

use super::{Block, Document, TableCell, TableRow};

/// Ordered token -> replacement pairs. Tokens are authored mutually
/// non-substring (`{{NAME}}` forms), so a single scan per token is exact.
#[derive(Clone, Debug, Default)]
pub struct PlaceholderMap {
    entries: Vec<(String, String)>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.entries.push((token.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    fn apply(&self, text: &str) -> String {
        let mut output = text.to_owned();
        for (token, value) in &self.entries {
            if output.contains(token.as_str()) {
                output = output.replace(token.as_str(), value);
            }
        }
        output
    }
}

/// Substitutes every token occurrence in every paragraph and table cell,
/// returning a new tree. Paragraphs and cells are treated identically.
pub fn merge(document: &Document, map: &PlaceholderMap) -> Document {
    let blocks = document
        .blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph { text } => Block::Paragraph { text: map.apply(text) },
            Block::Table { rows } => Block::Table {
                rows: rows
                    .iter()
                    .map(|row| TableRow {
                        cells: row
                            .cells
                            .iter()
                            .map(|cell| TableCell {
                                paragraphs: cell
                                    .paragraphs
                                    .iter()
                                    .map(|text| map.apply(text))
                                    .collect(),
                            })
                            .collect(),
                    })
                    .collect(),
            },
        })
        .collect();

    Document { blocks }
}
