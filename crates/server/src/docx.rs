//! Word-processor serialization for assembled quotation documents.
//!
//! The core produces a finished block tree; this module turns it into
//! `.docx` bytes, writes a uniquely named artifact under the output
//! directory, and wraps the bytes as a download response.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};
use chrono::Utc;
use docx_rs::{
    Docx, Paragraph, Run, Table as DocxTable, TableCell as DocxTableCell,
    TableRow as DocxTableRow,
};
use rand::distributions::Alphanumeric;
use rand::Rng;
use stowquote_core::document::{Block, Document};
use tracing::info;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("could not serialize document: {0}")]
    Serialize(String),
    #[error("could not write artifact: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct DocxGenerator {
    output_dir: PathBuf,
}

impl DocxGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Serializes a document tree to OOXML bytes.
    pub fn render(document: &Document) -> Result<Vec<u8>, DocxError> {
        let mut docx = Docx::new();

        for block in &document.blocks {
            match block {
                Block::Paragraph { text } => {
                    docx = docx.add_paragraph(paragraph(text));
                }
                Block::Table { rows } => {
                    let table_rows = rows
                        .iter()
                        .map(|row| {
                            DocxTableRow::new(
                                row.cells
                                    .iter()
                                    .map(|cell| {
                                        let mut table_cell = DocxTableCell::new();
                                        for text in &cell.paragraphs {
                                            table_cell = table_cell.add_paragraph(paragraph(text));
                                        }
                                        table_cell
                                    })
                                    .collect(),
                            )
                        })
                        .collect();
                    docx = docx.add_table(DocxTable::new(table_rows));
                }
            }
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|error| DocxError::Serialize(error.to_string()))?;
        Ok(buffer.into_inner())
    }

    /// Writes the rendered bytes under the output directory with a
    /// collision-free name (timestamp plus random suffix), so concurrent
    /// requests never contend on a path.
    pub async fn write_artifact(&self, bytes: &[u8]) -> Result<PathBuf, DocxError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.output_dir.join(unique_artifact_name());
        tokio::fs::write(&path, bytes).await?;
        info!(path = %path.display(), size = bytes.len(), "quotation artifact written");
        Ok(path)
    }
}

fn paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn unique_artifact_name() -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S");
    let suffix: String =
        rand::thread_rng().sample_iter(&Alphanumeric).take(6).map(char::from).collect();
    format!("quotation_{stamp}_{suffix}.docx")
}

/// Wraps rendered bytes as a file download.
pub fn attachment_response(bytes: Vec<u8>, filename: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, DOCX_CONTENT_TYPE)
        .header(header::CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\""))
        .body(Body::from(bytes))
        .expect("static response parts are valid")
}
