//! Pre-authored document template loading.
//!
//! One JSON asset per document family. Assets are immutable; each request
//! deserializes its own tree, so transforms never contend.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pricing::DocumentFamily;

use super::Document;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("could not read template `{path}`: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("could not parse template `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Clone, Debug)]
pub struct TemplateStore {
    directory: PathBuf,
}

impl TemplateStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn path_for(&self, family: DocumentFamily) -> PathBuf {
        self.directory.join(Self::file_name(family))
    }

    fn file_name(family: DocumentFamily) -> &'static str {
        match family {
            DocumentFamily::Standard => "standard.json",
            DocumentFamily::Chemical => "chemical.json",
            DocumentFamily::OpenYard => "open_yard.json",
        }
    }

    pub fn load(&self, family: DocumentFamily) -> Result<Document, TemplateError> {
        let path = self.path_for(family);
        load_document(&path)
    }

    /// Paths of absent family assets. Readiness checks use this so a missing
    /// template fails fast instead of at first request.
    pub fn missing_assets(&self) -> Vec<PathBuf> {
        [DocumentFamily::Standard, DocumentFamily::Chemical, DocumentFamily::OpenYard]
            .into_iter()
            .map(|family| self.path_for(family))
            .filter(|path| !path.exists())
            .collect()
    }
}

fn load_document(path: &Path) -> Result<Document, TemplateError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| TemplateError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| TemplateError::Parse { path: path.to_path_buf(), source })
}
