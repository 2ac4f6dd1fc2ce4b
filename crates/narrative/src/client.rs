use async_trait::async_trait;
use thiserror::Error;

/// Failure contract for the generative collaborator. Transient failures are
/// eligible for the next fallback tier; hard failures are not retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NarrativeError {
    #[error("narrative request timed out after {seconds}s")]
    Timeout { seconds: u64 },
    #[error("narrative quota exhausted: {0}")]
    Quota(String),
    #[error("narrative transport failure: {0}")]
    Http(String),
    #[error("narrative response was malformed: {0}")]
    InvalidResponse(String),
}

impl NarrativeError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Quota(_) | Self::Http(_))
    }
}

/// Call contract for a generative-text collaborator: given an instruction
/// and the user text, produce a reply with the named model.
#[async_trait]
pub trait NarrativeClient: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        instruction: &str,
        user_text: &str,
    ) -> Result<String, NarrativeError>;
}
