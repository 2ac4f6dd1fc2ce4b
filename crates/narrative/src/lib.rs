pub mod client;
pub mod fallback;
pub mod generative;

pub use client::{NarrativeClient, NarrativeError};
pub use fallback::{FallbackChain, APOLOGY_REPLY};
pub use generative::GenerativeHttpClient;

/// Instruction handed to the generative collaborator for unmatched chat
/// input. The deterministic router answers everything it can first.
pub const ASSISTANT_INSTRUCTION: &str = "You are a helpful assistant for a commercial \
storage and logistics provider in Abu Dhabi. Answer briefly and factually about \
warehousing, open yard storage, transport, and value added services. If a question \
needs a formal quotation, direct the user to the quotation form.";
