pub mod chat;
pub mod config;
pub mod document;
pub mod errors;
pub mod pricing;
pub mod quotation;

pub use chat::normalize::normalize;
pub use chat::router::{default_router, IntentRouter, RouteOutcome};
pub use document::{Block, Document, TableCell, TableRow};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use pricing::{format_money, DocumentFamily, FeeBreakdown, StorageCategory};
pub use quotation::{QuotationProfile, QuotationRequest};
