//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the qualification domain.

mod errors;
mod ids;
mod money;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuoteId, SessionId};
pub use money::Money;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
