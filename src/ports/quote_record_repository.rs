//! Quote record repository port.
//!
//! The sales tool keeps one qualification record per quote. This port is
//! how a session is seeded from a saved record and how a finished record
//! is filed back.
//!
//! # Design
//!
//! - **Keyed by quote**: at most one record per quote, last write wins
//! - **Finished only**: in-flight sessions are never persisted here

use crate::domain::foundation::{DomainError, QuoteId};
use crate::domain::record::FormRecord;
use crate::domain::wizard::FinishedRecord;
use async_trait::async_trait;

/// Repository port for qualification records.
#[async_trait]
pub trait QuoteRecordRepository: Send + Sync {
    /// Saves a finished record, replacing any earlier one for the quote.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    /// - `SerializationError` if the record cannot be encoded
    async fn save(&self, finished: &FinishedRecord) -> Result<(), DomainError>;

    /// Finds the saved form record for a quote.
    ///
    /// Returns `None` if the quote was never qualified.
    async fn find_by_quote(&self, quote_id: &QuoteId) -> Result<Option<FormRecord>, DomainError>;

    /// Finds the full finished record, estimate included.
    async fn find_finished(
        &self,
        quote_id: &QuoteId,
    ) -> Result<Option<FinishedRecord>, DomainError>;
}
