//! In-Memory Quote Record Repository
//!
//! Keeps finished records in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, QuoteId};
use crate::domain::record::FormRecord;
use crate::domain::wizard::FinishedRecord;
use crate::ports::QuoteRecordRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteRecordRepository {
    records: Arc<RwLock<HashMap<QuoteId, FinishedRecord>>>,
}

impl InMemoryQuoteRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a form record as if a previous qualification had finished.
    pub async fn seed(&self, finished: FinishedRecord) {
        self.records.write().await.insert(finished.quote_id, finished);
    }

    /// Get the number of stored records
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl QuoteRecordRepository for InMemoryQuoteRecordRepository {
    async fn save(&self, finished: &FinishedRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(finished.quote_id, finished.clone());
        Ok(())
    }

    async fn find_by_quote(&self, quote_id: &QuoteId) -> Result<Option<FormRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(quote_id).map(|f| f.record.clone()))
    }

    async fn find_finished(
        &self,
        quote_id: &QuoteId,
    ) -> Result<Option<FinishedRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(quote_id).cloned())
    }
}
