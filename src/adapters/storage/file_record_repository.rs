//! File-based Quote Record Repository
//!
//! Stores finished qualification records as YAML files on disk, one
//! directory per quote for easy navigation and debugging.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, QuoteId};
use crate::domain::record::FormRecord;
use crate::domain::wizard::FinishedRecord;
use crate::ports::QuoteRecordRepository;

const RECORD_FILE: &str = "qualification.yaml";

/// File-based storage for qualification records
#[derive(Debug, Clone)]
pub struct FileQuoteRecordRepository {
    base_path: PathBuf,
}

impl FileQuoteRecordRepository {
    /// Create a new repository rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileQuoteRecordRepository::new("./data/qualifications");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the directory path for a specific quote
    fn quote_dir(&self, quote_id: &QuoteId) -> PathBuf {
        self.base_path.join(quote_id.to_string())
    }

    /// Get the record file path for a quote
    fn record_file_path(&self, quote_id: &QuoteId) -> PathBuf {
        self.quote_dir(quote_id).join(RECORD_FILE)
    }

    async fn read_finished(
        &self,
        quote_id: &QuoteId,
    ) -> Result<Option<FinishedRecord>, DomainError> {
        let file_path = self.record_file_path(quote_id);
        if !file_path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&file_path).await.map_err(|e| {
            DomainError::storage(e.to_string()).with_detail("path", file_path.display().to_string())
        })?;

        // Unknown categories and other malformed records are rejected here
        let finished = serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::serialization(e.to_string())
                .with_detail("path", file_path.display().to_string())
        })?;

        Ok(Some(finished))
    }
}

#[async_trait]
impl QuoteRecordRepository for FileQuoteRecordRepository {
    async fn save(&self, finished: &FinishedRecord) -> Result<(), DomainError> {
        let dir = self.quote_dir(&finished.quote_id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        let yaml = serde_yaml::to_string(finished)
            .map_err(|e| DomainError::serialization(e.to_string()))?;

        let file_path = self.record_file_path(&finished.quote_id);
        fs::write(&file_path, yaml).await.map_err(|e| {
            DomainError::storage(e.to_string()).with_detail("path", file_path.display().to_string())
        })?;

        tracing::debug!(
            quote_id = %finished.quote_id,
            path = %file_path.display(),
            "Saved qualification record"
        );
        Ok(())
    }

    async fn find_by_quote(&self, quote_id: &QuoteId) -> Result<Option<FormRecord>, DomainError> {
        Ok(self.read_finished(quote_id).await?.map(|f| f.record))
    }

    async fn find_finished(
        &self,
        quote_id: &QuoteId,
    ) -> Result<Option<FinishedRecord>, DomainError> {
        self.read_finished(quote_id).await
    }
}
