//! FinishSessionHandler - Command handler for sealing a qualification.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::pricing::PriceEstimator;
use crate::domain::wizard::FinishedRecord;
use crate::ports::{ActiveSessionStore, QuoteRecordRepository};

use super::errors::QualificationError;
use super::lookup::load_session;

#[derive(Debug, Clone)]
pub struct FinishSessionCommand {
    pub session_id: SessionId,
}

/// Seals the record, files it against the quote and closes the session.
pub struct FinishSessionHandler {
    records: Arc<dyn QuoteRecordRepository>,
    sessions: Arc<dyn ActiveSessionStore>,
    estimator: Arc<PriceEstimator>,
}

impl FinishSessionHandler {
    pub fn new(
        records: Arc<dyn QuoteRecordRepository>,
        sessions: Arc<dyn ActiveSessionStore>,
        estimator: Arc<PriceEstimator>,
    ) -> Self {
        Self {
            records,
            sessions,
            estimator,
        }
    }

    pub async fn handle(
        &self,
        cmd: FinishSessionCommand,
    ) -> Result<FinishedRecord, QualificationError> {
        // 1. Seal the record; the session stays open if this fails
        let session = load_session(self.sessions.as_ref(), cmd.session_id).await?;
        let finished = session.finish(&self.estimator).map_err(|err| {
            warn!(session_id = %cmd.session_id, error = %err, "Cannot finish session");
            QualificationError::from(err)
        })?;

        // 2. Persist, then close the session
        self.records.save(&finished).await?;
        self.sessions.remove(&cmd.session_id).await?;

        info!(
            session_id = %cmd.session_id,
            quote_id = %finished.quote_id,
            recommended = %finished.estimate.recommended,
            "Finished qualification"
        );

        Ok(finished)
    }
}
