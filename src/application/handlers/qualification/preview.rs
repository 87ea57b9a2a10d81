//! PreviewHandler - Query handler for the live estimate and export bundle.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::pricing::{PriceEstimate, PriceEstimator};
use crate::domain::wizard::ExportBundle;
use crate::ports::ActiveSessionStore;

use super::errors::QualificationError;
use super::lookup::load_session;

#[derive(Debug, Clone)]
pub struct PreviewQuery {
    pub session_id: SessionId,
}

/// Serves estimates and summaries without mutating the session.
pub struct PreviewHandler {
    sessions: Arc<dyn ActiveSessionStore>,
    estimator: Arc<PriceEstimator>,
}

impl PreviewHandler {
    pub fn new(sessions: Arc<dyn ActiveSessionStore>, estimator: Arc<PriceEstimator>) -> Self {
        Self {
            sessions,
            estimator,
        }
    }

    /// Estimate of the session's record as it stands.
    pub async fn estimate(&self, query: PreviewQuery) -> Result<PriceEstimate, QualificationError> {
        let session = load_session(self.sessions.as_ref(), query.session_id).await?;
        let estimate = session.estimate(&self.estimator);

        debug!(
            session_id = %query.session_id,
            recommended = %estimate.recommended,
            confidence = estimate.confidence.label(),
            "Computed estimate"
        );

        Ok(estimate)
    }

    /// Summary groups and estimate, as handed to exports.
    pub async fn export(&self, query: PreviewQuery) -> Result<ExportBundle, QualificationError> {
        let session = load_session(self.sessions.as_ref(), query.session_id).await?;
        Ok(session.export_bundle(&self.estimator))
    }
}
