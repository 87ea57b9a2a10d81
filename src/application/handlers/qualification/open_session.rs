//! OpenSessionHandler - Command handler for opening a qualification.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::QuoteId;
use crate::domain::pricing::PriceEstimator;
use crate::domain::wizard::WizardSession;
use crate::ports::{ActiveSessionStore, QuoteRecordRepository};

use super::errors::QualificationError;
use super::view::SessionView;

/// Command to open a qualification for a quote.
#[derive(Debug, Clone)]
pub struct OpenSessionCommand {
    pub quote_id: QuoteId,
    /// Seed the session from the quote's saved record, if one exists.
    pub resume: bool,
}

/// Handler for opening sessions.
pub struct OpenSessionHandler {
    records: Arc<dyn QuoteRecordRepository>,
    sessions: Arc<dyn ActiveSessionStore>,
    estimator: Arc<PriceEstimator>,
}

impl OpenSessionHandler {
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

    pub async fn handle(&self, cmd: OpenSessionCommand) -> Result<SessionView, QualificationError> {
        // 1. Load the saved record before the first plan is derived
        let existing = if cmd.resume {
            self.records.find_by_quote(&cmd.quote_id).await?
        } else {
            None
        };

        // 2. Open and register the session
        let session = WizardSession::open(cmd.quote_id, existing);
        let view = SessionView::of(&session, &self.estimator);
        self.sessions.insert(session).await?;

        info!(
            session_id = %view.id,
            quote_id = %view.quote_id,
            resumed = view.resumed,
            step = view.current_step.ordinal,
            "Opened qualification session"
        );

        Ok(view)
    }
}
