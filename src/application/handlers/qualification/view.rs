//! SessionView - what callers see of a session after each command.

use serde::Serialize;

use crate::domain::foundation::{QuoteId, SessionId, Timestamp};
use crate::domain::pricing::{PriceEstimate, PriceEstimator};
use crate::domain::record::FormRecord;
use crate::domain::wizard::{WizardSession, WizardStep};

/// Snapshot of a session with its live estimate.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub quote_id: QuoteId,
    pub current_step: WizardStep,
    pub steps: Vec<WizardStep>,
    pub on_summary: bool,
    pub resumed: bool,
    pub record: FormRecord,
    pub estimate: PriceEstimate,
    pub opened_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SessionView {
    pub fn of(session: &WizardSession, estimator: &PriceEstimator) -> Self {
        Self {
            id: session.id(),
            quote_id: session.quote_id(),
            current_step: session.current_step(),
            steps: session.plan().steps().to_vec(),
            on_summary: session.is_on_summary(),
            resumed: session.is_resumed(),
            record: session.record().clone(),
            estimate: session.estimate(estimator),
            opened_at: session.opened_at(),
            updated_at: session.updated_at(),
        }
    }
}
