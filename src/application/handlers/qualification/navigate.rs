//! NavigateHandler - Command handler for moving between steps.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::pricing::PriceEstimator;
use crate::ports::ActiveSessionStore;

use super::errors::QualificationError;
use super::lookup::{load_session, store_session};
use super::view::SessionView;

/// Where to move. Every move is clamped to the session's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Next,
    Previous,
    /// Jump to a 1-based ordinal, e.g. to edit a summary group.
    To(usize),
}

#[derive(Debug, Clone)]
pub struct NavigateCommand {
    pub session_id: SessionId,
    pub navigation: Navigation,
}

pub struct NavigateHandler {
    sessions: Arc<dyn ActiveSessionStore>,
    estimator: Arc<PriceEstimator>,
}

impl NavigateHandler {
    pub fn new(sessions: Arc<dyn ActiveSessionStore>, estimator: Arc<PriceEstimator>) -> Self {
        Self {
            sessions,
            estimator,
        }
    }

    pub async fn handle(&self, cmd: NavigateCommand) -> Result<SessionView, QualificationError> {
        let mut session = load_session(self.sessions.as_ref(), cmd.session_id).await?;
        let from = session.current_ordinal();

        let to = match cmd.navigation {
            Navigation::Next => session.advance(),
            Navigation::Previous => session.retreat(),
            Navigation::To(ordinal) => session.go_to(ordinal),
        };

        debug!(session_id = %cmd.session_id, from, to, "Navigated");

        let view = SessionView::of(&session, &self.estimator);
        store_session(self.sessions.as_ref(), session).await?;
        Ok(view)
    }
}
