//! GetSessionHandler - Query handler for an open session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::pricing::PriceEstimator;
use crate::ports::ActiveSessionStore;

use super::errors::QualificationError;
use super::lookup::load_session;
use super::view::SessionView;

#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

pub struct GetSessionHandler {
    sessions: Arc<dyn ActiveSessionStore>,
    estimator: Arc<PriceEstimator>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn ActiveSessionStore>, estimator: Arc<PriceEstimator>) -> Self {
        Self {
            sessions,
            estimator,
        }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, QualificationError> {
        let session = load_session(self.sessions.as_ref(), query.session_id).await?;
        Ok(SessionView::of(&session, &self.estimator))
    }
}
