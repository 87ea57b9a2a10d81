//! CancelSessionHandler - Command handler for abandoning a qualification.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::SessionId;
use crate::ports::ActiveSessionStore;

use super::errors::QualificationError;

#[derive(Debug, Clone)]
pub struct CancelSessionCommand {
    pub session_id: SessionId,
}

/// Discards a session; nothing is written to the quote.
pub struct CancelSessionHandler {
    sessions: Arc<dyn ActiveSessionStore>,
}

impl CancelSessionHandler {
    pub fn new(sessions: Arc<dyn ActiveSessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: CancelSessionCommand) -> Result<(), QualificationError> {
        let removed = self.sessions.remove(&cmd.session_id).await?;
        let session = removed.ok_or(QualificationError::SessionNotFound(cmd.session_id))?;

        info!(
            session_id = %cmd.session_id,
            quote_id = %session.quote_id(),
            "Cancelled qualification session"
        );
        Ok(())
    }
}
