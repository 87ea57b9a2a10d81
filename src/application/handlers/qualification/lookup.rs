//! Session lookup shared by the handlers that act on an open session.

use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::wizard::WizardSession;
use crate::ports::ActiveSessionStore;

use super::errors::QualificationError;

pub(super) async fn load_session(
    sessions: &dyn ActiveSessionStore,
    id: SessionId,
) -> Result<WizardSession, QualificationError> {
    sessions
        .get(&id)
        .await?
        .ok_or(QualificationError::SessionNotFound(id))
}

pub(super) async fn store_session(
    sessions: &dyn ActiveSessionStore,
    session: WizardSession,
) -> Result<(), QualificationError> {
    let id = session.id();
    sessions.update(session).await.map_err(|err| match err.code {
        ErrorCode::SessionNotFound => QualificationError::SessionNotFound(id),
        _ => err.into(),
    })
}
