//! UpdateRecordHandler - Command handler for writing one step's answers.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::SessionId;
use crate::domain::pricing::PriceEstimator;
use crate::domain::record::RecordPatch;
use crate::ports::ActiveSessionStore;

use super::errors::QualificationError;
use super::lookup::{load_session, store_session};
use super::view::SessionView;

/// Command to merge one slice of answers into a session's record.
#[derive(Debug, Clone)]
pub struct UpdateRecordCommand {
    pub session_id: SessionId,
    pub patch: RecordPatch,
}

pub struct UpdateRecordHandler {
    sessions: Arc<dyn ActiveSessionStore>,
    estimator: Arc<PriceEstimator>,
}

impl UpdateRecordHandler {
    pub fn new(sessions: Arc<dyn ActiveSessionStore>, estimator: Arc<PriceEstimator>) -> Self {
        Self {
            sessions,
            estimator,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRecordCommand,
    ) -> Result<SessionView, QualificationError> {
        let mut session = load_session(self.sessions.as_ref(), cmd.session_id).await?;
        let slice = cmd.patch.slice_name();
        let before = session.current_ordinal();

        if let Err(err) = session.apply_patch(cmd.patch) {
            warn!(session_id = %cmd.session_id, slice, error = %err, "Rejected record patch");
            return Err(err.into());
        }

        debug!(
            session_id = %cmd.session_id,
            slice,
            from_step = before,
            to_step = session.current_ordinal(),
            "Applied record patch"
        );

        let view = SessionView::of(&session, &self.estimator);
        store_session(self.sessions.as_ref(), session).await?;
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::catalog::Category;
    use crate::domain::foundation::QuoteId;
    use crate::domain::record::{ContextPatch, MobilePatch};
    use crate::domain::wizard::{WizardError, WizardSession};

    async fn setup() -> (UpdateRecordHandler, InMemorySessionStore, SessionId) {
        let store = InMemorySessionStore::new();
        let session = WizardSession::open(QuoteId::new(), None);
        let id = session.id();
        store.insert(session).await.unwrap();
        let handler =
            UpdateRecordHandler::new(Arc::new(store.clone()), Arc::new(PriceEstimator::default()));
        (handler, store, id)
    }

    #[tokio::test]
    async fn category_patch_replans_and_persists() {
        let (handler, store, id) = setup().await;

        let view = handler
            .handle(UpdateRecordCommand {
                session_id: id,
                patch: RecordPatch::Context(ContextPatch {
                    category: Some(Category::Mobile),
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        assert_eq!(view.steps.len(), 5);
        assert!(view.estimate.is_priced());
        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.record().category(), Some(Category::Mobile));
    }

    #[tokio::test]
    async fn mismatched_patch_is_rejected() {
        let (handler, store, id) = setup().await;

        let err = handler
            .handle(UpdateRecordCommand {
                session_id: id,
                patch: RecordPatch::Mobile(MobilePatch::default()),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            QualificationError::Wizard(WizardError::SliceMismatch(_))
        ));
        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.record().category(), None);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (handler, _, _) = setup().await;
        let missing = SessionId::new();
        let err = handler
            .handle(UpdateRecordCommand {
                session_id: missing,
                patch: RecordPatch::Context(ContextPatch::default()),
            })
            .await
            .unwrap_err();
        assert_eq!(err, QualificationError::SessionNotFound(missing));
    }
}
