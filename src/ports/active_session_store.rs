//! Active session store port.
//!
//! Holds sessions between HTTP requests. Sessions are discarded on cancel
//! or finish and are never expected to survive a restart.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::wizard::WizardSession;
use async_trait::async_trait;

#[async_trait]
pub trait ActiveSessionStore: Send + Sync {
    /// Stores a newly opened session.
    async fn insert(&self, session: WizardSession) -> Result<(), DomainError>;

    /// Returns a copy of the session, or `None` if it is not active.
    async fn get(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError>;

    /// Replaces an active session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session was removed meanwhile
    async fn update(&self, session: WizardSession) -> Result<(), DomainError>;

    /// Removes a session, returning it if it was active.
    async fn remove(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ActiveSessionStore) {}
    }
}
