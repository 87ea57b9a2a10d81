//! In-Memory Active Session Store
//!
//! Sessions live only as long as the process. A session left untouched for
//! longer than the idle timeout is treated as abandoned and dropped.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::wizard::WizardSession;
use crate::ports::ActiveSessionStore;

/// Idle timeout used by [`InMemorySessionStore::new`].
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, WizardSession>>>,
    idle_timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Get the number of active sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for longer than the timeout.
    ///
    /// Returns how many were dropped.
    pub async fn evict_idle(&self) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_idle(session, now));

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    fn is_idle(&self, session: &WizardSession, now: Timestamp) -> bool {
        session.updated_at().elapsed_until(now) > self.idle_timeout
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActiveSessionStore for InMemorySessionStore {
    async fn insert(&self, session: WizardSession) -> Result<(), DomainError> {
        self.evict_idle().await;
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError> {
        let sessions = self.sessions.read().await;
        let now = Timestamp::now();
        Ok(sessions
            .get(id)
            .filter(|session| !self.is_idle(session, now))
            .cloned())
    }

    async fn update(&self, session: WizardSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id()) {
            Some(slot) => {
                *slot = session;
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )),
        }
    }

    async fn remove(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id))
    }
}
