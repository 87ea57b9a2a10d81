//! Qualification handler errors.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::wizard::WizardError;

/// Errors surfaced by the qualification handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualificationError {
    /// No active session with this id.
    SessionNotFound(SessionId),
    /// The wizard rejected the operation.
    Wizard(WizardError),
    /// Storage or serialization failure.
    Infrastructure(String),
}

impl QualificationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QualificationError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            QualificationError::Wizard(err) => err.code(),
            QualificationError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            QualificationError::SessionNotFound(id) => format!("Session not found: {}", id),
            QualificationError::Wizard(err) => err.to_string(),
            QualificationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for QualificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QualificationError {}

impl From<DomainError> for QualificationError {
    fn from(err: DomainError) -> Self {
        QualificationError::Infrastructure(err.to_string())
    }
}

impl From<WizardError> for QualificationError {
    fn from(err: WizardError) -> Self {
        QualificationError::Wizard(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variants() {
        let id = SessionId::new();
        assert_eq!(
            QualificationError::SessionNotFound(id).code(),
            ErrorCode::SessionNotFound
        );
        assert_eq!(
            QualificationError::from(WizardError::CategoryRequired).code(),
            ErrorCode::CategoryRequired
        );
    }

    #[test]
    fn domain_errors_become_infrastructure() {
        let err = QualificationError::from(DomainError::storage("disk full"));
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(err.message().contains("disk full"));
    }

    #[test]
    fn not_found_message_names_session() {
        let id = SessionId::new();
        let err = QualificationError::SessionNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
