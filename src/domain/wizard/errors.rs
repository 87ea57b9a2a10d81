//! Wizard errors.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::record::PatchError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("A service category must be chosen before finishing")]
    CategoryRequired,

    #[error(transparent)]
    SliceMismatch(#[from] PatchError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::CategoryRequired => ErrorCode::CategoryRequired,
            WizardError::SliceMismatch(_) => ErrorCode::SliceMismatch,
        }
    }
}
