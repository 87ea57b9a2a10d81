//! HTTP DTOs for qualification endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::qualification::{QualificationError, SessionView};
use crate::domain::pricing::PriceEstimate;
use crate::domain::record::FormRecord;
use crate::domain::wizard::WizardStep;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to open a qualification for a quote.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSessionRequest {
    pub quote_id: String,
    /// Resume from the quote's saved record when there is one.
    #[serde(default)]
    pub resume: bool,
}

/// Request to jump to a step.
#[derive(Debug, Clone, Deserialize)]
pub struct GoToStepRequest {
    pub step: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session state for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub quote_id: String,
    pub current_step: WizardStep,
    pub steps: Vec<WizardStep>,
    pub on_summary: bool,
    pub resumed: bool,
    pub record: FormRecord,
    pub estimate: PriceEstimate,
    pub opened_at: String,
    pub updated_at: String,
}

impl From<SessionView> for SessionResponse {
    fn from(view: SessionView) -> Self {
        Self {
            id: view.id.to_string(),
            quote_id: view.quote_id.to_string(),
            current_step: view.current_step,
            steps: view.steps,
            on_summary: view.on_summary,
            resumed: view.resumed,
            record: view.record,
            estimate: view.estimate,
            opened_at: view.opened_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// A request body that could not be read as the expected JSON.
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self {
            code: "INVALID_BODY".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&QualificationError> for ErrorResponse {
    fn from(err: &QualificationError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message(),
            details: None,
        }
    }
}
