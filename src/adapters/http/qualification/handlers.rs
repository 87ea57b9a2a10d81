//! HTTP handlers for qualification endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::qualification::{
    CancelSessionCommand, CancelSessionHandler, FinishSessionCommand, FinishSessionHandler,
    GetSessionHandler, GetSessionQuery, NavigateCommand, NavigateHandler, Navigation,
    OpenSessionCommand, OpenSessionHandler, PreviewHandler, PreviewQuery, QualificationError,
    UpdateRecordCommand, UpdateRecordHandler,
};
use crate::domain::foundation::{QuoteId, SessionId};
use crate::domain::pricing::PriceEstimator;
use crate::domain::record::RecordPatch;
use crate::domain::wizard::WizardError;
use crate::ports::{ActiveSessionStore, QuoteRecordRepository};

use super::dto::{ErrorResponse, GoToStepRequest, OpenSessionRequest, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state shared by the qualification endpoints.
#[derive(Clone)]
pub struct QualificationAppState {
    pub records: Arc<dyn QuoteRecordRepository>,
    pub sessions: Arc<dyn ActiveSessionStore>,
    pub estimator: Arc<PriceEstimator>,
}

impl QualificationAppState {
    pub fn new(
        records: Arc<dyn QuoteRecordRepository>,
        sessions: Arc<dyn ActiveSessionStore>,
        estimator: Arc<PriceEstimator>,
    ) -> Self {
        Self {
            records,
            sessions,
            estimator,
        }
    }

    pub fn open_handler(&self) -> OpenSessionHandler {
        OpenSessionHandler::new(
            self.records.clone(),
            self.sessions.clone(),
            self.estimator.clone(),
        )
    }

    pub fn get_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.sessions.clone(), self.estimator.clone())
    }

    pub fn update_handler(&self) -> UpdateRecordHandler {
        UpdateRecordHandler::new(self.sessions.clone(), self.estimator.clone())
    }

    pub fn navigate_handler(&self) -> NavigateHandler {
        NavigateHandler::new(self.sessions.clone(), self.estimator.clone())
    }

    pub fn preview_handler(&self) -> PreviewHandler {
        PreviewHandler::new(self.sessions.clone(), self.estimator.clone())
    }

    pub fn finish_handler(&self) -> FinishSessionHandler {
        FinishSessionHandler::new(
            self.records.clone(),
            self.sessions.clone(),
            self.estimator.clone(),
        )
    }

    pub fn cancel_handler(&self) -> CancelSessionHandler {
        CancelSessionHandler::new(self.sessions.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/qualifications - Open a qualification for a quote
pub async fn open_session(
    State(state): State<QualificationAppState>,
    body: Result<Json<OpenSessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let quote_id = match req.quote_id.parse::<QuoteId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid quote ID")),
            )
                .into_response()
        }
    };

    let cmd = OpenSessionCommand {
        quote_id,
        resume: req.resume,
    };

    match state.open_handler().handle(cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// GET /api/qualifications/:id - Current session state
pub async fn get_session(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_handler().handle(GetSessionQuery { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// PATCH /api/qualifications/:id/record - Write one step's answers
pub async fn update_record(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
    body: Result<Json<RecordPatch>, JsonRejection>,
) -> Response {
    let Json(patch) = match body {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateRecordCommand { session_id, patch };

    match state.update_handler().handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// POST /api/qualifications/:id/next - Advance one step
pub async fn next_step(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    navigate(state, session_id, Navigation::Next).await
}

/// POST /api/qualifications/:id/previous - Go back one step
pub async fn previous_step(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    navigate(state, session_id, Navigation::Previous).await
}

/// POST /api/qualifications/:id/goto - Jump to a step
pub async fn go_to_step(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
    body: Result<Json<GoToStepRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    navigate(state, session_id, Navigation::To(req.step)).await
}

async fn navigate(
    state: QualificationAppState,
    session_id: String,
    navigation: Navigation,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = NavigateCommand {
        session_id,
        navigation,
    };

    match state.navigate_handler().handle(cmd).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// GET /api/qualifications/:id/estimate - Live price estimate
pub async fn get_estimate(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.preview_handler().estimate(PreviewQuery { session_id }).await {
        Ok(estimate) => (StatusCode::OK, Json(estimate)).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// GET /api/qualifications/:id/summary - Review groups and estimate
pub async fn get_summary(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.preview_handler().export(PreviewQuery { session_id }).await {
        Ok(bundle) => (StatusCode::OK, Json(bundle)).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// POST /api/qualifications/:id/finish - Save the record and close the session
pub async fn finish_session(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .finish_handler()
        .handle(FinishSessionCommand { session_id })
        .await
    {
        Ok(finished) => (StatusCode::OK, Json(finished)).into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

/// DELETE /api/qualifications/:id - Discard the session
pub async fn cancel_session(
    State(state): State<QualificationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .cancel_handler()
        .handle(CancelSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_qualification_error(e),
    }
}

fn invalid_body(rejection: JsonRejection) -> Response {
    (
        rejection.status(),
        Json(ErrorResponse::invalid_body(rejection.body_text())),
    )
        .into_response()
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_qualification_error(error: QualificationError) -> Response {
    let status = match &error {
        QualificationError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        QualificationError::Wizard(WizardError::CategoryRequired) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        QualificationError::Wizard(WizardError::SliceMismatch(_)) => StatusCode::CONFLICT,
        QualificationError::Infrastructure(msg) => {
            tracing::error!("Qualification request failed: {}", msg);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}
