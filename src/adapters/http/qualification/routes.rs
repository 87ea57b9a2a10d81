//! Route configuration for qualification endpoints.

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{
    cancel_session, finish_session, get_estimate, get_session, get_summary, go_to_step,
    next_step, open_session, previous_step, update_record, QualificationAppState,
};

/// Creates the qualification router with all endpoints.
///
/// Routes:
/// - `POST /api/qualifications` - Open a session for a quote
/// - `GET /api/qualifications/:id` - Session state with live estimate
/// - `DELETE /api/qualifications/:id` - Cancel the session
/// - `PATCH /api/qualifications/:id/record` - Write one step's answers
/// - `POST /api/qualifications/:id/next` - Advance one step
/// - `POST /api/qualifications/:id/previous` - Go back one step
/// - `POST /api/qualifications/:id/goto` - Jump to a step
/// - `GET /api/qualifications/:id/estimate` - Price estimate
/// - `GET /api/qualifications/:id/summary` - Review groups and estimate
/// - `POST /api/qualifications/:id/finish` - Save and close
pub fn qualification_router() -> Router<QualificationAppState> {
    Router::new()
        .route("/api/qualifications", post(open_session))
        .route(
            "/api/qualifications/:id",
            get(get_session).delete(cancel_session),
        )
        .route("/api/qualifications/:id/record", patch(update_record))
        .route("/api/qualifications/:id/next", post(next_step))
        .route("/api/qualifications/:id/previous", post(previous_step))
        .route("/api/qualifications/:id/goto", post(go_to_step))
        .route("/api/qualifications/:id/estimate", get(get_estimate))
        .route("/api/qualifications/:id/summary", get(get_summary))
        .route("/api/qualifications/:id/finish", post(finish_session))
}
