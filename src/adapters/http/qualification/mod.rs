//! HTTP adapter for qualification endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, GoToStepRequest, OpenSessionRequest, SessionResponse};
pub use handlers::QualificationAppState;
pub use routes::qualification_router;
