//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::qualification::{
    CancelSessionCommand, CancelSessionHandler, FinishSessionCommand, FinishSessionHandler,
    GetSessionHandler, GetSessionQuery, NavigateCommand, NavigateHandler, Navigation,
    OpenSessionCommand, OpenSessionHandler, PreviewHandler, PreviewQuery, QualificationError,
    SessionView, UpdateRecordCommand, UpdateRecordHandler,
};
