//! Qualification command and query handlers.

mod cancel_session;
mod errors;
mod finish_session;
mod get_session;
mod lookup;
mod navigate;
mod open_session;
mod preview;
mod update_record;
mod view;

pub use cancel_session::{CancelSessionCommand, CancelSessionHandler};
pub use errors::QualificationError;
pub use finish_session::{FinishSessionCommand, FinishSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use navigate::{NavigateCommand, NavigateHandler, Navigation};
pub use open_session::{OpenSessionCommand, OpenSessionHandler};
pub use preview::{PreviewHandler, PreviewQuery};
pub use update_record::{UpdateRecordCommand, UpdateRecordHandler};
pub use view::SessionView;
