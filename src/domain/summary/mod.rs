//! Summary projector - review panels for the final step.

mod group;
mod projector;

pub use group::{SummaryEntry, SummaryGroup};
pub use projector::{SummaryProjector, BUDGET_TITLE, SERVICE_TITLE};
