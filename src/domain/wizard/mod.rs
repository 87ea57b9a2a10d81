//! Qualification wizard - step planning and the session that drives it.

mod errors;
mod outcome;
mod planner;
mod session;
mod step;

pub use errors::WizardError;
pub use outcome::{ExportBundle, FinishedRecord};
pub use planner::{StepPlan, StepPlanner};
pub use session::WizardSession;
pub use step::{StepId, WizardStep};
