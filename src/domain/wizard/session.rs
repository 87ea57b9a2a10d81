//! WizardSession - one qualification in progress.
//!
//! A session owns the form record and the cursor into the step plan. The
//! plan is never stored independently of the record: it is re-derived
//! whenever the category may have changed.

use crate::domain::foundation::{QuoteId, SessionId, Timestamp};
use crate::domain::pricing::{PriceEstimate, PriceEstimator};
use crate::domain::record::{FormRecord, RecordPatch};
use crate::domain::summary::{SummaryGroup, SummaryProjector};

use super::errors::WizardError;
use super::outcome::{ExportBundle, FinishedRecord};
use super::planner::{StepPlan, StepPlanner};
use super::step::{StepId, WizardStep};

#[derive(Debug, Clone)]
pub struct WizardSession {
    id: SessionId,
    quote_id: QuoteId,
    record: FormRecord,
    plan: StepPlan,
    current_step: usize,
    /// Seeded from a saved record; category changes land on the summary.
    resumed: bool,
    opened_at: Timestamp,
    updated_at: Timestamp,
}

impl WizardSession {
    /// Opens a session for a quote.
    ///
    /// A saved record resumes at the summary step of its plan; otherwise
    /// the session starts blank at step 1.
    pub fn open(quote_id: QuoteId, existing: Option<FormRecord>) -> Self {
        let resumed = existing.is_some();
        let record = existing.unwrap_or_default();
        let plan = StepPlanner::plan_for(record.category());
        let current_step = if resumed { plan.last_ordinal() } else { 1 };
        let now = Timestamp::now();

        Self {
            id: SessionId::new(),
            quote_id,
            record,
            plan,
            current_step,
            resumed,
            opened_at: now,
            updated_at: now,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn quote_id(&self) -> QuoteId {
        self.quote_id
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    /// Ordinal of the step being shown.
    pub fn current_ordinal(&self) -> usize {
        self.current_step
    }

    /// The step being shown.
    pub fn current_step(&self) -> WizardStep {
        self.plan
            .step(self.current_step)
            .copied()
            .unwrap_or_else(|| WizardStep::new(1, StepId::Intro))
    }

    pub fn is_on_summary(&self) -> bool {
        self.plan.is_summary(self.current_step)
    }

    pub fn is_resumed(&self) -> bool {
        self.resumed
    }

    pub fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Moves one step forward, stopping at the last step.
    pub fn advance(&mut self) -> usize {
        self.go_to(self.current_step.saturating_add(1))
    }

    /// Moves one step back, stopping at step 1.
    pub fn retreat(&mut self) -> usize {
        self.go_to(self.current_step.saturating_sub(1))
    }

    /// Jumps to an ordinal, clamped into the current plan.
    ///
    /// Used by the summary step to revisit the step a group came from.
    pub fn go_to(&mut self, ordinal: usize) -> usize {
        self.plan = StepPlanner::plan_for(self.record.category());
        self.current_step = self.plan.clamp(ordinal);
        self.touch();
        self.current_step
    }

    // ───────────────────────────────────────────────────────────────
    // Answers
    // ───────────────────────────────────────────────────────────────

    /// Merges one slice of answers into the record.
    ///
    /// A category change re-plans the session: back to step 1, or to the
    /// new summary step for a resumed session. A rejected patch leaves the
    /// session untouched.
    pub fn apply_patch(&mut self, patch: RecordPatch) -> Result<(), WizardError> {
        let before = self.record.category();
        self.record.apply_patch(patch)?;

        if self.record.category() != before {
            self.plan = StepPlanner::plan_for(self.record.category());
            self.current_step = if self.resumed {
                self.plan.last_ordinal()
            } else {
                1
            };
        }
        self.touch();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Outputs
    // ───────────────────────────────────────────────────────────────

    /// Live estimate of the record as it stands.
    pub fn estimate(&self, estimator: &PriceEstimator) -> PriceEstimate {
        estimator.estimate(&self.record)
    }

    pub fn summary(&self) -> Vec<SummaryGroup> {
        SummaryProjector::project(&self.record)
    }

    pub fn export_bundle(&self, estimator: &PriceEstimator) -> ExportBundle {
        ExportBundle {
            quote_id: self.quote_id,
            groups: self.summary(),
            estimate: self.estimate(estimator),
        }
    }

    /// Seals the record with its estimate.
    ///
    /// # Errors
    ///
    /// - `CategoryRequired` if no category was chosen
    pub fn finish(&self, estimator: &PriceEstimator) -> Result<FinishedRecord, WizardError> {
        if self.record.category().is_none() {
            return Err(WizardError::CategoryRequired);
        }

        Ok(FinishedRecord {
            quote_id: self.quote_id,
            record: self.record.clone(),
            estimate: self.estimate(estimator),
            finished_at: Timestamp::now(),
        })
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
