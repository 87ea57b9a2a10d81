//! Step planner - category in, ordered step plan out.

use serde::Serialize;

use crate::domain::catalog::Category;

use super::step::{StepId, WizardStep};

/// Ordered, 1-based, contiguous list of steps.
///
/// The last step is the summary whenever a category is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepPlan {
    steps: Vec<WizardStep>,
}

impl StepPlan {
    fn from_ids(ids: impl IntoIterator<Item = StepId>) -> Self {
        let steps = ids
            .into_iter()
            .enumerate()
            .map(|(idx, id)| WizardStep::new(idx + 1, id))
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ordinal of the final step.
    pub fn last_ordinal(&self) -> usize {
        self.steps.len()
    }

    /// Step at a 1-based ordinal.
    pub fn step(&self, ordinal: usize) -> Option<&WizardStep> {
        ordinal.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    /// True for the summary ordinal of a categorized plan.
    pub fn is_summary(&self, ordinal: usize) -> bool {
        self.steps.len() > 1 && ordinal == self.steps.len()
    }

    /// Ordinal at which `id` appears, if it is part of the plan.
    pub fn ordinal_of(&self, id: StepId) -> Option<usize> {
        self.steps.iter().find(|s| s.id == id).map(|s| s.ordinal)
    }

    /// Clamps an ordinal into `[1, len]`.
    pub fn clamp(&self, ordinal: usize) -> usize {
        ordinal.clamp(1, self.last_ordinal().max(1))
    }
}

/// Derives step plans from the chosen category.
pub struct StepPlanner;

impl StepPlanner {
    /// Category-specific steps, between intro and summary.
    pub fn category_steps(category: Category) -> &'static [StepId] {
        match category {
            Category::Showcase | Category::WebApp => &[
                StepId::Pages,
                StepId::WebFeatures,
                StepId::WebDesign,
                StepId::Technical,
            ],
            Category::Mobile => &[
                StepId::Platforms,
                StepId::MobileFeatures,
                StepId::MobileDesign,
            ],
            Category::Ecommerce => &[StepId::Catalog, StepId::Payment, StepId::StoreFeatures],
            Category::Identity => &[StepId::IdentityPackage, StepId::IdentityStyle],
            Category::Automation => &[
                StepId::AutomationTypes,
                StepId::Integrations,
                StepId::AutomationScope,
            ],
        }
    }

    /// Full plan for a category: intro, category steps, summary.
    pub fn plan(category: Category) -> StepPlan {
        let middle = Self::category_steps(category).iter().copied();
        StepPlan::from_ids(
            std::iter::once(StepId::Intro)
                .chain(middle)
                .chain(std::iter::once(StepId::Summary)),
        )
    }

    /// Plan for a possibly-unset category. Without one only the intro exists.
    pub fn plan_for(category: Option<Category>) -> StepPlan {
        match category {
            Some(category) => Self::plan(category),
            None => StepPlan::from_ids([StepId::Intro]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_category_plans_intro_only() {
        let plan = StepPlanner::plan_for(None);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.step(1).map(|s| s.id), Some(StepId::Intro));
        assert!(!plan.is_summary(1));
    }

    #[test]
    fn plan_lengths_per_category() {
        let len = |c| StepPlanner::plan(c).len();
        assert_eq!(len(Category::Showcase), 6);
        assert_eq!(len(Category::WebApp), 6);
        assert_eq!(len(Category::Mobile), 5);
        assert_eq!(len(Category::Ecommerce), 5);
        assert_eq!(len(Category::Identity), 4);
        assert_eq!(len(Category::Automation), 5);
    }

    #[test]
    fn every_plan_starts_with_intro_and_ends_with_summary() {
        for category in Category::all() {
            let plan = StepPlanner::plan(*category);
            assert!(plan.len() >= 3);
            assert_eq!(plan.step(1).map(|s| s.id), Some(StepId::Intro));
            assert_eq!(plan.step(plan.len()).map(|s| s.id), Some(StepId::Summary));
            assert!(plan.is_summary(plan.last_ordinal()));
        }
    }

    #[test]
    fn ordinals_are_contiguous_from_one() {
        for category in Category::all() {
            let plan = StepPlanner::plan(*category);
            for (idx, step) in plan.steps().iter().enumerate() {
                assert_eq!(step.ordinal, idx + 1);
            }
        }
    }

    #[test]
    fn only_web_like_plans_have_technical_step() {
        for category in Category::all() {
            let has_technical = StepPlanner::plan(*category)
                .ordinal_of(StepId::Technical)
                .is_some();
            assert_eq!(has_technical, category.is_web_like());
        }
    }

    #[test]
    fn automation_steps_in_order() {
        let plan = StepPlanner::plan(Category::Automation);
        assert_eq!(plan.ordinal_of(StepId::AutomationTypes), Some(2));
        assert_eq!(plan.ordinal_of(StepId::Integrations), Some(3));
        assert_eq!(plan.ordinal_of(StepId::AutomationScope), Some(4));
    }

    #[test]
    fn step_lookup_out_of_range_is_none() {
        let plan = StepPlanner::plan(Category::Identity);
        assert!(plan.step(0).is_none());
        assert!(plan.step(5).is_none());
    }

    #[test]
    fn clamp_bounds_ordinals() {
        let plan = StepPlanner::plan(Category::Identity);
        assert_eq!(plan.clamp(0), 1);
        assert_eq!(plan.clamp(3), 3);
        assert_eq!(plan.clamp(99), 4);
    }
}
