//! Wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every step a qualification can visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Intro,
    Pages,
    WebFeatures,
    WebDesign,
    Technical,
    Platforms,
    MobileFeatures,
    MobileDesign,
    Catalog,
    Payment,
    StoreFeatures,
    IdentityPackage,
    IdentityStyle,
    AutomationTypes,
    Integrations,
    AutomationScope,
    Summary,
}

impl StepId {
    /// Returns the display name.
    pub fn label(&self) -> &'static str {
        match self {
            StepId::Intro => "Service",
            StepId::Pages => "Pages",
            StepId::WebFeatures => "Features",
            StepId::WebDesign => "Design",
            StepId::Technical => "Technical requirements",
            StepId::Platforms => "Platforms",
            StepId::MobileFeatures => "Features",
            StepId::MobileDesign => "Design",
            StepId::Catalog => "Catalog",
            StepId::Payment => "Payment",
            StepId::StoreFeatures => "Store features",
            StepId::IdentityPackage => "Package",
            StepId::IdentityStyle => "Style",
            StepId::AutomationTypes => "Automation types",
            StepId::Integrations => "Integrations",
            StepId::AutomationScope => "Scope",
            StepId::Summary => "Summary & estimate",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A step placed in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardStep {
    /// 1-based position in the plan.
    pub ordinal: usize,
    pub id: StepId,
    pub label: &'static str,
}

impl WizardStep {
    pub fn new(ordinal: usize, id: StepId) -> Self {
        Self {
            ordinal,
            id,
            label: id.label(),
        }
    }
}
