//! Closed answer sets used across the category payloads.
//!
//! Each enum carries the label the summary projector shows for it.

use serde::{Deserialize, Serialize};

/// How quickly the client needs delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Flexible,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent",
            Urgency::Flexible => "Flexible",
        }
    }
}

/// E-commerce catalog sophistication, the store's size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogType {
    Simple,
    Standard,
    Advanced,
}

impl CatalogType {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogType::Simple => "Simple catalog",
            CatalogType::Standard => "Standard catalog",
            CatalogType::Advanced => "Advanced catalog",
        }
    }
}

/// Automation complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Medium => "Medium",
            Complexity::Complex => "Complex",
        }
    }
}

/// Visual identity package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPackage {
    Essential,
    Standard,
    Premium,
}

impl IdentityPackage {
    pub fn label(&self) -> &'static str {
        match self {
            IdentityPackage::Essential => "Essential",
            IdentityPackage::Standard => "Standard",
            IdentityPackage::Premium => "Premium",
        }
    }
}

/// Target platform of a mobile application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilePlatform {
    Ios,
    Android,
    Web,
}

impl MobilePlatform {
    pub fn label(&self) -> &'static str {
        match self {
            MobilePlatform::Ios => "iOS",
            MobilePlatform::Android => "Android",
            MobilePlatform::Web => "Web (PWA)",
        }
    }
}

/// Visual direction requested for design work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStyle {
    Minimal,
    Modern,
    Classic,
    Playful,
    Corporate,
}

impl DesignStyle {
    pub fn label(&self) -> &'static str {
        match self {
            DesignStyle::Minimal => "Minimal",
            DesignStyle::Modern => "Modern",
            DesignStyle::Classic => "Classic",
            DesignStyle::Playful => "Playful",
            DesignStyle::Corporate => "Corporate",
        }
    }
}

/// How the client intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTerms {
    Upfront,
    DepositAndBalance,
    Milestones,
    Monthly,
}

impl PaymentTerms {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentTerms::Upfront => "Full payment upfront",
            PaymentTerms::DepositAndBalance => "Deposit and balance on delivery",
            PaymentTerms::Milestones => "Per milestone",
            PaymentTerms::Monthly => "Monthly instalments",
        }
    }
}
