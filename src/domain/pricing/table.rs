//! Pricing table - every rate the estimator reads.
//!
//! The built-in defaults are a reasonable starting grid; a deployment
//! overrides them by loading its own table (see `config::PricingConfig`).
//! All fields are optional when deserializing and fall back to the
//! defaults below.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CatalogType, Complexity, IdentityPackage, Urgency};
use crate::domain::foundation::{Money, ValidationError};

/// Web-like size tier inferred from the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackTier {
    Starter,
    Business,
    Premium,
}

impl PackTier {
    pub fn label(&self) -> &'static str {
        match self {
            PackTier::Starter => "Starter",
            PackTier::Business => "Business",
            PackTier::Premium => "Premium",
        }
    }
}

/// Price of a web pack and how many pages it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRate {
    pub price: Money,
    pub included_pages: u32,
}

impl PackRate {
    const fn new(price: u64, included_pages: u32) -> Self {
        Self {
            price: Money::new(price),
            included_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebPackRates {
    pub starter: PackRate,
    pub business: PackRate,
    pub premium: PackRate,
    /// Charged per page beyond the pack's included pages.
    pub extra_page: Money,
}

impl WebPackRates {
    pub fn pack(&self, tier: PackTier) -> &PackRate {
        match tier {
            PackTier::Starter => &self.starter,
            PackTier::Business => &self.business,
            PackTier::Premium => &self.premium,
        }
    }

    fn showcase_defaults() -> Self {
        Self {
            starter: PackRate::new(1_500, 5),
            business: PackRate::new(3_200, 10),
            premium: PackRate::new(6_000, 20),
            extra_page: Money::new(150),
        }
    }

    fn web_app_defaults() -> Self {
        Self {
            starter: PackRate::new(6_000, 5),
            business: PackRate::new(12_000, 10),
            premium: PackRate::new(22_000, 20),
            extra_page: Money::new(300),
        }
    }
}

/// Page-count bucket boundaries, inclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBuckets {
    pub starter_max_pages: u32,
    pub business_max_pages: u32,
}

impl PageBuckets {
    pub fn tier_for(&self, page_count: u32) -> PackTier {
        if page_count <= self.starter_max_pages {
            PackTier::Starter
        } else if page_count <= self.business_max_pages {
            PackTier::Business
        } else {
            PackTier::Premium
        }
    }
}

impl Default for PageBuckets {
    fn default() -> Self {
        Self {
            starter_max_pages: 5,
            business_max_pages: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRates {
    pub simple: Money,
    pub standard: Money,
    pub advanced: Money,
}

impl CatalogRates {
    pub fn rate(&self, catalog: CatalogType) -> Money {
        match catalog {
            CatalogType::Simple => self.simple,
            CatalogType::Standard => self.standard,
            CatalogType::Advanced => self.advanced,
        }
    }
}

/// Mobile base price by number of target platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRates {
    pub single: Money,
    pub dual: Money,
    pub multi: Money,
}

impl PlatformRates {
    /// No platform selected yet prices as a single platform.
    pub fn rate(&self, platform_count: usize) -> Money {
        match platform_count {
            0 | 1 => self.single,
            2 => self.dual,
            _ => self.multi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRates {
    pub essential: Money,
    pub standard: Money,
    pub premium: Money,
}

impl IdentityRates {
    pub fn rate(&self, package: IdentityPackage) -> Money {
        match package {
            IdentityPackage::Essential => self.essential,
            IdentityPackage::Standard => self.standard,
            IdentityPackage::Premium => self.premium,
        }
    }
}

/// Automation tier: a base price covering one workflow plus a rate per extra one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRate {
    pub base: Money,
    pub per_extra_workflow: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationRates {
    pub simple: WorkflowRate,
    pub medium: WorkflowRate,
    pub complex: WorkflowRate,
}

impl AutomationRates {
    pub fn tier(&self, complexity: Complexity) -> &WorkflowRate {
        match complexity {
            Complexity::Simple => &self.simple,
            Complexity::Medium => &self.medium,
            Complexity::Complex => &self.complex,
        }
    }
}

/// Weight of one selected feature, per feature bucket.
///
/// `overrides` maps a feature id to its own weight, taking precedence
/// over the bucket weight wherever that id is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureRates {
    pub form: Money,
    pub auth: Money,
    pub commerce: Money,
    pub content: Money,
    pub integration: Money,
    pub extra_language: Money,
    pub mobile_feature: Money,
    pub store_feature: Money,
    pub payment_method: Money,
    pub deliverable: Money,
    pub automation_type: Money,
    pub automation_integration: Money,
    pub overrides: BTreeMap<String, Money>,
}

impl FeatureRates {
    /// Weight of `feature_id` in a bucket whose default weight is `bucket_rate`.
    pub fn weight(&self, bucket_rate: Money, feature_id: &str) -> Money {
        self.overrides.get(feature_id).copied().unwrap_or(bucket_rate)
    }
}

impl Default for FeatureRates {
    fn default() -> Self {
        Self {
            form: Money::new(150),
            auth: Money::new(450),
            commerce: Money::new(700),
            content: Money::new(250),
            integration: Money::new(400),
            extra_language: Money::new(600),
            mobile_feature: Money::new(900),
            store_feature: Money::new(350),
            payment_method: Money::new(200),
            deliverable: Money::new(250),
            automation_type: Money::new(500),
            automation_integration: Money::new(300),
            overrides: BTreeMap::new(),
        }
    }
}

/// Flat surcharges for boolean options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionRates {
    pub multi_currency: Money,
    pub domain_management: Money,
    pub seo_priority: Money,
    pub performance_critical: Money,
    pub accessibility: Money,
    pub extended_support: Money,
    pub training: Money,
    pub custom_mobile_design: Money,
}

impl Default for OptionRates {
    fn default() -> Self {
        Self {
            multi_currency: Money::new(800),
            domain_management: Money::new(150),
            seo_priority: Money::new(900),
            performance_critical: Money::new(1_200),
            accessibility: Money::new(1_000),
            extended_support: Money::new(1_500),
            training: Money::new(600),
            custom_mobile_design: Money::new(3_000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyRates {
    pub urgent: f64,
    pub flexible: f64,
}

impl UrgencyRates {
    pub fn multiplier(&self, urgency: Urgency) -> f64 {
        match urgency {
            Urgency::Normal => 1.0,
            Urgency::Urgent => self.urgent,
            Urgency::Flexible => self.flexible,
        }
    }
}

impl Default for UrgencyRates {
    fn default() -> Self {
        Self {
            urgent: 1.25,
            flexible: 0.9,
        }
    }
}

/// Proportional offsets of the min and max figures around the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeSpread {
    pub min_spread: f64,
    pub max_spread: f64,
}

impl Default for RangeSpread {
    fn default() -> Self {
        Self {
            min_spread: 0.15,
            max_spread: 0.20,
        }
    }
}

/// The complete rate grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub showcase: WebPackRates,
    pub web_app: WebPackRates,
    pub page_buckets: PageBuckets,
    pub ecommerce: CatalogRates,
    pub mobile: PlatformRates,
    pub identity: IdentityRates,
    pub automation: AutomationRates,
    pub features: FeatureRates,
    pub options: OptionRates,
    pub urgency: UrgencyRates,
    pub range: RangeSpread,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            showcase: WebPackRates::showcase_defaults(),
            web_app: WebPackRates::web_app_defaults(),
            page_buckets: PageBuckets::default(),
            ecommerce: CatalogRates {
                simple: Money::new(4_500),
                standard: Money::new(8_500),
                advanced: Money::new(16_000),
            },
            mobile: PlatformRates {
                single: Money::new(9_000),
                dual: Money::new(15_000),
                multi: Money::new(20_000),
            },
            identity: IdentityRates {
                essential: Money::new(900),
                standard: Money::new(2_000),
                premium: Money::new(4_000),
            },
            automation: AutomationRates {
                simple: WorkflowRate {
                    base: Money::new(1_200),
                    per_extra_workflow: Money::new(300),
                },
                medium: WorkflowRate {
                    base: Money::new(3_000),
                    per_extra_workflow: Money::new(700),
                },
                complex: WorkflowRate {
                    base: Money::new(6_500),
                    per_extra_workflow: Money::new(1_400),
                },
            },
            features: FeatureRates::default(),
            options: OptionRates::default(),
            urgency: UrgencyRates::default(),
            range: RangeSpread::default(),
        }
    }
}

impl PricingTable {
    /// Checks the constraints the estimator relies on.
    ///
    /// Monetary fields cannot go negative by type; only the bucket
    /// boundaries and the floating-point factors need checking.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page_buckets.starter_max_pages >= self.page_buckets.business_max_pages {
            return Err(ValidationError::invalid_format(
                "page_buckets",
                "starter_max_pages must be below business_max_pages",
            ));
        }
        check_factor("range.min_spread", self.range.min_spread, |v| (0.0..1.0).contains(&v))?;
        check_factor("range.max_spread", self.range.max_spread, |v| v >= 0.0)?;
        check_factor("urgency.urgent", self.urgency.urgent, |v| v > 1.0)?;
        check_factor("urgency.flexible", self.urgency.flexible, |v| v > 0.0 && v < 1.0)?;
        Ok(())
    }
}

fn check_factor(
    field: &'static str,
    value: f64,
    accept: impl Fn(f64) -> bool,
) -> Result<(), ValidationError> {
    if value.is_finite() && accept(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            field,
            format!("{} is out of range", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert!(PricingTable::default().validate().is_ok());
    }

    #[test]
    fn page_buckets_are_inclusive() {
        let buckets = PageBuckets::default();
        assert_eq!(buckets.tier_for(0), PackTier::Starter);
        assert_eq!(buckets.tier_for(5), PackTier::Starter);
        assert_eq!(buckets.tier_for(6), PackTier::Business);
        assert_eq!(buckets.tier_for(15), PackTier::Business);
        assert_eq!(buckets.tier_for(16), PackTier::Premium);
    }

    #[test]
    fn platform_rates_treat_none_as_single() {
        let table = PricingTable::default();
        assert_eq!(table.mobile.rate(0), table.mobile.single);
        assert_eq!(table.mobile.rate(3), table.mobile.multi);
    }

    #[test]
    fn overrides_take_precedence() {
        let mut rates = FeatureRates::default();
        rates.overrides.insert("payments".to_string(), Money::new(2_000));

        assert_eq!(rates.weight(rates.commerce, "payments"), Money::new(2_000));
        assert_eq!(rates.weight(rates.commerce, "cart"), rates.commerce);
    }

    #[test]
    fn urgency_normal_is_neutral() {
        let rates = UrgencyRates::default();
        assert_eq!(rates.multiplier(Urgency::Normal), 1.0);
        assert!(rates.multiplier(Urgency::Urgent) > 1.0);
        assert!(rates.multiplier(Urgency::Flexible) < 1.0);
    }

    #[test]
    fn validate_rejects_inverted_buckets() {
        let mut table = PricingTable::default();
        table.page_buckets.starter_max_pages = 20;
        assert!(table.validate().is_err());
    }

    #[test]
    fn validate_rejects_spread_of_one_or_more() {
        let mut table = PricingTable::default();
        table.range.min_spread = 1.0;
        assert!(table.validate().is_err());
    }

    #[test]
    fn validate_rejects_discounting_urgency() {
        let mut table = PricingTable::default();
        table.urgency.urgent = 0.8;
        assert!(table.validate().is_err());

        let mut table = PricingTable::default();
        table.urgency.flexible = f64::NAN;
        assert!(table.validate().is_err());
    }

    #[test]
    fn validate_rejects_neutral_urgent() {
        let mut table = PricingTable::default();
        table.urgency.urgent = 1.0;
        assert!(table.validate().is_err());
    }

    #[test]
    fn validate_rejects_neutral_flexible() {
        let mut table = PricingTable::default();
        table.urgency.flexible = 1.0;
        assert!(table.validate().is_err());
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let yaml = "urgency:\n  urgent: 1.5\nfeatures:\n  overrides:\n    sso: 1200\n";
        let table: PricingTable = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(table.urgency.urgent, 1.5);
        assert_eq!(table.urgency.flexible, 0.9);
        assert_eq!(table.features.overrides.get("sso"), Some(&Money::new(1_200)));
        assert_eq!(table.features.form, Money::new(150));
        assert_eq!(table.showcase, PricingTable::default().showcase);
    }
}
