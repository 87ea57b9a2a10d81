//! Price estimator - Form Record in, Price Estimate out.
//!
//! # Computation
//!
//! 1. Base amount from the (category, size tier) grid.
//! 2. Additive terms: extra pages, selected features, true options.
//! 3. Urgency multiplier applied once to the subtotal of 1 and 2.
//! 4. `min`/`max` as fixed proportional offsets of the recommendation.
//!
//! The estimator is pure: no I/O, no clock, no randomness. Missing answers
//! contribute nothing, so a record with only a category still prices.

use std::collections::BTreeSet;

use crate::domain::catalog::{CatalogType, Category, Complexity, IdentityPackage};
use crate::domain::foundation::Money;
use crate::domain::record::{
    AutomationPayload, CategoryPayload, EcommercePayload, FormRecord, IdentityPayload,
    MobilePayload, WebPayload,
};

use super::completeness::Completeness;
use super::estimate::{Breakdown, Confidence, PriceEstimate};
use super::table::{FeatureRates, PricingTable};

/// Pre-urgency line items for one category.
struct CostLines {
    base_label: String,
    base: Money,
    extra_pages: Money,
    features: Money,
    options: Money,
}

/// Computes estimates against a fixed pricing table.
#[derive(Debug, Clone, Default)]
pub struct PriceEstimator {
    table: PricingTable,
}

impl PriceEstimator {
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Estimates the price of a record.
    ///
    /// # Edge Cases
    /// - No category: zero figures, Low confidence, multiplier 1.0
    /// - Category only: base amount of the smallest tier, Low confidence
    pub fn estimate(&self, record: &FormRecord) -> PriceEstimate {
        let Some(service) = record.service.as_ref() else {
            return PriceEstimate::unpriced();
        };

        let lines = match service {
            CategoryPayload::Showcase(web) => self.web_lines(Category::Showcase, web),
            CategoryPayload::WebApp(web) => self.web_lines(Category::WebApp, web),
            CategoryPayload::Mobile(mobile) => self.mobile_lines(mobile),
            CategoryPayload::Ecommerce(store) => self.ecommerce_lines(store),
            CategoryPayload::Identity(identity) => self.identity_lines(identity),
            CategoryPayload::Automation(automation) => self.automation_lines(automation),
        };

        let urgency_multiplier = self.table.urgency.multiplier(record.urgency);
        let breakdown = Breakdown {
            base_label: lines.base_label,
            base_amount: lines.base,
            extra_pages_amount: lines.extra_pages,
            features_amount: lines.features,
            options_amount: lines.options,
            urgency_multiplier,
        };

        let recommended = breakdown.subtotal().from_scaled(urgency_multiplier);
        let spread = self.table.range;
        let completeness = Completeness::of(record).percentage();

        PriceEstimate {
            min: recommended.from_scaled(1.0 - spread.min_spread),
            recommended,
            max: recommended.from_scaled(1.0 + spread.max_spread),
            confidence: Confidence::from_completeness(completeness),
            completeness,
            breakdown,
        }
    }

    fn web_lines(&self, category: Category, web: &WebPayload) -> CostLines {
        let rates = match category {
            Category::Showcase => &self.table.showcase,
            _ => &self.table.web_app,
        };
        let tier = self.table.page_buckets.tier_for(web.page_count);
        let pack = rates.pack(tier);
        let extra_pages = web.page_count.saturating_sub(pack.included_pages);

        let f = &self.table.features;
        let mut features = weigh(f, f.form, &web.features.forms)
            + weigh(f, f.auth, &web.features.auth)
            + weigh(f, f.commerce, &web.features.ecommerce)
            + weigh(f, f.content, &web.features.content)
            + weigh(f, f.integration, &web.features.integrations);
        if web.multi_language {
            let extra_languages = distinct(&web.languages).len().saturating_sub(1);
            features += f.extra_language.times(extra_languages as u64);
        }

        let o = &self.table.options;
        let t = &web.technical;
        let options = surcharge(t.domain_management, o.domain_management)
            + surcharge(t.seo_priority, o.seo_priority)
            + surcharge(t.performance_critical, o.performance_critical)
            + surcharge(t.accessibility, o.accessibility);

        CostLines {
            base_label: format!(
                "{} - {} pack ({} pages included)",
                category.display_name(),
                tier.label(),
                pack.included_pages
            ),
            base: pack.price,
            extra_pages: rates.extra_page.times(u64::from(extra_pages)),
            features,
            options,
        }
    }

    fn mobile_lines(&self, mobile: &MobilePayload) -> CostLines {
        let platforms = mobile.platform_count();
        let f = &self.table.features;

        CostLines {
            base_label: format!(
                "{} - {} platform{}",
                Category::Mobile.display_name(),
                platforms.max(1),
                if platforms > 1 { "s" } else { "" }
            ),
            base: self.table.mobile.rate(platforms),
            extra_pages: Money::ZERO,
            features: weigh(f, f.mobile_feature, &mobile.features),
            options: surcharge(mobile.custom_design, self.table.options.custom_mobile_design),
        }
    }

    fn ecommerce_lines(&self, store: &EcommercePayload) -> CostLines {
        let catalog = store.catalog_type.unwrap_or(CatalogType::Simple);
        let f = &self.table.features;

        CostLines {
            base_label: format!("{} - {}", Category::Ecommerce.display_name(), catalog.label()),
            base: self.table.ecommerce.rate(catalog),
            extra_pages: Money::ZERO,
            features: weigh(f, f.store_feature, &store.features)
                + weigh(f, f.payment_method, &store.payment_methods),
            options: surcharge(store.multi_currency, self.table.options.multi_currency),
        }
    }

    fn identity_lines(&self, identity: &IdentityPayload) -> CostLines {
        let package = identity.package.unwrap_or(IdentityPackage::Essential);
        let f = &self.table.features;

        CostLines {
            base_label: format!(
                "{} - {} package",
                Category::Identity.display_name(),
                package.label()
            ),
            base: self.table.identity.rate(package),
            extra_pages: Money::ZERO,
            features: weigh(f, f.deliverable, &identity.deliverables),
            options: Money::ZERO,
        }
    }

    fn automation_lines(&self, automation: &AutomationPayload) -> CostLines {
        let complexity = automation.complexity.unwrap_or(Complexity::Simple);
        let tier = self.table.automation.tier(complexity);
        let workflows = automation.workflow_count.max(1);
        let extra_workflows = u64::from(workflows - 1);

        let f = &self.table.features;
        let o = &self.table.options;

        CostLines {
            base_label: format!(
                "{} - {} complexity, {} workflow{}",
                Category::Automation.display_name(),
                complexity.label(),
                workflows,
                if workflows > 1 { "s" } else { "" }
            ),
            base: tier.base + tier.per_extra_workflow.times(extra_workflows),
            extra_pages: Money::ZERO,
            features: weigh(f, f.automation_type, &automation.automation_types)
                + weigh(f, f.automation_integration, &automation.integrations),
            options: surcharge(automation.training, o.training)
                + surcharge(automation.support, o.extended_support),
        }
    }
}

/// Distinct, non-blank feature ids in stable order.
fn distinct(ids: &[String]) -> BTreeSet<&str> {
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect()
}

fn weigh(rates: &FeatureRates, bucket_rate: Money, ids: &[String]) -> Money {
    distinct(ids)
        .into_iter()
        .map(|id| rates.weight(bucket_rate, id))
        .sum()
}

fn surcharge(enabled: bool, rate: Money) -> Money {
    if enabled {
        rate
    } else {
        Money::ZERO
    }
}
