//! Completeness - how many optional answers a record carries.

use crate::domain::foundation::Percentage;
use crate::domain::record::{has_text, CategoryPayload, FormRecord};

/// Filled versus defined optional fields for a record's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completeness {
    pub filled: usize,
    pub total: usize,
}

impl Completeness {
    /// Counts the optional answers of `record`.
    ///
    /// Booleans count as answered when true, counts when non-zero, lists
    /// when non-empty, text when non-blank. A record with no category has
    /// nothing to count.
    pub fn of(record: &FormRecord) -> Self {
        let Some(service) = record.service.as_ref() else {
            return Self { filled: 0, total: 0 };
        };

        let mut checks = vec![
            has_text(&record.existing_url),
            has_text(&record.deal.budget_range),
            record.deal.payment_terms.is_some(),
            record.deal.launch_date.is_some(),
        ];

        match service {
            CategoryPayload::Showcase(web) | CategoryPayload::WebApp(web) => checks.extend([
                web.page_count > 0,
                !web.standard_pages.is_empty(),
                !web.custom_pages.is_empty(),
                !web.languages.is_empty(),
                !web.features.forms.is_empty(),
                !web.features.auth.is_empty(),
                !web.features.ecommerce.is_empty(),
                !web.features.content.is_empty(),
                !web.features.integrations.is_empty(),
                web.design.has_logo,
                web.design.has_brand_guide,
                has_text(&web.design.colors),
                web.design.style.is_some(),
                web.technical.domain_management,
                web.technical.seo_priority,
                web.technical.performance_critical,
                web.technical.accessibility,
            ]),
            CategoryPayload::Mobile(mobile) => checks.extend([
                !mobile.platforms.is_empty(),
                !mobile.features.is_empty(),
                mobile.custom_design,
                mobile.has_mockups,
                mobile.design_style.is_some(),
            ]),
            CategoryPayload::Ecommerce(store) => checks.extend([
                store.product_count > 0,
                store.category_count > 0,
                store.catalog_type.is_some(),
                !store.payment_methods.is_empty(),
                has_text(&store.currency),
                store.multi_currency,
                !store.features.is_empty(),
            ]),
            CategoryPayload::Identity(identity) => checks.extend([
                identity.package.is_some(),
                !identity.deliverables.is_empty(),
                identity.style.is_some(),
                has_text(&identity.colors),
                !identity.inspirations.is_empty(),
            ]),
            CategoryPayload::Automation(automation) => checks.extend([
                !automation.automation_types.is_empty(),
                !automation.integrations.is_empty(),
                automation.workflow_count > 0,
                automation.complexity.is_some(),
                automation.training,
                automation.support,
            ]),
        }

        Self {
            filled: checks.iter().filter(|answered| **answered).count(),
            total: checks.len(),
        }
    }

    pub fn percentage(&self) -> Percentage {
        Percentage::from_ratio(self.filled, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Category, IdentityPackage};
    use crate::domain::record::{IdentityPayload, MobilePayload};

    #[test]
    fn record_without_category_counts_nothing() {
        let completeness = Completeness::of(&FormRecord::new());
        assert_eq!(completeness, Completeness { filled: 0, total: 0 });
        assert_eq!(completeness.percentage(), Percentage::ZERO);
    }

    #[test]
    fn totals_depend_on_category() {
        let total = |c| Completeness::of(&FormRecord::for_category(c)).total;
        assert_eq!(total(Category::Showcase), 21);
        assert_eq!(total(Category::WebApp), 21);
        assert_eq!(total(Category::Mobile), 9);
        assert_eq!(total(Category::Ecommerce), 11);
        assert_eq!(total(Category::Identity), 9);
        assert_eq!(total(Category::Automation), 10);
    }

    #[test]
    fn blank_record_has_nothing_filled() {
        for category in Category::all() {
            assert_eq!(Completeness::of(&FormRecord::for_category(*category)).filled, 0);
        }
    }

    #[test]
    fn common_fields_count_towards_completeness() {
        let mut record = FormRecord::for_category(Category::Mobile);
        record.existing_url = Some("https://old.example.com".to_string());
        record.deal.budget_range = Some("10-20k".to_string());
        assert_eq!(Completeness::of(&record).filled, 2);
    }

    #[test]
    fn identity_answers_are_counted() {
        let record = FormRecord {
            service: Some(CategoryPayload::Identity(IdentityPayload {
                package: Some(IdentityPackage::Premium),
                deliverables: vec!["logo".to_string()],
                colors: Some("  ".to_string()),
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(Completeness::of(&record), Completeness { filled: 2, total: 9 });
    }

    #[test]
    fn false_booleans_are_not_answers() {
        let record = FormRecord {
            service: Some(CategoryPayload::Mobile(MobilePayload {
                custom_design: false,
                has_mockups: true,
                ..Default::default()
            })),
            ..Default::default()
        };
        assert_eq!(Completeness::of(&record).filled, 1);
    }
}
