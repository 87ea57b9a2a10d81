//! FormRecord - the single structured record a qualification accumulates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Category, PaymentTerms, Urgency};

use super::payloads::CategoryPayload;

/// Deal-level answers collected on the summary step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealTerms {
    pub budget_range: Option<String>,
    pub payment_terms: Option<PaymentTerms>,
    pub maintenance: bool,
    pub launch_date: Option<NaiveDate>,
}

/// Every answer given during a qualification.
///
/// The record holds at most one category payload. Switching category
/// re-targets the payload (see [`CategoryPayload::switch_to`]), so answers
/// for a category that is no longer selected are never kept around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    pub service: Option<CategoryPayload>,
    pub is_renovation: bool,
    pub existing_url: Option<String>,
    pub urgency: Urgency,
    pub deal: DealTerms,
}

impl FormRecord {
    /// An empty record, as a fresh qualification starts.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty record with `category` already chosen.
    pub fn for_category(category: Category) -> Self {
        Self {
            service: Some(CategoryPayload::empty_for(category)),
            ..Self::default()
        }
    }

    /// The chosen category, if any.
    pub fn category(&self) -> Option<Category> {
        self.service.as_ref().map(CategoryPayload::category)
    }

    /// Selects a category, returning true if it differs from the current one.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.category() == Some(category) {
            return false;
        }
        self.service = Some(match self.service.take() {
            Some(payload) => payload.switch_to(category),
            None => CategoryPayload::empty_for(category),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::payloads::WebPayload;

    #[test]
    fn new_record_has_no_category() {
        let record = FormRecord::new();
        assert_eq!(record.category(), None);
        assert_eq!(record.urgency, Urgency::Normal);
        assert!(!record.deal.maintenance);
    }

    #[test]
    fn for_category_sets_matching_payload() {
        let record = FormRecord::for_category(Category::Automation);
        assert_eq!(record.category(), Some(Category::Automation));
    }

    #[test]
    fn select_same_category_is_a_no_op() {
        let mut record = FormRecord::for_category(Category::Showcase);
        if let Some(CategoryPayload::Showcase(web)) = record.service.as_mut() {
            web.page_count = 8;
        }
        assert!(!record.select_category(Category::Showcase));
        assert_eq!(
            record.service,
            Some(CategoryPayload::Showcase(WebPayload {
                page_count: 8,
                ..Default::default()
            }))
        );
    }

    #[test]
    fn select_category_keeps_common_fields() {
        let mut record = FormRecord::for_category(Category::Mobile);
        record.is_renovation = true;
        record.urgency = Urgency::Urgent;

        assert!(record.select_category(Category::Ecommerce));
        assert_eq!(record.category(), Some(Category::Ecommerce));
        assert!(record.is_renovation);
        assert_eq!(record.urgency, Urgency::Urgent);
    }

    #[test]
    fn record_roundtrips_through_yaml() {
        let mut record = FormRecord::for_category(Category::Identity);
        record.deal.launch_date = NaiveDate::from_ymd_opt(2025, 3, 1);
        record.existing_url = Some("https://example.com".to_string());

        let yaml = serde_yaml::to_string(&record).unwrap();
        let parsed: FormRecord = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn unknown_category_is_rejected_on_load() {
        let json = r#"{"service": {"category": "podcast", "answers": {}}}"#;
        let result: Result<FormRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
