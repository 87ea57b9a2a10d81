//! Record patches - how wizard steps write their slice of the record.
//!
//! A patch is a shallow merge: every `Some` field replaces the stored value,
//! every `None` leaves it alone. Nested slices (`features`, `design`,
//! `technical`) are replaced wholesale. Clearing a free-text answer is done
//! by sending an empty string; clearing a closed-set choice is done by
//! sending an explicit `null`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::domain::catalog::{
    CatalogType, Category, Complexity, DesignStyle, IdentityPackage, MobilePlatform, PaymentTerms,
    Urgency,
};

use super::form_record::FormRecord;
use super::payloads::{CategoryPayload, DesignBrief, TechnicalRequirements, WebFeatures};

/// A payload patch targeted a category that is not the active one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot write {slice} answers while the active category is {}", active_label(.active))]
pub struct PatchError {
    pub slice: &'static str,
    pub active: Option<Category>,
}

fn active_label(active: &Option<Category>) -> &'static str {
    active.map(|c| c.display_name()).unwrap_or("unset")
}

/// Keeps an explicit `null` apart from an absent field: absent stays
/// `None` through `#[serde(default)]`, `null` becomes `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Intro-step answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextPatch {
    pub category: Option<Category>,
    pub is_renovation: Option<bool>,
    pub existing_url: Option<String>,
    pub urgency: Option<Urgency>,
}

/// Answers for the Pages, Features, Design and Technical steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPatch {
    pub page_count: Option<u32>,
    pub standard_pages: Option<Vec<String>>,
    pub custom_pages: Option<Vec<String>>,
    pub multi_language: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub features: Option<WebFeatures>,
    pub design: Option<DesignBrief>,
    pub technical: Option<TechnicalRequirements>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobilePatch {
    pub platforms: Option<Vec<MobilePlatform>>,
    pub features: Option<Vec<String>>,
    pub custom_design: Option<bool>,
    pub has_mockups: Option<bool>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub design_style: Option<Option<DesignStyle>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcommercePatch {
    pub product_count: Option<u32>,
    pub category_count: Option<u32>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<Option<CatalogType>>,
    pub payment_methods: Option<Vec<String>>,
    pub currency: Option<String>,
    pub multi_currency: Option<bool>,
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityPatch {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub package: Option<Option<IdentityPackage>>,
    pub deliverables: Option<Vec<String>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub style: Option<Option<DesignStyle>>,
    pub colors: Option<String>,
    pub inspirations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationPatch {
    pub automation_types: Option<Vec<String>>,
    pub integrations: Option<Vec<String>>,
    pub workflow_count: Option<u32>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Option<Complexity>>,
    pub training: Option<bool>,
    pub support: Option<bool>,
}

/// Summary-step answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealPatch {
    pub budget_range: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<Option<PaymentTerms>>,
    pub maintenance: Option<bool>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<Option<NaiveDate>>,
}

/// One slice of the record, as written by a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "slice", rename_all = "snake_case")]
pub enum RecordPatch {
    Context(ContextPatch),
    Web(WebPatch),
    Mobile(MobilePatch),
    Ecommerce(EcommercePatch),
    Identity(IdentityPatch),
    Automation(AutomationPatch),
    Deal(DealPatch),
}

impl RecordPatch {
    /// Short name of the slice, used in logs and errors.
    pub fn slice_name(&self) -> &'static str {
        match self {
            RecordPatch::Context(_) => "context",
            RecordPatch::Web(_) => "web",
            RecordPatch::Mobile(_) => "mobile",
            RecordPatch::Ecommerce(_) => "ecommerce",
            RecordPatch::Identity(_) => "identity",
            RecordPatch::Automation(_) => "automation",
            RecordPatch::Deal(_) => "deal",
        }
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn merge_text(slot: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *slot = if value.trim().is_empty() { None } else { Some(value) };
    }
}

fn merge_choice<T>(slot: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl FormRecord {
    /// Merges one slice into the record.
    ///
    /// Payload patches must match the active category; a mismatch leaves
    /// the record untouched. Nothing else is validated.
    pub fn apply_patch(&mut self, patch: RecordPatch) -> Result<(), PatchError> {
        let slice = patch.slice_name();
        let active = self.category();
        let mismatch = || PatchError { slice, active };

        match patch {
            RecordPatch::Context(p) => {
                if let Some(category) = p.category {
                    self.select_category(category);
                }
                merge(&mut self.is_renovation, p.is_renovation);
                merge_text(&mut self.existing_url, p.existing_url);
                merge(&mut self.urgency, p.urgency);
            }
            RecordPatch::Deal(p) => {
                merge_text(&mut self.deal.budget_range, p.budget_range);
                merge_choice(&mut self.deal.payment_terms, p.payment_terms);
                merge(&mut self.deal.maintenance, p.maintenance);
                merge_choice(&mut self.deal.launch_date, p.launch_date);
            }
            RecordPatch::Web(p) => match self.service.as_mut() {
                Some(CategoryPayload::Showcase(web)) | Some(CategoryPayload::WebApp(web)) => {
                    merge(&mut web.page_count, p.page_count);
                    merge(&mut web.standard_pages, p.standard_pages);
                    merge(&mut web.custom_pages, p.custom_pages);
                    merge(&mut web.multi_language, p.multi_language);
                    merge(&mut web.languages, p.languages);
                    merge(&mut web.features, p.features);
                    merge(&mut web.design, p.design);
                    merge(&mut web.technical, p.technical);
                }
                _ => return Err(mismatch()),
            },
            RecordPatch::Mobile(p) => match self.service.as_mut() {
                Some(CategoryPayload::Mobile(mobile)) => {
                    merge(&mut mobile.platforms, p.platforms);
                    merge(&mut mobile.features, p.features);
                    merge(&mut mobile.custom_design, p.custom_design);
                    merge(&mut mobile.has_mockups, p.has_mockups);
                    merge_choice(&mut mobile.design_style, p.design_style);
                }
                _ => return Err(mismatch()),
            },
            RecordPatch::Ecommerce(p) => match self.service.as_mut() {
                Some(CategoryPayload::Ecommerce(store)) => {
                    merge(&mut store.product_count, p.product_count);
                    merge(&mut store.category_count, p.category_count);
                    merge_choice(&mut store.catalog_type, p.catalog_type);
                    merge(&mut store.payment_methods, p.payment_methods);
                    merge_text(&mut store.currency, p.currency);
                    merge(&mut store.multi_currency, p.multi_currency);
                    merge(&mut store.features, p.features);
                }
                _ => return Err(mismatch()),
            },
            RecordPatch::Identity(p) => match self.service.as_mut() {
                Some(CategoryPayload::Identity(identity)) => {
                    merge_choice(&mut identity.package, p.package);
                    merge(&mut identity.deliverables, p.deliverables);
                    merge_choice(&mut identity.style, p.style);
                    merge_text(&mut identity.colors, p.colors);
                    merge(&mut identity.inspirations, p.inspirations);
                }
                _ => return Err(mismatch()),
            },
            RecordPatch::Automation(p) => match self.service.as_mut() {
                Some(CategoryPayload::Automation(automation)) => {
                    merge(&mut automation.automation_types, p.automation_types);
                    merge(&mut automation.integrations, p.integrations);
                    merge(&mut automation.workflow_count, p.workflow_count);
                    merge_choice(&mut automation.complexity, p.complexity);
                    merge(&mut automation.training, p.training);
                    merge(&mut automation.support, p.support);
                }
                _ => return Err(mismatch()),
            },
        }
        Ok(())
    }
}
