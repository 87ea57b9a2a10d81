//! Category payloads - the per-category answer schemas.
//!
//! Exactly one payload is active on a record at a time. The web-like
//! categories share [`WebPayload`]; every other category has its own shape.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    CatalogType, Category, Complexity, DesignStyle, IdentityPackage, MobilePlatform,
};

/// Answers for Showcase and WebApp qualifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebPayload {
    pub page_count: u32,
    pub standard_pages: Vec<String>,
    pub custom_pages: Vec<String>,
    pub multi_language: bool,
    pub languages: Vec<String>,
    pub features: WebFeatures,
    pub design: DesignBrief,
    pub technical: TechnicalRequirements,
}

/// Feature buckets of a web-like project. Each entry is a feature id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebFeatures {
    pub forms: Vec<String>,
    pub auth: Vec<String>,
    pub ecommerce: Vec<String>,
    pub content: Vec<String>,
    pub integrations: Vec<String>,
}

impl WebFeatures {
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
            && self.auth.is_empty()
            && self.ecommerce.is_empty()
            && self.content.is_empty()
            && self.integrations.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignBrief {
    pub has_logo: bool,
    pub has_brand_guide: bool,
    pub colors: Option<String>,
    pub style: Option<DesignStyle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalRequirements {
    pub domain_management: bool,
    pub seo_priority: bool,
    pub performance_critical: bool,
    pub accessibility: bool,
}

impl TechnicalRequirements {
    /// True when at least one technical flag is set.
    pub fn any(&self) -> bool {
        self.domain_management
            || self.seo_priority
            || self.performance_critical
            || self.accessibility
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobilePayload {
    pub platforms: Vec<MobilePlatform>,
    pub features: Vec<String>,
    pub custom_design: bool,
    pub has_mockups: bool,
    pub design_style: Option<DesignStyle>,
}

impl MobilePayload {
    /// Number of distinct platforms selected; duplicates count once.
    pub fn platform_count(&self) -> usize {
        let mut platforms = self.platforms.clone();
        platforms.sort();
        platforms.dedup();
        platforms.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcommercePayload {
    pub product_count: u32,
    pub category_count: u32,
    pub catalog_type: Option<CatalogType>,
    pub payment_methods: Vec<String>,
    pub currency: Option<String>,
    pub multi_currency: bool,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityPayload {
    pub package: Option<IdentityPackage>,
    pub deliverables: Vec<String>,
    pub style: Option<DesignStyle>,
    pub colors: Option<String>,
    pub inspirations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationPayload {
    pub automation_types: Vec<String>,
    pub integrations: Vec<String>,
    pub workflow_count: u32,
    pub complexity: Option<Complexity>,
    pub training: bool,
    pub support: bool,
}

/// The active category together with its answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "answers", rename_all = "snake_case")]
pub enum CategoryPayload {
    Showcase(WebPayload),
    WebApp(WebPayload),
    Mobile(MobilePayload),
    Ecommerce(EcommercePayload),
    Identity(IdentityPayload),
    Automation(AutomationPayload),
}

impl CategoryPayload {
    /// A blank payload for the given category.
    pub fn empty_for(category: Category) -> Self {
        match category {
            Category::Showcase => CategoryPayload::Showcase(WebPayload::default()),
            Category::WebApp => CategoryPayload::WebApp(WebPayload::default()),
            Category::Mobile => CategoryPayload::Mobile(MobilePayload::default()),
            Category::Ecommerce => CategoryPayload::Ecommerce(EcommercePayload::default()),
            Category::Identity => CategoryPayload::Identity(IdentityPayload::default()),
            Category::Automation => CategoryPayload::Automation(AutomationPayload::default()),
        }
    }

    /// Returns the category this payload answers for.
    pub fn category(&self) -> Category {
        match self {
            CategoryPayload::Showcase(_) => Category::Showcase,
            CategoryPayload::WebApp(_) => Category::WebApp,
            CategoryPayload::Mobile(_) => Category::Mobile,
            CategoryPayload::Ecommerce(_) => Category::Ecommerce,
            CategoryPayload::Identity(_) => Category::Identity,
            CategoryPayload::Automation(_) => Category::Automation,
        }
    }

    /// Re-targets this payload at `category`.
    ///
    /// Only the web payload survives a switch, and only between the two
    /// web-like categories. Any other switch starts from a blank payload.
    pub fn switch_to(self, category: Category) -> Self {
        match self {
            CategoryPayload::Showcase(web) | CategoryPayload::WebApp(web)
                if category.is_web_like() =>
            {
                if category == Category::Showcase {
                    CategoryPayload::Showcase(web)
                } else {
                    CategoryPayload::WebApp(web)
                }
            }
            _ => CategoryPayload::empty_for(category),
        }
    }

    /// The web payload, when the active category is web-like.
    pub fn web(&self) -> Option<&WebPayload> {
        match self {
            CategoryPayload::Showcase(web) | CategoryPayload::WebApp(web) => Some(web),
            _ => None,
        }
    }
}

/// True when an optional free-text answer carries something.
pub(crate) fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_for_matches_category() {
        for category in Category::all() {
            assert_eq!(CategoryPayload::empty_for(*category).category(), *category);
        }
    }

    #[test]
    fn switch_between_web_like_keeps_answers() {
        let web = WebPayload {
            page_count: 12,
            ..Default::default()
        };
        let switched = CategoryPayload::Showcase(web.clone()).switch_to(Category::WebApp);
        assert_eq!(switched, CategoryPayload::WebApp(web));
    }

    #[test]
    fn switch_to_other_category_starts_blank() {
        let mobile = MobilePayload {
            platforms: vec![MobilePlatform::Ios],
            ..Default::default()
        };
        let switched = CategoryPayload::Mobile(mobile).switch_to(Category::Identity);
        assert_eq!(switched, CategoryPayload::Identity(IdentityPayload::default()));

        let back = switched.switch_to(Category::Mobile);
        assert_eq!(back, CategoryPayload::Mobile(MobilePayload::default()));
    }

    #[test]
    fn platform_count_ignores_duplicates() {
        let mobile = MobilePayload {
            platforms: vec![MobilePlatform::Ios, MobilePlatform::Android, MobilePlatform::Ios],
            ..Default::default()
        };
        assert_eq!(mobile.platform_count(), 2);
    }

    #[test]
    fn technical_any_detects_single_flag() {
        let mut technical = TechnicalRequirements::default();
        assert!(!technical.any());
        technical.accessibility = true;
        assert!(technical.any());
    }

    #[test]
    fn payload_serializes_with_category_tag() {
        let payload = CategoryPayload::Ecommerce(EcommercePayload {
            product_count: 40,
            ..Default::default()
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "ecommerce");
        assert_eq!(json["answers"]["product_count"], 40);
    }

    #[test]
    fn payload_accepts_partial_answers() {
        let json = r#"{"category": "automation", "answers": {"workflow_count": 3}}"#;
        let payload: CategoryPayload = serde_json::from_str(json).unwrap();
        match payload {
            CategoryPayload::Automation(a) => {
                assert_eq!(a.workflow_count, 3);
                assert!(a.integrations.is_empty());
            }
            other => panic!("Expected automation payload, got {:?}", other),
        }
    }

    #[test]
    fn has_text_rejects_blank() {
        assert!(!has_text(&None));
        assert!(!has_text(&Some("   ".to_string())));
        assert!(has_text(&Some("EUR".to_string())));
    }
}
