//! Proptest strategies for form records.

use chrono::NaiveDate;
use proptest::prelude::*;

use crate::domain::catalog::{
    CatalogType, Category, Complexity, DesignStyle, IdentityPackage, MobilePlatform,
    PaymentTerms, Urgency,
};

use super::form_record::{DealTerms, FormRecord};
use super::payloads::{
    AutomationPayload, CategoryPayload, DesignBrief, EcommercePayload, IdentityPayload,
    MobilePayload, TechnicalRequirements, WebFeatures, WebPayload,
};

pub fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::all().to_vec())
}

pub fn urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![
        Just(Urgency::Normal),
        Just(Urgency::Urgent),
        Just(Urgency::Flexible)
    ]
}

fn ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,6}", 0..4)
}

fn text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ a-z]{0,8}")
}

fn style() -> impl Strategy<Value = Option<DesignStyle>> {
    prop::option::of(prop_oneof![
        Just(DesignStyle::Minimal),
        Just(DesignStyle::Modern),
        Just(DesignStyle::Classic),
        Just(DesignStyle::Playful),
        Just(DesignStyle::Corporate),
    ])
}

prop_compose! {
    fn technical()(flags in prop::array::uniform4(any::<bool>())) -> TechnicalRequirements {
        TechnicalRequirements {
            domain_management: flags[0],
            seo_priority: flags[1],
            performance_critical: flags[2],
            accessibility: flags[3],
        }
    }
}

prop_compose! {
    fn web()(
        page_count in 0u32..40,
        standard_pages in ids(),
        custom_pages in ids(),
        multi_language in any::<bool>(),
        languages in ids(),
        buckets in (ids(), ids(), ids(), ids(), ids()),
        has_logo in any::<bool>(),
        has_brand_guide in any::<bool>(),
        colors in text(),
        style in style(),
        technical in technical(),
    ) -> WebPayload {
        let (forms, auth, ecommerce, content, integrations) = buckets;
        WebPayload {
            page_count,
            standard_pages,
            custom_pages,
            multi_language,
            languages,
            features: WebFeatures { forms, auth, ecommerce, content, integrations },
            design: DesignBrief { has_logo, has_brand_guide, colors, style },
            technical,
        }
    }
}

prop_compose! {
    fn mobile()(
        platforms in prop::collection::vec(
            prop_oneof![
                Just(MobilePlatform::Ios),
                Just(MobilePlatform::Android),
                Just(MobilePlatform::Web)
            ],
            0..4,
        ),
        features in ids(),
        custom_design in any::<bool>(),
        has_mockups in any::<bool>(),
        design_style in style(),
    ) -> MobilePayload {
        MobilePayload { platforms, features, custom_design, has_mockups, design_style }
    }
}

prop_compose! {
    fn ecommerce()(
        product_count in 0u32..5_000,
        category_count in 0u32..50,
        catalog_type in prop::option::of(prop_oneof![
            Just(CatalogType::Simple),
            Just(CatalogType::Standard),
            Just(CatalogType::Advanced)
        ]),
        payment_methods in ids(),
        currency in text(),
        multi_currency in any::<bool>(),
        features in ids(),
    ) -> EcommercePayload {
        EcommercePayload {
            product_count,
            category_count,
            catalog_type,
            payment_methods,
            currency,
            multi_currency,
            features,
        }
    }
}

prop_compose! {
    fn identity()(
        package in prop::option::of(prop_oneof![
            Just(IdentityPackage::Essential),
            Just(IdentityPackage::Standard),
            Just(IdentityPackage::Premium)
        ]),
        deliverables in ids(),
        style in style(),
        colors in text(),
        inspirations in ids(),
    ) -> IdentityPayload {
        IdentityPayload { package, deliverables, style, colors, inspirations }
    }
}

prop_compose! {
    fn automation()(
        automation_types in ids(),
        integrations in ids(),
        workflow_count in 0u32..20,
        complexity in prop::option::of(prop_oneof![
            Just(Complexity::Simple),
            Just(Complexity::Medium),
            Just(Complexity::Complex)
        ]),
        training in any::<bool>(),
        support in any::<bool>(),
    ) -> AutomationPayload {
        AutomationPayload {
            automation_types,
            integrations,
            workflow_count,
            complexity,
            training,
            support,
        }
    }
}

pub fn payload() -> impl Strategy<Value = CategoryPayload> {
    prop_oneof![
        web().prop_map(CategoryPayload::Showcase),
        web().prop_map(CategoryPayload::WebApp),
        mobile().prop_map(CategoryPayload::Mobile),
        ecommerce().prop_map(CategoryPayload::Ecommerce),
        identity().prop_map(CategoryPayload::Identity),
        automation().prop_map(CategoryPayload::Automation),
    ]
}

prop_compose! {
    fn deal()(
        budget_range in text(),
        payment_terms in prop::option::of(prop_oneof![
            Just(PaymentTerms::Upfront),
            Just(PaymentTerms::DepositAndBalance),
            Just(PaymentTerms::Milestones),
            Just(PaymentTerms::Monthly)
        ]),
        maintenance in any::<bool>(),
        launch_offset in prop::option::of(0i64..365),
    ) -> DealTerms {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        DealTerms {
            budget_range,
            payment_terms,
            maintenance,
            launch_date: launch_offset.map(|days| base + chrono::Duration::days(days)),
        }
    }
}

prop_compose! {
    /// A record with a category and arbitrary answers.
    pub fn categorized_record()(
        service in payload(),
        is_renovation in any::<bool>(),
        existing_url in text(),
        urgency in urgency(),
        deal in deal(),
    ) -> FormRecord {
        FormRecord { service: Some(service), is_renovation, existing_url, urgency, deal }
    }
}

/// Any record, including one that has no category yet.
pub fn record() -> impl Strategy<Value = FormRecord> {
    prop_oneof![
        1 => (urgency(), deal()).prop_map(|(urgency, deal)| FormRecord {
            urgency,
            deal,
            ..FormRecord::default()
        }),
        5 => categorized_record(),
    ]
}
