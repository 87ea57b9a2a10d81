//! Summary projector - Form Record in, review panels out.

use crate::domain::record::{
    AutomationPayload, CategoryPayload, DealTerms, EcommercePayload, FormRecord, IdentityPayload,
    MobilePayload, WebPayload,
};
use crate::domain::wizard::{StepId, StepPlan, StepPlanner};

use super::group::{GroupBuilder, SummaryGroup};

pub const SERVICE_TITLE: &str = "Service";
pub const BUDGET_TITLE: &str = "Budget & terms";

/// Groups a record into labeled panels for the summary step.
pub struct SummaryProjector;

impl SummaryProjector {
    /// Projects `record` into review groups.
    ///
    /// # Ordering
    ///
    /// 1. Service context, always present
    /// 2. Category groups in plan order, tagged with their step ordinal
    /// 3. Budget & terms, tagged with the summary ordinal
    ///
    /// Unanswered fields are left out and a group with nothing to show is
    /// dropped, so the result never contains an empty group.
    pub fn project(record: &FormRecord) -> Vec<SummaryGroup> {
        let plan = StepPlanner::plan_for(record.category());
        let mut groups = Vec::new();

        groups.extend(Self::service(record));

        let category_groups = match record.service.as_ref() {
            Some(CategoryPayload::Showcase(web)) | Some(CategoryPayload::WebApp(web)) => {
                Self::web(&plan, web)
            }
            Some(CategoryPayload::Mobile(mobile)) => Self::mobile(&plan, mobile),
            Some(CategoryPayload::Ecommerce(store)) => Self::ecommerce(&plan, store),
            Some(CategoryPayload::Identity(identity)) => Self::identity(&plan, identity),
            Some(CategoryPayload::Automation(automation)) => Self::automation(&plan, automation),
            None => Vec::new(),
        };
        groups.extend(category_groups.into_iter().flatten());

        groups.extend(Self::deal(plan.last_ordinal(), &record.deal));
        groups
    }

    fn service(record: &FormRecord) -> Option<SummaryGroup> {
        GroupBuilder::new(SERVICE_TITLE, 1)
            .choice("Category", record.category().map(|c| c.display_name()))
            .flag("Redesign of an existing site", record.is_renovation)
            .text("Existing URL", &record.existing_url)
            .entry("Urgency", record.urgency.label())
            .build()
    }

    fn web(plan: &StepPlan, web: &WebPayload) -> Vec<Option<SummaryGroup>> {
        let features = &web.features;
        let design = &web.design;
        let technical = &web.technical;

        let languages: &[String] = if web.multi_language {
            web.languages.as_slice()
        } else {
            &[]
        };

        vec![
            group(plan, StepId::Pages)
                .count("Page count", web.page_count)
                .list("Standard pages", &web.standard_pages)
                .list("Custom pages", &web.custom_pages)
                .list("Languages", languages)
                .build(),
            group(plan, StepId::WebFeatures)
                .list("Forms", &features.forms)
                .list("Authentication", &features.auth)
                .list("E-commerce", &features.ecommerce)
                .list("Content", &features.content)
                .list("Integrations", &features.integrations)
                .build(),
            group(plan, StepId::WebDesign)
                .flag("Logo provided", design.has_logo)
                .flag("Brand guide provided", design.has_brand_guide)
                .text("Colors", &design.colors)
                .choice("Style", design.style.map(|s| s.label()))
                .build(),
            // Only true flags produce entries, so an all-false slice yields no group.
            group(plan, StepId::Technical)
                .flag("Domain management", technical.domain_management)
                .flag("SEO priority", technical.seo_priority)
                .flag("Performance critical", technical.performance_critical)
                .flag("Accessibility", technical.accessibility)
                .build(),
        ]
    }

    fn mobile(plan: &StepPlan, mobile: &MobilePayload) -> Vec<Option<SummaryGroup>> {
        let mut platforms = mobile.platforms.clone();
        platforms.sort();
        platforms.dedup();
        let platform_labels: Vec<String> =
            platforms.iter().map(|p| p.label().to_string()).collect();

        vec![
            group(plan, StepId::Platforms)
                .list("Platforms", &platform_labels)
                .build(),
            group(plan, StepId::MobileFeatures)
                .list("Features", &mobile.features)
                .build(),
            group(plan, StepId::MobileDesign)
                .flag("Custom design", mobile.custom_design)
                .flag("Mockups provided", mobile.has_mockups)
                .choice("Style", mobile.design_style.map(|s| s.label()))
                .build(),
        ]
    }

    fn ecommerce(plan: &StepPlan, store: &EcommercePayload) -> Vec<Option<SummaryGroup>> {
        vec![
            group(plan, StepId::Catalog)
                .count("Products", store.product_count)
                .count("Product categories", store.category_count)
                .choice("Catalog", store.catalog_type.map(|c| c.label()))
                .build(),
            group(plan, StepId::Payment)
                .list("Payment methods", &store.payment_methods)
                .text("Currency", &store.currency)
                .flag("Multi-currency", store.multi_currency)
                .build(),
            group(plan, StepId::StoreFeatures)
                .list("Features", &store.features)
                .build(),
        ]
    }

    fn identity(plan: &StepPlan, identity: &IdentityPayload) -> Vec<Option<SummaryGroup>> {
        vec![
            group(plan, StepId::IdentityPackage)
                .choice("Package", identity.package.map(|p| p.label()))
                .list("Deliverables", &identity.deliverables)
                .build(),
            group(plan, StepId::IdentityStyle)
                .choice("Style", identity.style.map(|s| s.label()))
                .text("Colors", &identity.colors)
                .list("Inspirations", &identity.inspirations)
                .build(),
        ]
    }

    fn automation(plan: &StepPlan, automation: &AutomationPayload) -> Vec<Option<SummaryGroup>> {
        vec![
            group(plan, StepId::AutomationTypes)
                .list("Automation types", &automation.automation_types)
                .build(),
            group(plan, StepId::Integrations)
                .list("Integrations", &automation.integrations)
                .build(),
            group(plan, StepId::AutomationScope)
                .count("Workflows", automation.workflow_count)
                .choice("Complexity", automation.complexity.map(|c| c.label()))
                .flag("Training", automation.training)
                .flag("Extended support", automation.support)
                .build(),
        ]
    }

    fn deal(summary_ordinal: usize, deal: &DealTerms) -> Option<SummaryGroup> {
        let launch = deal
            .launch_date
            .map(|date| date.format("%Y-%m-%d").to_string());

        GroupBuilder::new(BUDGET_TITLE, summary_ordinal)
            .text("Budget", &deal.budget_range)
            .choice("Payment terms", deal.payment_terms.map(|t| t.label()))
            .flag("Maintenance", deal.maintenance)
            .text("Launch date", &launch)
            .build()
    }
}

fn group(plan: &StepPlan, id: StepId) -> GroupBuilder {
    let ordinal = plan
        .ordinal_of(id)
        .unwrap_or_else(|| plan.last_ordinal());
    GroupBuilder::new(id.label(), ordinal)
}
