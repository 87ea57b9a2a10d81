//! Pricing and estimation engine.
//!
//! Turns a [`FormRecord`](crate::domain::record::FormRecord) into a
//! [`PriceEstimate`]: a min / recommended / max range, an itemized
//! breakdown, and a confidence level derived from answer completeness.
//!
//! Rates live in a [`PricingTable`] so they can be tuned without code
//! changes; the defaults reproduce the standard price grid.

mod completeness;
mod estimate;
mod estimator;
mod table;

pub use completeness::Completeness;
pub use estimate::{
    Breakdown, Confidence, PriceEstimate, HIGH_CONFIDENCE_ABOVE, MEDIUM_CONFIDENCE_FROM,
};
pub use estimator::PriceEstimator;
pub use table::{
    AutomationRates, CatalogRates, FeatureRates, IdentityRates, OptionRates, PackRate, PackTier,
    PageBuckets, PlatformRates, PricingTable, RangeSpread, UrgencyRates, WebPackRates,
    WorkflowRate,
};
