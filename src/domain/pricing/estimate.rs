//! Price estimate value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Percentage};

/// Below this completeness the estimate is Low confidence.
pub const MEDIUM_CONFIDENCE_FROM: u8 = 33;

/// Above this completeness the estimate is High confidence.
pub const HIGH_CONFIDENCE_ABOVE: u8 = 66;

/// How much optional detail backs an estimate. Never affects the figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Buckets a completeness share into a confidence level.
    pub fn from_completeness(completeness: Percentage) -> Self {
        match completeness.value() {
            v if v < MEDIUM_CONFIDENCE_FROM => Confidence::Low,
            v if v <= HIGH_CONFIDENCE_ABOVE => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

/// The itemized terms behind the recommended price.
///
/// Line items are pre-urgency; `urgency_multiplier` applies once to their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub base_label: String,
    pub base_amount: Money,
    pub extra_pages_amount: Money,
    pub features_amount: Money,
    pub options_amount: Money,
    pub urgency_multiplier: f64,
}

impl Breakdown {
    /// Sum of every line item, before urgency.
    pub fn subtotal(&self) -> Money {
        self.base_amount + self.extra_pages_amount + self.features_amount + self.options_amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: Money,
    pub recommended: Money,
    pub max: Money,
    pub confidence: Confidence,
    /// Share of the category's optional fields that were answered.
    pub completeness: Percentage,
    pub breakdown: Breakdown,
}

impl PriceEstimate {
    /// The estimate of a record that has no category yet.
    pub fn unpriced() -> Self {
        Self {
            min: Money::ZERO,
            recommended: Money::ZERO,
            max: Money::ZERO,
            confidence: Confidence::Low,
            completeness: Percentage::ZERO,
            breakdown: Breakdown {
                base_label: String::new(),
                base_amount: Money::ZERO,
                extra_pages_amount: Money::ZERO,
                features_amount: Money::ZERO,
                options_amount: Money::ZERO,
                urgency_multiplier: 1.0,
            },
        }
    }

    pub fn is_priced(&self) -> bool {
        !self.recommended.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_thresholds() {
        assert_eq!(Confidence::from_completeness(Percentage::new(0)), Confidence::Low);
        assert_eq!(Confidence::from_completeness(Percentage::new(32)), Confidence::Low);
        assert_eq!(Confidence::from_completeness(Percentage::new(33)), Confidence::Medium);
        assert_eq!(Confidence::from_completeness(Percentage::new(66)), Confidence::Medium);
        assert_eq!(Confidence::from_completeness(Percentage::new(67)), Confidence::High);
        assert_eq!(Confidence::from_completeness(Percentage::HUNDRED), Confidence::High);
    }

    #[test]
    fn confidence_orders_low_to_high() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn subtotal_sums_line_items() {
        let breakdown = Breakdown {
            base_label: "Base".to_string(),
            base_amount: Money::new(1_000),
            extra_pages_amount: Money::new(300),
            features_amount: Money::new(200),
            options_amount: Money::new(50),
            urgency_multiplier: 1.25,
        };
        assert_eq!(breakdown.subtotal(), Money::new(1_550));
    }

    #[test]
    fn unpriced_estimate_is_zero_and_low() {
        let estimate = PriceEstimate::unpriced();
        assert!(!estimate.is_priced());
        assert_eq!(estimate.confidence, Confidence::Low);
        assert_eq!(estimate.breakdown.urgency_multiplier, 1.0);
    }
}
