//! Money value object in whole currency units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative amount in whole currency units.
///
/// Estimates are quoted to the unit; fractional amounts only exist
/// transiently while a multiplier is applied and are rounded back
/// with [`Money::from_scaled`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates an amount of whole units.
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units.
    pub fn units(&self) -> u64 {
        self.0
    }

    /// Multiplies by a count, saturating instead of overflowing.
    pub fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Scales by a factor and rounds to the nearest whole unit.
    ///
    /// Negative or non-finite results collapse to zero.
    pub fn from_scaled(self, factor: f64) -> Self {
        let scaled = (self.0 as f64 * factor).round();
        if scaled.is_finite() && scaled > 0.0 {
            Self(scaled as u64)
        } else {
            Self::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
