//! Named range-clamp policies for numeric shift inputs.
//!
//! Numeric inputs never fail: out-of-range values saturate to the nearest
//! bound of their policy.
//!
//! | policy | range |
//! |---|---|
//! | [`BREAK_MINUTES_RANGE`] | 0 ..= 1440 minutes |
//! | [`THRESHOLD_MINUTES_RANGE`] | 0 ..= 1440 minutes |
//! | [`RATE_RANGE`] | 0 ..= 1e9 per hour |
//! | [`MULTIPLIER_RANGE`] | 1 ..= 10 |

use rust_decimal::Decimal;

/// An inclusive range that values are clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampRange {
    /// Lower bound.
    pub min: Decimal,
    /// Upper bound.
    pub max: Decimal,
}

impl ClampRange {
    /// Creates a range; `min` must not exceed `max`.
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Saturates `value` into the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hourtrackr::calculation::MULTIPLIER_RANGE;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(MULTIPLIER_RANGE.apply(Decimal::ZERO), Decimal::ONE);
    /// assert_eq!(MULTIPLIER_RANGE.apply(Decimal::from(25)), Decimal::TEN);
    /// ```
    pub fn apply(&self, value: Decimal) -> Decimal {
        value.clamp(self.min, self.max)
    }
}

const MINUTES_PER_DAY: Decimal = Decimal::from_parts(1440, 0, 0, false, 0);

/// Unpaid break, in minutes.
pub const BREAK_MINUTES_RANGE: ClampRange = ClampRange::new(Decimal::ZERO, MINUTES_PER_DAY);

/// Overtime threshold, in minutes.
pub const THRESHOLD_MINUTES_RANGE: ClampRange = ClampRange::new(Decimal::ZERO, MINUTES_PER_DAY);

/// Hourly pay rate.
pub const RATE_RANGE: ClampRange =
    ClampRange::new(Decimal::ZERO, Decimal::from_parts(1_000_000_000, 0, 0, false, 0));

/// Overtime multiplier.
pub const MULTIPLIER_RANGE: ClampRange = ClampRange::new(Decimal::ONE, Decimal::TEN);
