//! Ledger summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shift::minutes_to_hours;

/// Totals derived from the whole ledger.
///
/// A summary is recomputed whenever it is needed and is never stored.
///
/// # Example
///
/// ```
/// use hourtrackr::models::Summary;
/// use rust_decimal::Decimal;
///
/// let summary = Summary::default();
/// assert_eq!(summary.total_minutes, 0);
/// assert_eq!(summary.earnings_split(), [Decimal::ZERO, Decimal::ZERO]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of regular minutes across all shifts.
    pub regular_minutes: i64,
    /// Sum of overtime minutes across all shifts.
    pub overtime_minutes: i64,
    /// Regular plus overtime minutes.
    pub total_minutes: i64,
    /// Sum of regular earnings across all shifts.
    pub regular_earnings: Decimal,
    /// Sum of overtime earnings across all shifts.
    pub overtime_earnings: Decimal,
    /// Regular plus overtime earnings.
    pub total_earnings: Decimal,
}

impl Summary {
    /// Total worked hours.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes)
    }

    /// Hours paid at the base rate.
    pub fn regular_hours(&self) -> Decimal {
        minutes_to_hours(self.regular_minutes)
    }

    /// Hours paid at the overtime rate.
    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }

    /// The `[regular, overtime]` earnings pair that drives the proportion chart.
    pub fn earnings_split(&self) -> [Decimal; 2] {
        [self.regular_earnings, self.overtime_earnings]
    }
}
