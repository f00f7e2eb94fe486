//! Ledger aggregation.

use crate::models::{Shift, Summary};

/// Folds a sequence of shifts into summary totals.
///
/// The sums do not depend on the order of the shifts, and an empty ledger
/// yields the all-zero summary.
///
/// # Examples
///
/// ```
/// use hourtrackr::calculation::summarize;
/// use hourtrackr::models::Summary;
///
/// assert_eq!(summarize(&[]), Summary::default());
/// ```
pub fn summarize(shifts: &[Shift]) -> Summary {
    let sums = shifts.iter().fold(Summary::default(), |mut acc, shift| {
        acc.regular_minutes += shift.regular_minutes();
        acc.overtime_minutes += shift.overtime_minutes();
        acc.regular_earnings += shift.regular_earnings();
        acc.overtime_earnings += shift.overtime_earnings();
        acc
    });

    Summary {
        total_minutes: sums.regular_minutes + sums.overtime_minutes,
        total_earnings: sums.regular_earnings + sums.overtime_earnings,
        ..sums
    }
}
