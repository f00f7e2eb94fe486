//! Shift calculation.
//!
//! Turns typed clock times and an overtime policy into a [`Shift`]: the
//! worked minutes are split into a regular and an overtime bucket at the
//! threshold, and each bucket is priced at its own rate.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Shift, minutes_to_hours};

use super::clamp::{BREAK_MINUTES_RANGE, MULTIPLIER_RANGE, RATE_RANGE, THRESHOLD_MINUTES_RANGE};
use super::duration::resolve_minutes;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Typed input to the shift calculator.
///
/// Numeric fields are taken as given; the calculator applies the clamp
/// policies itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftInput {
    /// Nominal day of the shift.
    pub date: NaiveDate,
    /// Clock-in time of day.
    pub clock_in: NaiveTime,
    /// Clock-out time of day.
    pub clock_out: NaiveTime,
    /// Unpaid break in minutes.
    pub break_minutes: Decimal,
    /// Hourly pay rate.
    pub rate: Decimal,
    /// Hours worked before overtime accrues.
    pub overtime_threshold_hours: Decimal,
    /// Factor applied to the rate for overtime minutes.
    pub overtime_multiplier: Decimal,
}

/// Computes a shift with a freshly generated identifier.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDuration`] when the elapsed time minus the
/// break is not positive. Nothing else fails: every other numeric input is
/// clamped.
///
/// # Examples
///
/// ```
/// use hourtrackr::calculation::{ShiftInput, compute_shift};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = ShiftInput {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     clock_out: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///     break_minutes: Decimal::ZERO,
///     rate: Decimal::from(15),
///     overtime_threshold_hours: Decimal::from(8),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
///
/// let shift = compute_shift(&input)?;
/// assert_eq!(shift.regular_minutes(), 480);
/// assert_eq!(shift.overtime_minutes(), 240);
/// assert_eq!(shift.total_earnings(), Decimal::from(210));
/// # Ok::<(), hourtrackr::error::LedgerError>(())
/// ```
pub fn compute_shift(input: &ShiftInput) -> LedgerResult<Shift> {
    compute_shift_with_id(input, Uuid::new_v4().to_string())
}

/// Computes a shift carrying the given identifier.
pub fn compute_shift_with_id(input: &ShiftInput, id: String) -> LedgerResult<Shift> {
    let raw_minutes = resolve_minutes(input.date, input.clock_in, input.clock_out);
    let break_minutes = whole_minutes(BREAK_MINUTES_RANGE.apply(input.break_minutes));
    let net_minutes = raw_minutes - break_minutes;

    if net_minutes <= 0 {
        return Err(LedgerError::invalid_duration(format!(
            "{} elapsed minutes less a {} minute break leaves {} worked minutes",
            raw_minutes, break_minutes, net_minutes
        )));
    }

    // Threshold hours are unbounded text-derived input; saturate before clamping.
    let threshold = input
        .overtime_threshold_hours
        .checked_mul(MINUTES_PER_HOUR)
        .unwrap_or(if input.overtime_threshold_hours.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        });
    let threshold_minutes = whole_minutes(THRESHOLD_MINUTES_RANGE.apply(threshold));

    let rate = RATE_RANGE.apply(input.rate);
    let multiplier = MULTIPLIER_RANGE.apply(input.overtime_multiplier);

    let regular_minutes = net_minutes.min(threshold_minutes);
    let overtime_minutes = (net_minutes - threshold_minutes).max(0);

    let regular_earnings = minutes_to_hours(regular_minutes) * rate;
    let overtime_earnings = minutes_to_hours(overtime_minutes) * rate * multiplier;
    let total_earnings = regular_earnings + overtime_earnings;

    debug!(
        shift_id = %id,
        net_minutes,
        threshold_minutes,
        regular_minutes,
        overtime_minutes,
        total_earnings = %total_earnings,
        "Computed shift"
    );

    Ok(Shift {
        id,
        date: input.date,
        clock_in: input.clock_in,
        clock_out: input.clock_out,
        break_minutes,
        rate,
        overtime_threshold_hours: input.overtime_threshold_hours,
        overtime_multiplier: multiplier,
        regular_minutes,
        overtime_minutes,
        regular_earnings,
        overtime_earnings,
        total_earnings,
    })
}

/// Whole minutes of an already clamped value, rounding fractions down.
fn whole_minutes(minutes: Decimal) -> i64 {
    minutes.floor().to_i64().unwrap_or(0)
}
