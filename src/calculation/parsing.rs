//! Boundary parsing from form text to typed calculator input.
//!
//! Dates and clock times that cannot be read make the duration unknowable
//! and are reported as [`LedgerError::InvalidDuration`]. Numeric fields never
//! fail: blank optional fields take their defaults and unreadable text counts
//! as zero, leaving range enforcement to the clamp policies.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::config::OvertimePolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ShiftForm, parse_clock_time};

use super::shift_calculator::ShiftInput;

/// Parses numeric text, treating anything unreadable as zero.
///
/// Plain decimal and scientific notation are accepted. Numbers beyond the
/// range of [`Decimal`], including `Infinity`, saturate to [`Decimal::MAX`]
/// or [`Decimal::MIN`] so that the clamp policies still cap them.
///
/// # Examples
///
/// ```
/// use hourtrackr::calculation::parse_number_or_zero;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_number_or_zero(" 12.5 "), Decimal::new(125, 1));
/// assert_eq!(parse_number_or_zero("1e3"), Decimal::from(1000));
/// assert_eq!(parse_number_or_zero("twelve"), Decimal::ZERO);
/// assert_eq!(parse_number_or_zero("1e40"), Decimal::MAX);
/// ```
pub fn parse_number_or_zero(text: &str) -> Decimal {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .unwrap_or_else(|_| saturate(text))
}

/// Reads text that is numeric but not representable as a [`Decimal`].
fn saturate(text: &str) -> Decimal {
    let value = match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => return Decimal::ZERO,
    };

    match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        // Underflow reads as zero.
        None if value.abs() < 1.0 => Decimal::ZERO,
        None if value.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Parses an optional numeric field, using `default` when it is absent or blank.
pub fn parse_optional_number(text: Option<&str>, default: Decimal) -> Decimal {
    match text.map(str::trim) {
        None | Some("") => default,
        Some(text) => parse_number_or_zero(text),
    }
}

/// Parses a shift form into calculator input.
///
/// Blank optional fields default to no break and to the given overtime
/// policy.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDuration`] when the date or either clock
/// time cannot be read.
///
/// # Examples
///
/// ```
/// use hourtrackr::calculation::parse_shift_form;
/// use hourtrackr::config::OvertimePolicy;
/// use hourtrackr::models::ShiftForm;
/// use rust_decimal::Decimal;
///
/// let form = ShiftForm::new("2024-01-01", "09:00", "17:00", "20");
/// let input = parse_shift_form(&form, &OvertimePolicy::default())?;
///
/// assert_eq!(input.break_minutes, Decimal::ZERO);
/// assert_eq!(input.overtime_threshold_hours, Decimal::from(8));
/// # Ok::<(), hourtrackr::error::LedgerError>(())
/// ```
pub fn parse_shift_form(form: &ShiftForm, policy: &OvertimePolicy) -> LedgerResult<ShiftInput> {
    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::invalid_duration(format!("unreadable date '{}'", form.date)))?;

    let clock_in = parse_clock_time(&form.clock_in).ok_or_else(|| {
        LedgerError::invalid_duration(format!("unreadable clock-in time '{}'", form.clock_in))
    })?;
    let clock_out = parse_clock_time(&form.clock_out).ok_or_else(|| {
        LedgerError::invalid_duration(format!("unreadable clock-out time '{}'", form.clock_out))
    })?;

    Ok(ShiftInput {
        date,
        clock_in,
        clock_out,
        break_minutes: parse_optional_number(form.break_minutes.as_deref(), Decimal::ZERO),
        rate: parse_number_or_zero(&form.rate),
        overtime_threshold_hours: parse_optional_number(
            form.overtime_after_hours.as_deref(),
            policy.threshold_hours,
        ),
        overtime_multiplier: parse_optional_number(
            form.overtime_multiplier.as_deref(),
            policy.multiplier,
        ),
    })
}
