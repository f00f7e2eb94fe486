//! Shift model.
//!
//! A [`Shift`] is the computed, immutable record of one worked shift. It is
//! produced only by the shift calculator (or read back from storage) and is
//! never modified afterwards; removing it from the ledger is the only way it
//! goes away.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

use super::clock::wall_clock;

/// Converts whole minutes to hours.
///
/// # Examples
///
/// ```
/// use hourtrackr::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(450), Decimal::new(75, 1)); // 7.5
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Reads a minute count, flooring fractional values written by older ledgers.
fn whole_minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minutes {
        Whole(i64),
        Fractional(f64),
    }

    match Minutes::deserialize(deserializer)? {
        Minutes::Whole(minutes) => Ok(minutes),
        Minutes::Fractional(minutes) if minutes.is_finite() => Ok(minutes.floor() as i64),
        Minutes::Fractional(minutes) => {
            Err(D::Error::custom(format!("invalid minute count {}", minutes)))
        }
    }
}

/// A computed work shift as stored in the ledger.
///
/// Serialized field names follow the stored ledger format (`clockIn`,
/// `breakMin`, `regMinutes`, ...) so that existing ledgers read back into
/// the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub(crate) id: String,
    pub(crate) date: NaiveDate,
    #[serde(rename = "clockIn", with = "wall_clock")]
    pub(crate) clock_in: NaiveTime,
    #[serde(rename = "clockOut", with = "wall_clock")]
    pub(crate) clock_out: NaiveTime,
    #[serde(rename = "breakMin", deserialize_with = "whole_minutes")]
    pub(crate) break_minutes: i64,
    pub(crate) rate: Decimal,
    #[serde(rename = "otAfterHrs")]
    pub(crate) overtime_threshold_hours: Decimal,
    #[serde(rename = "otMult")]
    pub(crate) overtime_multiplier: Decimal,
    #[serde(rename = "regMinutes", deserialize_with = "whole_minutes")]
    pub(crate) regular_minutes: i64,
    #[serde(rename = "otMinutes", deserialize_with = "whole_minutes")]
    pub(crate) overtime_minutes: i64,
    #[serde(rename = "regEarnings")]
    pub(crate) regular_earnings: Decimal,
    #[serde(rename = "otEarnings")]
    pub(crate) overtime_earnings: Decimal,
    #[serde(rename = "totalEarnings")]
    pub(crate) total_earnings: Decimal,
}

impl Shift {
    /// Unique identifier assigned when the shift was computed.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The nominal day both clock times are anchored to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Clock-in time of day.
    pub fn clock_in(&self) -> NaiveTime {
        self.clock_in
    }

    /// Clock-out time of day.
    pub fn clock_out(&self) -> NaiveTime {
        self.clock_out
    }

    /// Unpaid break in minutes, after clamping.
    pub fn break_minutes(&self) -> i64 {
        self.break_minutes
    }

    /// Hourly pay rate, after clamping.
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Overtime threshold in hours exactly as entered.
    pub fn overtime_threshold_hours(&self) -> Decimal {
        self.overtime_threshold_hours
    }

    /// Overtime multiplier, after clamping.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_multiplier
    }

    /// Minutes paid at the base rate.
    pub fn regular_minutes(&self) -> i64 {
        self.regular_minutes
    }

    /// Minutes paid at the overtime rate.
    pub fn overtime_minutes(&self) -> i64 {
        self.overtime_minutes
    }

    /// Earnings for the regular minutes.
    pub fn regular_earnings(&self) -> Decimal {
        self.regular_earnings
    }

    /// Earnings for the overtime minutes.
    pub fn overtime_earnings(&self) -> Decimal {
        self.overtime_earnings
    }

    /// Regular plus overtime earnings.
    pub fn total_earnings(&self) -> Decimal {
        self.total_earnings
    }

    /// Worked minutes after the break was subtracted.
    pub fn net_minutes(&self) -> i64 {
        self.regular_minutes + self.overtime_minutes
    }

    /// Regular minutes expressed in hours.
    pub fn regular_hours(&self) -> Decimal {
        minutes_to_hours(self.regular_minutes)
    }

    /// Overtime minutes expressed in hours.
    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }
}
