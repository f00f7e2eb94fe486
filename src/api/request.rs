//! Request types for the shift ledger API.
//!
//! This module defines the JSON body of `POST /shifts`.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::LedgerError;
use crate::models::ShiftForm;

/// Request body for the `POST /shifts` endpoint.
///
/// Every field is optional at the JSON level so that absent required fields
/// can be reported together with the form's own wording. Values may be sent
/// as text or as JSON numbers, and the entry form's field ids are accepted
/// as aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Shift date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "text_or_number")]
    pub date: Option<String>,
    /// Clock-in time, `HH:MM`.
    #[serde(default, alias = "clockIn", deserialize_with = "text_or_number")]
    pub clock_in: Option<String>,
    /// Clock-out time, `HH:MM`.
    #[serde(default, alias = "clockOut", deserialize_with = "text_or_number")]
    pub clock_out: Option<String>,
    /// Unpaid break in minutes.
    #[serde(default, alias = "breakMin", deserialize_with = "text_or_number")]
    pub break_minutes: Option<String>,
    /// Hourly pay rate.
    #[serde(default, deserialize_with = "text_or_number")]
    pub rate: Option<String>,
    /// Hours before overtime starts.
    #[serde(default, alias = "otAfter", deserialize_with = "text_or_number")]
    pub overtime_after_hours: Option<String>,
    /// Overtime multiplier.
    #[serde(default, alias = "otMult", deserialize_with = "text_or_number")]
    pub overtime_multiplier: Option<String>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected text or a number, found {}",
            other
        ))),
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, LedgerError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LedgerError::MissingField {
            field: field.to_string(),
        }),
    }
}

impl TryFrom<ShiftRequest> for ShiftForm {
    type Error = LedgerError;

    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        Ok(ShiftForm {
            date: required("date", req.date)?,
            clock_in: required("clock_in", req.clock_in)?,
            clock_out: required("clock_out", req.clock_out)?,
            break_minutes: req.break_minutes,
            rate: required("rate", req.rate)?,
            overtime_after_hours: req.overtime_after_hours,
            overtime_multiplier: req.overtime_multiplier,
        })
    }
}
