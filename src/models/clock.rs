//! Wall-clock time parsing and its `HH:MM` serde representation.

use chrono::{NaiveTime, Timelike};

/// Parses a wall-clock time of day written as `HH:MM`.
///
/// A trailing `:SS` component is accepted and discarded, so the result
/// always has whole-minute precision.
///
/// # Examples
///
/// ```
/// use hourtrackr::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
/// assert_eq!(parse_clock_time("22:15:42"), NaiveTime::from_hms_opt(22, 15, 0));
/// assert_eq!(parse_clock_time("25:00"), None);
/// ```
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    let time = NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()?;
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
}

/// Serializes clock times as `HH:MM` strings.
pub(crate) mod wall_clock {
    use chrono::NaiveTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_clock_time(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid wall-clock time '{}'", text)))
    }
}
