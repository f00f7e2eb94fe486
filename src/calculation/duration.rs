//! Elapsed-time resolution between two wall-clock times.

use chrono::{NaiveDate, NaiveTime};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Resolves the elapsed minutes between clock-in and clock-out.
///
/// Both times are anchored to the same nominal `date`. When clock-out falls
/// before clock-in the shift is taken to cross midnight and one day is added,
/// once, so the result always lies in `0..1440`. Equal times give `0`.
///
/// # Examples
///
/// ```
/// use hourtrackr::calculation::resolve_minutes;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// assert_eq!(resolve_minutes(date, t(9, 0), t(17, 0)), 480);
/// assert_eq!(resolve_minutes(date, t(22, 0), t(6, 0)), 480); // overnight
/// ```
pub fn resolve_minutes(date: NaiveDate, clock_in: NaiveTime, clock_out: NaiveTime) -> i64 {
    let start = date.and_time(clock_in);
    let end = date.and_time(clock_out);

    let diff = (end - start).num_minutes();
    if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
}
