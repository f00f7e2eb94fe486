//! Raw shift form input.

use serde::{Deserialize, Serialize};

/// The textual fields of the shift entry form.
///
/// Required fields are plain strings; checking that they were filled in is
/// the job of whoever builds the form. Optional fields left as `None` (or
/// blank) fall back to their defaults when the form is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftForm {
    /// Shift date as `YYYY-MM-DD`.
    pub date: String,
    /// Clock-in time as `HH:MM`.
    pub clock_in: String,
    /// Clock-out time as `HH:MM`.
    pub clock_out: String,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: Option<String>,
    /// Hourly pay rate.
    pub rate: String,
    /// Hours worked before overtime starts.
    #[serde(default)]
    pub overtime_after_hours: Option<String>,
    /// Factor applied to the rate for overtime minutes.
    #[serde(default)]
    pub overtime_multiplier: Option<String>,
}

impl ShiftForm {
    /// Creates a form with the required fields and no optional ones.
    ///
    /// # Example
    ///
    /// ```
    /// use hourtrackr::models::ShiftForm;
    ///
    /// let form = ShiftForm::new("2024-01-01", "09:00", "17:00", "20")
    ///     .with_break("30")
    ///     .with_overtime("8", "1.5");
    /// assert_eq!(form.break_minutes.as_deref(), Some("30"));
    /// ```
    pub fn new(
        date: impl Into<String>,
        clock_in: impl Into<String>,
        clock_out: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            clock_in: clock_in.into(),
            clock_out: clock_out.into(),
            rate: rate.into(),
            ..Self::default()
        }
    }

    /// Sets the break field.
    pub fn with_break(mut self, minutes: impl Into<String>) -> Self {
        self.break_minutes = Some(minutes.into());
        self
    }

    /// Sets the overtime threshold and multiplier fields.
    pub fn with_overtime(
        mut self,
        after_hours: impl Into<String>,
        multiplier: impl Into<String>,
    ) -> Self {
        self.overtime_after_hours = Some(after_hours.into());
        self.overtime_multiplier = Some(multiplier.into());
        self
    }
}
