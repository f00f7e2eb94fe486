//! Display-ready view of the ledger.
//!
//! Turns shifts and their [`Summary`] into formatted table rows, running
//! totals and the two-category earnings chart. Money is shown in a single
//! fixed format (`$1,234.56`) and hours with two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::summarize;
use crate::models::{Shift, Summary, minutes_to_hours};

/// Chart category labels, in the order of [`Summary::earnings_split`].
pub const CHART_LABELS: [&str; 2] = ["Regular $", "Overtime $"];

/// Receives the regular/overtime earnings proportions.
pub trait EarningsChart {
    /// Replaces the chart data with the given earnings.
    fn update_proportions(&mut self, regular: Decimal, overtime: Decimal);
}

/// Chart data for a two-slice proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    /// Slice labels.
    pub labels: Vec<String>,
    /// Slice values, matching `labels`.
    pub values: Vec<Decimal>,
}

impl Default for ChartData {
    fn default() -> Self {
        Self {
            labels: CHART_LABELS.iter().map(|l| l.to_string()).collect(),
            values: vec![Decimal::ZERO, Decimal::ZERO],
        }
    }
}

impl EarningsChart for ChartData {
    fn update_proportions(&mut self, regular: Decimal, overtime: Decimal) {
        self.values = vec![regular, overtime];
    }
}

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// Shift identifier, used to address deletions.
    pub id: String,
    /// Shift date, `YYYY-MM-DD`.
    pub date: String,
    /// Clock-in, `HH:MM`.
    pub clock_in: String,
    /// Clock-out, `HH:MM`.
    pub clock_out: String,
    /// Break, e.g. `30 min`.
    pub break_minutes: String,
    /// Hourly rate.
    pub rate: String,
    /// Regular hours, two decimals.
    pub regular_hours: String,
    /// Overtime hours, two decimals.
    pub overtime_hours: String,
    /// Regular earnings.
    pub regular_earnings: String,
    /// Overtime earnings.
    pub overtime_earnings: String,
    /// Total earnings.
    pub total_earnings: String,
}

impl From<&Shift> for ShiftRow {
    fn from(shift: &Shift) -> Self {
        Self {
            id: shift.id().to_string(),
            date: shift.date().format("%Y-%m-%d").to_string(),
            clock_in: shift.clock_in().format("%H:%M").to_string(),
            clock_out: shift.clock_out().format("%H:%M").to_string(),
            break_minutes: format!("{} min", shift.break_minutes()),
            rate: format_currency(shift.rate()),
            regular_hours: format_hours(shift.regular_minutes()),
            overtime_hours: format_hours(shift.overtime_minutes()),
            regular_earnings: format_currency(shift.regular_earnings()),
            overtime_earnings: format_currency(shift.overtime_earnings()),
            total_earnings: format_currency(shift.total_earnings()),
        }
    }
}

/// Formatted running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsView {
    /// All worked hours.
    pub total_hours: String,
    /// Hours at the base rate.
    pub regular_hours: String,
    /// Hours at the overtime rate.
    pub overtime_hours: String,
    /// All earnings.
    pub total_earnings: String,
}

impl From<&Summary> for TotalsView {
    fn from(summary: &Summary) -> Self {
        Self {
            total_hours: format_hours(summary.total_minutes),
            regular_hours: format_hours(summary.regular_minutes),
            overtime_hours: format_hours(summary.overtime_minutes),
            total_earnings: format_currency(summary.total_earnings),
        }
    }
}

/// Everything needed to draw the ledger screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// Table rows in ledger order.
    pub rows: Vec<ShiftRow>,
    /// Formatted totals.
    pub totals: TotalsView,
    /// Earnings proportions.
    pub chart: ChartData,
    /// The unformatted summary the totals came from.
    pub summary: Summary,
}

impl LedgerReport {
    /// Builds the report for a ledger.
    pub fn build(shifts: &[Shift]) -> Self {
        let summary = summarize(shifts);

        let mut chart = ChartData::default();
        render_chart(&summary, &mut chart);

        Self {
            rows: shifts.iter().map(ShiftRow::from).collect(),
            totals: TotalsView::from(&summary),
            chart,
            summary,
        }
    }
}

/// Pushes a summary's earnings split to a chart.
pub fn render_chart(summary: &Summary, chart: &mut dyn EarningsChart) {
    let [regular, overtime] = summary.earnings_split();
    chart.update_proportions(regular, overtime);
}

/// Formats an amount as US dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use hourtrackr::report::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from(150)), "$150.00");
/// assert_eq!(format_currency(Decimal::from_str("1234567.891").unwrap()), "$1,234,567.89");
/// assert_eq!(format_currency(Decimal::from_str("-0.004").unwrap()), "$0.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(2);

    // Two decimal places: the last three characters are always `.DD`.
    let text = rounded.to_string();
    let (whole, cents) = text.split_at(text.len() - 3);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Formats minutes as hours with two decimals.
///
/// # Examples
///
/// ```
/// use hourtrackr::report::format_hours;
///
/// assert_eq!(format_hours(450), "7.50");
/// assert_eq!(format_hours(470), "7.83");
/// ```
pub fn format_hours(minutes: i64) -> String {
    let mut hours =
        minutes_to_hours(minutes).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    hours.rescale(2);
    hours.to_string()
}
