//! Core data models for the shift ledger.
//!
//! This module contains the domain models used throughout the crate.

mod clock;
mod shift;
mod shift_form;
mod summary;
mod theme;

pub use clock::parse_clock_time;
pub use shift::{Shift, minutes_to_hours};
pub use shift_form::ShiftForm;
pub use summary::Summary;
pub use theme::Theme;
