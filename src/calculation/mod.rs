//! Calculation logic for the shift ledger.
//!
//! This module contains the computation core: resolving elapsed minutes
//! between clock times (including overnight shifts), the named clamp
//! policies for numeric input, parsing form text into typed input,
//! splitting a shift into regular and overtime pay, and summarizing a
//! ledger.

mod aggregator;
mod clamp;
mod duration;
mod parsing;
mod shift_calculator;

pub use aggregator::summarize;
pub use clamp::{
    BREAK_MINUTES_RANGE, ClampRange, MULTIPLIER_RANGE, RATE_RANGE, THRESHOLD_MINUTES_RANGE,
};
pub use duration::{MINUTES_PER_DAY, resolve_minutes};
pub use parsing::{parse_number_or_zero, parse_optional_number, parse_shift_form};
pub use shift_calculator::{ShiftInput, compute_shift, compute_shift_with_id};
