//! Shift ledger for hourly workers.
//!
//! This crate records worked shifts, splits each one into regular and
//! overtime pay, and summarizes the whole ledger. Overnight shifts are
//! handled by rolling clock-out into the next day.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod report;
pub mod storage;
