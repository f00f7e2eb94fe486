//! Application state for the shift ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::ledger::Ledger;

/// Shared application state.
///
/// Holds the ledger every handler reads from and writes to.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<Ledger>,
}

impl AppState {
    /// Creates a new application state around the given ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }

    /// Returns a reference to the ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
