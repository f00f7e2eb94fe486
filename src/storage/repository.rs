//! Typed repositories over a key-value store.

use std::sync::Arc;

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Shift, Theme};

use super::{KeyValueStore, SHIFTS_KEY, THEME_KEY};

/// Reads and writes the whole ledger.
///
/// Loading never fails: a missing, unreadable or malformed ledger is
/// reported in the log and treated as empty. Individual records that do not
/// read as a shift are skipped and logged; the rest of the ledger is kept.
#[derive(Clone)]
pub struct ShiftRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ShiftRepository {
    /// Creates a repository over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the ledger in insertion order.
    pub fn load(&self) -> Vec<Shift> {
        let content = match self.store.get(SHIFTS_KEY) {
            Ok(Some(content)) => content,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "Ledger unreadable, starting empty");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "Ledger malformed, starting empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(shift) => Some(shift),
                Err(err) => {
                    warn!(index, error = %err, "Skipping unreadable shift record");
                    None
                }
            })
            .collect()
    }

    /// Replaces the stored ledger with `shifts`.
    pub fn save(&self, shifts: &[Shift]) -> LedgerResult<()> {
        let content =
            serde_json::to_string(shifts).map_err(|e| LedgerError::storage(SHIFTS_KEY, e))?;
        self.store.set(SHIFTS_KEY, &content)
    }

    /// Deletes the stored ledger.
    pub fn clear(&self) -> LedgerResult<()> {
        self.store.remove(SHIFTS_KEY)
    }
}

/// Reads and writes display preferences.
#[derive(Clone)]
pub struct PreferenceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceRepository {
    /// Creates a repository over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored theme, if any. Unreadable values count as unset.
    pub fn theme(&self) -> Option<Theme> {
        let stored = self.store.get(THEME_KEY).ok().flatten()?;
        match stored.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!(error = %err, "Ignoring stored theme");
                None
            }
        }
    }

    /// Stores `theme`.
    pub fn set_theme(&self, theme: Theme) -> LedgerResult<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
