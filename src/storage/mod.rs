//! Persistence for the shift ledger.
//!
//! The ledger lives in a plain key-value store: the JSON-encoded shift
//! sequence under [`SHIFTS_KEY`] and the display theme under [`THEME_KEY`].
//! Each write replaces the whole value for its key.

mod file_store;
mod memory_store;
mod repository;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use repository::{PreferenceRepository, ShiftRepository};

use crate::error::LedgerResult;

/// Store key holding the JSON-encoded ledger.
pub const SHIFTS_KEY: &str = "hourtrackr.shifts";

/// Store key holding the display theme.
pub const THEME_KEY: &str = "hourtrackr.theme";

/// A string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> LedgerResult<()>;
}
