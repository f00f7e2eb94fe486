//! File-backed key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

use super::KeyValueStore;

/// Stores each key as a file in a data directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a reader never sees a half-written value.
///
/// # Example
///
/// ```no_run
/// use hourtrackr::storage::{FileStore, KeyValueStore};
///
/// let store = FileStore::open("./data")?;
/// store.set("hourtrackr.theme", "dark")?;
/// assert_eq!(store.get("hourtrackr.theme")?.as_deref(), Some("dark"));
/// # Ok::<(), hourtrackr::error::LedgerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> LedgerResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| LedgerError::storage(&dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    /// The directory holding the stored files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::storage(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let target = self.path_for(key);
        let staging = self.dir.join(format!("{}.tmp", key));

        fs::write(&staging, value).map_err(|e| LedgerError::storage(key, e))?;
        fs::rename(&staging, &target).map_err(|e| LedgerError::storage(key, e))?;

        debug!(key, bytes = value.len(), path = %target.display(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LedgerError::storage(key, e)),
        }
    }
}
