//! The shift ledger service.
//!
//! [`Ledger`] is the caller side of the computation core: it parses form
//! input, runs the calculator, and reads or rewrites the persisted ledger.
//! The core functions themselves never touch storage.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::calculation::{compute_shift, parse_shift_form, summarize};
use crate::config::OvertimePolicy;
use crate::error::LedgerResult;
use crate::models::{Shift, ShiftForm, Summary, Theme};
use crate::report::LedgerReport;
use crate::storage::{KeyValueStore, PreferenceRepository, ShiftRepository};

/// A single user's shift ledger.
///
/// Every mutation reads the whole ledger, changes it and writes it back.
/// Mutations are serialized so concurrent requests cannot interleave
/// their read and write.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hourtrackr::config::OvertimePolicy;
/// use hourtrackr::ledger::Ledger;
/// use hourtrackr::models::ShiftForm;
/// use hourtrackr::storage::MemoryStore;
///
/// let ledger = Ledger::new(Arc::new(MemoryStore::new()), OvertimePolicy::default());
/// ledger.add_shift(&ShiftForm::new("2024-01-01", "09:00", "17:00", "20"))?;
///
/// assert_eq!(ledger.summary().total_minutes, 480);
/// # Ok::<(), hourtrackr::error::LedgerError>(())
/// ```
pub struct Ledger {
    shifts: ShiftRepository,
    preferences: PreferenceRepository,
    policy: OvertimePolicy,
    write_lock: Mutex<()>,
}

impl Ledger {
    /// Creates a ledger persisted in `store`, using `policy` for blank
    /// overtime fields.
    pub fn new(store: Arc<dyn KeyValueStore>, policy: OvertimePolicy) -> Self {
        Self {
            shifts: ShiftRepository::new(store.clone()),
            preferences: PreferenceRepository::new(store),
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// The default overtime policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// All shifts in insertion order.
    pub fn shifts(&self) -> Vec<Shift> {
        self.shifts.load()
    }

    /// Totals over the current ledger.
    pub fn summary(&self) -> Summary {
        summarize(&self.shifts.load())
    }

    /// Display view of the current ledger.
    pub fn report(&self) -> LedgerReport {
        LedgerReport::build(&self.shifts.load())
    }

    /// Computes a shift from the form and appends it.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidDuration`](crate::error::LedgerError::InvalidDuration)
    ///   when the form yields no positive worked time; the ledger is untouched.
    /// - [`LedgerError::Storage`](crate::error::LedgerError::Storage) when the
    ///   updated ledger cannot be written.
    pub fn add_shift(&self, form: &ShiftForm) -> LedgerResult<Shift> {
        let input = parse_shift_form(form, &self.policy)?;
        let shift = compute_shift(&input)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut shifts = self.shifts.load();
        shifts.push(shift.clone());
        self.shifts.save(&shifts)?;

        info!(
            shift_id = %shift.id(),
            date = %shift.date(),
            total_earnings = %shift.total_earnings(),
            ledger_size = shifts.len(),
            "Shift added"
        );
        Ok(shift)
    }

    /// Removes the shift with `id`. Returns `false` when no such shift exists.
    pub fn remove_shift(&self, id: &str) -> LedgerResult<bool> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut shifts = self.shifts.load();
        let before = shifts.len();
        shifts.retain(|shift| shift.id() != id);

        if shifts.len() == before {
            return Ok(false);
        }

        self.shifts.save(&shifts)?;
        info!(shift_id = %id, ledger_size = shifts.len(), "Shift removed");
        Ok(true)
    }

    /// Deletes every shift.
    pub fn clear(&self) -> LedgerResult<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.shifts.clear()?;
        info!("Ledger cleared");
        Ok(())
    }

    /// The stored display theme, if one was chosen.
    pub fn theme(&self) -> Option<Theme> {
        self.preferences.theme()
    }

    /// Flips the display theme and stores the result.
    pub fn toggle_theme(&self) -> LedgerResult<Theme> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let next = Theme::toggled(self.preferences.theme());
        self.preferences.set_theme(next)?;
        Ok(next)
    }
}
