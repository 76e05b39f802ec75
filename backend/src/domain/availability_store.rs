//! In-memory availability store.
//!
//! Maps a calendar date to its classification. A date with no entry is a
//! default working day (10:00-18:00). Entries are only ever created or
//! overwritten; nothing in the calendar flow deletes them.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::models::availability::DayAvailability;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityStore {
    entries: BTreeMap<NaiveDate, DayAvailability>,
}

impl AvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective availability for a date, falling back to the default working day
    pub fn get(&self, date: NaiveDate) -> DayAvailability {
        self.entries.get(&date).cloned().unwrap_or_default()
    }

    /// Stored entry only, `None` for never-classified dates
    pub fn get_stored(&self, date: NaiveDate) -> Option<&DayAvailability> {
        self.entries.get(&date)
    }

    /// Create or overwrite the entry for a date, returning the previous one
    pub fn set(&mut self, date: NaiveDate, availability: DayAvailability) -> Option<DayAvailability> {
        self.entries.insert(date, availability)
    }

    /// Swap in a complete new set of entries
    pub fn replace_all(&mut self, entries: BTreeMap<NaiveDate, DayAvailability>) {
        self.entries = entries;
    }

    /// Copy of every entry, ordered by date
    pub fn snapshot(&self) -> BTreeMap<NaiveDate, DayAvailability> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
