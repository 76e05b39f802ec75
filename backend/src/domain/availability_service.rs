//! Availability service for a single garage.
//!
//! Holds the in-memory store, the visible-week cursor and the current
//! selection behind one mutex, so concurrent requests see each operation as a
//! single step. That mutex is never held across an await.
//!
//! Persistence goes through [`AvailabilityStorage`] and is ordered by two
//! async locks:
//! - `persist_lock` admits one storage writer at a time, so snapshots reach
//!   disk in the order they were taken.
//! - `replace_gate` is held exclusively while a full replacement is written.
//!   Edits that write the store share it, so they wait for the replacement
//!   to land instead of being overwritten by it. Saves do not take it; edits
//!   made during a save stay in memory for the next one.

use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, RwLock};

use crate::domain::availability_store::AvailabilityStore;
use crate::domain::date_grid::{self, CalendarError};
use crate::domain::models::availability::{DayAvailability, DayType, TimeSlot, TimeSlotError};
use crate::domain::navigation::WeekCursor;
use crate::domain::selection::{ChoiceOutcome, Selection, SelectionController, SelectionError};
use crate::storage::AvailabilityStorage;

#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    TimeSlot(#[from] TimeSlotError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A day as shown in the week list or the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub availability: DayAvailability,
}

/// The visible week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekView {
    pub cursor: WeekCursor,
    pub total_weeks: usize,
    pub days: Vec<DayView>,
}

/// A full month grid with availability
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGridView {
    pub month: u32,
    pub year: i32,
    pub weeks: Vec<Vec<DayView>>,
}

struct CalendarSession {
    store: AvailabilityStore,
    cursor: WeekCursor,
    selection: SelectionController,
}

impl CalendarSession {
    fn week_view(&self) -> Result<WeekView, CalendarError> {
        let days = self
            .cursor
            .week()?
            .iter()
            .map(|cell| DayView {
                date: cell.date,
                is_current_month: cell.is_current_month,
                availability: self.store.get(cell.date),
            })
            .collect();

        Ok(WeekView {
            cursor: self.cursor,
            total_weeks: self.cursor.total_weeks()?,
            days,
        })
    }
}

/// Availability service that handles the calendar flow for one garage
#[derive(Clone)]
pub struct AvailabilityService {
    garage_id: String,
    session: Arc<Mutex<CalendarSession>>,
    storage: Arc<dyn AvailabilityStorage>,
    persist_lock: Arc<AsyncMutex<()>>,
    replace_gate: Arc<RwLock<()>>,
}

impl AvailabilityService {
    /// Create a service with an empty store, showing the week containing today
    pub fn new(garage_id: impl Into<String>, storage: Arc<dyn AvailabilityStorage>) -> Result<Self, AvailabilityError> {
        let session = CalendarSession {
            store: AvailabilityStore::new(),
            cursor: WeekCursor::current()?,
            selection: SelectionController::new(),
        };

        Ok(Self {
            garage_id: garage_id.into(),
            session: Arc::new(Mutex::new(session)),
            storage,
            persist_lock: Arc::new(AsyncMutex::new(())),
            replace_gate: Arc::new(RwLock::new(())),
        })
    }

    pub fn garage_id(&self) -> &str {
        &self.garage_id
    }

    fn session(&self) -> MutexGuard<'_, CalendarSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the in-memory store with what storage holds for this garage
    pub async fn load(&self) -> Result<usize, AvailabilityError> {
        let _persist = self.persist_lock.lock().await;
        let _gate = self.replace_gate.write().await;
        let entries = self.storage.load_availability(&self.garage_id).await?;
        let count = entries.len();
        self.session().store.replace_all(entries);
        info!("Loaded {} availability entries for garage '{}'", count, self.garage_id);
        Ok(count)
    }

    /// Persist a snapshot of the store.
    ///
    /// Edits made after the snapshot is taken stay in memory and are written
    /// by the next save.
    pub async fn save(&self) -> Result<usize, AvailabilityError> {
        let _persist = self.persist_lock.lock().await;
        let snapshot = self.session().store.snapshot();
        self.storage
            .store_availability(&self.garage_id, &snapshot)
            .await?;
        info!("Saved {} availability entries for garage '{}'", snapshot.len(), self.garage_id);
        Ok(snapshot.len())
    }

    /// Persist a complete replacement map, then swap it into memory.
    /// If the write fails the in-memory store is left unchanged. Store edits
    /// arriving meanwhile wait and are applied on top of the new map.
    pub async fn replace_all(&self, entries: BTreeMap<NaiveDate, DayAvailability>) -> Result<usize, AvailabilityError> {
        let _persist = self.persist_lock.lock().await;
        let _gate = self.replace_gate.write().await;
        self.storage
            .store_availability(&self.garage_id, &entries)
            .await?;
        let count = entries.len();
        self.session().store.replace_all(entries);
        info!("Replaced availability for garage '{}' with {} entries", self.garage_id, count);
        Ok(count)
    }

    /// Every stored classification, ordered by date
    pub fn entries(&self) -> BTreeMap<NaiveDate, DayAvailability> {
        self.session().store.snapshot()
    }

    /// Effective availability for a date and whether it was explicitly stored
    pub fn availability_for(&self, date: NaiveDate) -> (DayAvailability, bool) {
        let session = self.session();
        match session.store.get_stored(date) {
            Some(availability) => (availability.clone(), true),
            None => (DayAvailability::default(), false),
        }
    }

    pub fn current_week(&self) -> Result<WeekView, AvailabilityError> {
        Ok(self.session().week_view()?)
    }

    pub fn month_grid(&self, month: u32, year: i32) -> Result<MonthGridView, AvailabilityError> {
        let weeks = date_grid::generate_weeks(month, year)?;
        let session = self.session();

        let weeks = weeks
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| DayView {
                        date: cell.date,
                        is_current_month: cell.is_current_month,
                        availability: session.store.get(cell.date),
                    })
                    .collect()
            })
            .collect();

        Ok(MonthGridView { month, year, weeks })
    }

    pub fn previous_week(&self) -> Result<WeekView, AvailabilityError> {
        let mut session = self.session();
        session.cursor.previous_week()?;
        Ok(session.week_view()?)
    }

    pub fn next_week(&self) -> Result<WeekView, AvailabilityError> {
        let mut session = self.session();
        session.cursor.next_week()?;
        Ok(session.week_view()?)
    }

    /// Show a month directly, starting at its first week
    pub fn select_month(&self, month: u32, year: i32) -> Result<WeekView, AvailabilityError> {
        let mut session = self.session();
        session.cursor.select_month(month, year)?;
        Ok(session.week_view()?)
    }

    /// Return to the week containing today
    pub fn reset_to_today(&self) -> Result<WeekView, AvailabilityError> {
        let mut session = self.session();
        session.cursor = WeekCursor::current()?;
        Ok(session.week_view()?)
    }

    pub fn selection(&self) -> Selection {
        *self.session().selection.state()
    }

    /// Select a day of the visible month and bring its week into view
    pub fn select_date(&self, date: NaiveDate) -> Result<WeekView, AvailabilityError> {
        let mut session = self.session();
        let is_current_month =
            session.cursor.month() == date.month0() && session.cursor.year() == date.year();

        session.selection.select(date, is_current_month)?;
        session.cursor.jump_to(date)?;
        Ok(session.week_view()?)
    }

    pub async fn choose_day_type(&self, day_type: DayType) -> Result<ChoiceOutcome, AvailabilityError> {
        let _gate = self.replace_gate.read().await;
        let mut session = self.session();
        let CalendarSession { store, selection, .. } = &mut *session;
        Ok(selection.choose(day_type, store)?)
    }

    pub fn edit_time_range(&self, slot: TimeSlot) -> Result<(), AvailabilityError> {
        Ok(self.session().selection.edit_time_range(slot)?)
    }

    pub async fn confirm_time_range(&self) -> Result<(NaiveDate, DayAvailability), AvailabilityError> {
        let _gate = self.replace_gate.read().await;
        let mut session = self.session();
        let CalendarSession { store, selection, .. } = &mut *session;
        Ok(selection.confirm(store)?)
    }

    pub fn cancel_time_range(&self) -> Result<NaiveDate, AvailabilityError> {
        Ok(self.session().selection.cancel()?)
    }

    pub fn clear_selection(&self) {
        let mut session = self.session();
        if session.selection.state() == &Selection::Unselected {
            warn!("Clear requested with nothing selected");
        }
        session.selection.clear();
    }
}
