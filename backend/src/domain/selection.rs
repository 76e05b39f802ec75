//! Date selection and day-type assignment.
//!
//! One date at a time can be selected from the month grid. From there the
//! user picks a classification:
//!
//! ```text
//! Unselected -> Selected(date) -> Working -> EditingTimeRange -> confirm | cancel -> Unselected
//!                              -> Weekend | Holiday -> Unselected
//! ```
//!
//! Every path ends in `Unselected`. Writes to the store always happen before
//! the selection is cleared.

use chrono::NaiveDate;
use log::{debug, info};

use crate::domain::availability_store::AvailabilityStore;
use crate::domain::models::availability::{DayAvailability, DayType, TimeSlot};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("No date is selected")]
    NothingSelected,
    #[error("The time range editor is not open")]
    EditorNotOpen,
    #[error("{0} is outside the visible month and cannot be selected")]
    NotSelectable(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(NaiveDate),
    /// Time-range modal open for a working day
    EditingTimeRange { date: NaiveDate, draft: TimeSlot },
}

impl Selection {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(date) => Some(*date),
            Selection::EditingTimeRange { date, .. } => Some(*date),
        }
    }
}

/// What a day-type choice led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Working was chosen; the editor is open with this draft
    EditorOpened(TimeSlot),
    /// Weekend or holiday was stored and the selection cleared
    Stored(DayAvailability),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    /// Select a date of the visible month. Replaces any earlier selection,
    /// discarding an unconfirmed time-range draft.
    pub fn select(&mut self, date: NaiveDate, is_current_month: bool) -> Result<(), SelectionError> {
        if !is_current_month {
            return Err(SelectionError::NotSelectable(date));
        }
        debug!("Selected {}", date);
        self.state = Selection::Selected(date);
        Ok(())
    }

    /// Classify the selected date.
    ///
    /// Working opens the editor pre-filled with the stored slot (or the
    /// default 10:00-18:00). Weekend and holiday are written immediately.
    pub fn choose(
        &mut self,
        day_type: DayType,
        store: &mut AvailabilityStore,
    ) -> Result<ChoiceOutcome, SelectionError> {
        let date = self.state.date().ok_or(SelectionError::NothingSelected)?;

        match day_type {
            DayType::Working => {
                let draft = store
                    .get_stored(date)
                    .and_then(DayAvailability::working_slot)
                    .unwrap_or_else(TimeSlot::default_working);
                self.state = Selection::EditingTimeRange { date, draft };
                Ok(ChoiceOutcome::EditorOpened(draft))
            }
            DayType::Weekend | DayType::Holiday => {
                let availability = DayAvailability::closed(day_type);
                store.set(date, availability.clone());
                info!("Marked {} as {}", date, day_type);
                self.state = Selection::Unselected;
                Ok(ChoiceOutcome::Stored(availability))
            }
        }
    }

    /// Replace the draft in the open editor
    pub fn edit_time_range(&mut self, slot: TimeSlot) -> Result<(), SelectionError> {
        match &mut self.state {
            Selection::EditingTimeRange { draft, .. } => {
                *draft = slot;
                Ok(())
            }
            _ => Err(SelectionError::EditorNotOpen),
        }
    }

    /// Store the draft as the date's working hours and close everything
    pub fn confirm(&mut self, store: &mut AvailabilityStore) -> Result<(NaiveDate, DayAvailability), SelectionError> {
        let (date, draft) = match self.state {
            Selection::EditingTimeRange { date, draft } => (date, draft),
            _ => return Err(SelectionError::EditorNotOpen),
        };

        let availability = DayAvailability::working(draft);
        store.set(date, availability.clone());
        info!(
            "Marked {} as working {}-{}",
            date,
            draft.start_str(),
            draft.end_str()
        );
        self.state = Selection::Unselected;
        Ok((date, availability))
    }

    /// Close the editor without storing anything
    pub fn cancel(&mut self) -> Result<NaiveDate, SelectionError> {
        match self.state {
            Selection::EditingTimeRange { date, .. } => {
                self.state = Selection::Unselected;
                Ok(date)
            }
            _ => Err(SelectionError::EditorNotOpen),
        }
    }

    /// Drop the selection marker; the store is untouched
    pub fn clear(&mut self) {
        self.state = Selection::Unselected;
    }
}
