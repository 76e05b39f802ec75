//! Week navigation for the availability calendar.
//!
//! The visible week is identified by `(month, year, week_index)` where
//! `week_index` addresses a row of the month's grid. Every transition keeps
//! `0 <= week_index < total_weeks(month, year)`; the row count is recomputed
//! on each move since it differs between months.

use chrono::NaiveDate;

use crate::domain::date_grid::{self, CalendarError, Week};

/// Position of the visible week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    month: u32,
    year: i32,
    week_index: usize,
}

impl WeekCursor {
    /// Create a cursor, rejecting an out-of-range month or week index
    pub fn new(month: u32, year: i32, week_index: usize) -> Result<Self, CalendarError> {
        let total = date_grid::total_weeks(month, year)?;
        if week_index >= total {
            return Err(CalendarError::WeekOutOfRange {
                index: week_index,
                total,
                month_name: date_grid::month_name(month),
                year,
            });
        }
        Ok(Self { month, year, week_index })
    }

    /// Cursor on the week containing `date`
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        let (month, year, week_index) = date_grid::find_week_containing(date)?;
        Ok(Self { month, year, week_index })
    }

    /// Cursor on the week containing today
    pub fn current() -> Result<Self, CalendarError> {
        let (month, year, week_index) = date_grid::find_current_week()?;
        Ok(Self { month, year, week_index })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week_index(&self) -> usize {
        self.week_index
    }

    pub fn total_weeks(&self) -> Result<usize, CalendarError> {
        date_grid::total_weeks(self.month, self.year)
    }

    /// The seven cells of the visible week
    pub fn week(&self) -> Result<Week, CalendarError> {
        let weeks = date_grid::generate_weeks(self.month, self.year)?;
        let total = weeks.len();
        weeks.into_iter().nth(self.week_index).ok_or(CalendarError::WeekOutOfRange {
            index: self.week_index,
            total,
            month_name: date_grid::month_name(self.month),
            year: self.year,
        })
    }

    /// Move back one week, rolling into the last week of the previous month
    pub fn previous_week(&mut self) -> Result<(), CalendarError> {
        if self.week_index > 0 {
            self.week_index -= 1;
            return Ok(());
        }

        let (month, year) = previous_month(self.month, self.year);
        let total = date_grid::total_weeks(month, year)?;
        *self = Self {
            month,
            year,
            week_index: total - 1,
        };
        Ok(())
    }

    /// Move forward one week, rolling into the first week of the next month
    pub fn next_week(&mut self) -> Result<(), CalendarError> {
        let total = self.total_weeks()?;
        if self.week_index + 1 < total {
            self.week_index += 1;
            return Ok(());
        }

        let (month, year) = next_month(self.month, self.year);
        // Validate the target month before committing the move
        date_grid::first_of_month(month, year)?;
        *self = Self {
            month,
            year,
            week_index: 0,
        };
        Ok(())
    }

    /// Jump to a month directly; the week always resets to the first row
    pub fn select_month(&mut self, month: u32, year: i32) -> Result<(), CalendarError> {
        *self = Self::new(month, year, 0)?;
        Ok(())
    }

    /// Move to the week containing `date`, switching month if needed
    pub fn jump_to(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        *self = Self::containing(date)?;
        Ok(())
    }
}

/// Navigate to the previous month (0-based months)
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 0 {
        (11, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Navigate to the next month (0-based months)
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month >= 11 {
        (0, year + 1)
    } else {
        (month + 1, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn assert_invariant(cursor: &WeekCursor) {
        let total = cursor.total_weeks().unwrap();
        assert!(cursor.week_index() < total, "{:?} has only {} weeks", cursor, total);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(previous_month(5, 2025), (4, 2025));
        assert_eq!(previous_month(0, 2025), (11, 2024));
        assert_eq!(next_month(5, 2025), (6, 2025));
        assert_eq!(next_month(11, 2025), (0, 2026));
    }

    #[test]
    fn test_next_from_last_week_of_december() {
        let last = date_grid::total_weeks(11, 2025).unwrap() - 1;
        let mut cursor = WeekCursor::new(11, 2025, last).unwrap();

        cursor.next_week().unwrap();

        assert_eq!(cursor, WeekCursor::new(0, 2026, 0).unwrap());
    }

    #[test]
    fn test_previous_from_first_week_of_january() {
        let mut cursor = WeekCursor::new(0, 2025, 0).unwrap();

        cursor.previous_week().unwrap();

        assert_eq!(cursor.month(), 11);
        assert_eq!(cursor.year(), 2024);
        assert_eq!(cursor.week_index(), date_grid::total_weeks(11, 2024).unwrap() - 1);
    }

    #[test]
    fn test_moves_within_month() {
        let mut cursor = WeekCursor::new(1, 2024, 2).unwrap();
        cursor.next_week().unwrap();
        assert_eq!(cursor.week_index(), 3);
        cursor.previous_week().unwrap();
        cursor.previous_week().unwrap();
        assert_eq!(cursor.week_index(), 1);
        assert_eq!((cursor.month(), cursor.year()), (1, 2024));
    }

    #[test]
    fn test_invariant_holds_over_long_walks() {
        let mut cursor = WeekCursor::new(0, 2024, 0).unwrap();
        for _ in 0..200 {
            cursor.next_week().unwrap();
            assert_invariant(&cursor);
        }
        for _ in 0..400 {
            cursor.previous_week().unwrap();
            assert_invariant(&cursor);
        }
    }

    #[test]
    fn test_forward_then_back_is_identity() {
        let start = WeekCursor::new(7, 2026, 5).unwrap();
        let mut cursor = start;
        cursor.next_week().unwrap();
        assert_eq!((cursor.month(), cursor.week_index()), (8, 0));
        cursor.previous_week().unwrap();
        assert_eq!(cursor, start);
    }

    #[test]
    fn test_select_month_resets_week() {
        let mut cursor = WeekCursor::new(1, 2024, 3).unwrap();
        cursor.select_month(7, 2026).unwrap();
        assert_eq!(cursor, WeekCursor::new(7, 2026, 0).unwrap());

        assert_eq!(cursor.select_month(12, 2026), Err(CalendarError::InvalidMonth(12)));
        assert_eq!(cursor.month(), 7);
    }

    #[test]
    fn test_new_rejects_week_out_of_range() {
        let result = WeekCursor::new(1, 2015, 4);
        assert!(matches!(result, Err(CalendarError::WeekOutOfRange { total: 4, .. })));
    }

    #[test]
    fn test_jump_to_date() {
        let mut cursor = WeekCursor::new(0, 2020, 0).unwrap();
        cursor.jump_to(date(2024, 2, 29)).unwrap();
        assert_eq!(cursor, WeekCursor::new(1, 2024, 4).unwrap());
        assert!(cursor.week().unwrap().iter().any(|c| c.date == date(2024, 2, 29)));
    }

    #[test]
    fn test_current_cursor_shows_today() {
        let cursor = WeekCursor::current().unwrap();
        let today = date_grid::today();
        assert!(cursor.week().unwrap().iter().any(|c| c.date == today));
    }
}
