//! Date grid generation for the availability calendar.
//!
//! A month is shown as Sunday-aligned rows of exactly seven days. The first
//! row starts on the Sunday on or before the 1st, the last row is the one
//! containing the month's last day. Padding days from neighbouring months are
//! included so every row is complete; they are flagged so the UI can dim them.
//!
//! Months are 0-based throughout (0 = January, 11 = December).

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};

/// Number of days in every grid row
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 0 and 11")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("Week index {index} is out of range, {month_name} {year} has {total} weeks")]
    WeekOutOfRange {
        index: usize,
        total: usize,
        month_name: &'static str,
        year: i32,
    },
}

/// A single day in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the previous or next month
    pub is_current_month: bool,
}

/// One Sunday-to-Saturday row
pub type Week = [GridCell; DAYS_PER_WEEK];

/// First day of the given month
pub fn first_of_month(month: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    if month > 11 {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CalendarError::YearOutOfRange(year))
}

/// Last day of the given month
pub fn last_of_month(month: u32, year: i32) -> Result<NaiveDate, CalendarError> {
    first_of_month(month, year)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::YearOutOfRange(year))
}

/// Build the week rows for a month, padding days included.
pub fn generate_weeks(month: u32, year: i32) -> Result<Vec<Week>, CalendarError> {
    let first = first_of_month(month, year)?;
    let last = last_of_month(month, year)?;

    let leading = u64::from(first.weekday().num_days_from_sunday());
    let mut row_start = first
        .checked_sub_days(Days::new(leading))
        .ok_or(CalendarError::YearOutOfRange(year))?;

    let mut weeks = Vec::with_capacity(6);
    while row_start <= last {
        let cells: Vec<GridCell> = row_start
            .iter_days()
            .take(DAYS_PER_WEEK)
            .map(|date| GridCell {
                date,
                is_current_month: date.month0() == month && date.year() == year,
            })
            .collect();
        let week: Week = cells
            .try_into()
            .map_err(|_| CalendarError::YearOutOfRange(year))?;
        weeks.push(week);

        row_start = row_start
            .checked_add_days(Days::new(DAYS_PER_WEEK as u64))
            .ok_or(CalendarError::YearOutOfRange(year))?;
    }

    Ok(weeks)
}

/// Number of rows in a month's grid, always between 4 and 6
pub fn total_weeks(month: u32, year: i32) -> Result<usize, CalendarError> {
    Ok(generate_weeks(month, year)?.len())
}

/// Locate the row containing `date` within the grid of `date`'s own month.
///
/// Returns `(month, year, week_index)`. Falls back to row 0 if the date is
/// somehow absent from the grid.
pub fn find_week_containing(date: NaiveDate) -> Result<(u32, i32, usize), CalendarError> {
    let month = date.month0();
    let year = date.year();
    let weeks = generate_weeks(month, year)?;

    let week_index = weeks
        .iter()
        .position(|week| week.iter().any(|cell| cell.date == date))
        .unwrap_or(0);

    Ok((month, year, week_index))
}

/// Locate the row containing today's local date
pub fn find_current_week() -> Result<(u32, i32, usize), CalendarError> {
    find_week_containing(today())
}

/// Today's date in local calendar terms
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as the "YYYY-MM-DD" key used everywhere in the store
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a "YYYY-MM-DD" date key
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Get the human-readable name for a 0-based month index
pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Invalid Month",
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Format a date for human-readable display, e.g. "February 29, 2024"
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month0()), date.day(), date.year())
}
