use chrono::Datelike;

use super::availability_mapper::AvailabilityMapper;
use crate::domain::date_grid;
use crate::domain::selection::Selection;
use crate::domain::{DayView, MonthGridView, WeekView as DomainWeekView};
use shared::{
    CalendarCell, MonthGrid, SelectionStatus, WeekCursorInfo, WeekDay,
    WeekView as SharedWeekView,
};

/// Mapper from calendar views and selection state to shared DTOs.
pub struct CalendarMapper;

impl CalendarMapper {
    pub fn to_week_day(day: &DayView) -> WeekDay {
        WeekDay {
            day: date_grid::weekday_name(day.date.weekday()).to_string(),
            date: date_grid::iso_date(day.date),
            availability: AvailabilityMapper::to_dto(&day.availability),
            is_current_month: day.is_current_month,
        }
    }

    pub fn to_calendar_cell(day: &DayView) -> CalendarCell {
        CalendarCell {
            date: date_grid::iso_date(day.date),
            day: day.date.day(),
            weekday: date_grid::weekday_name(day.date.weekday()).to_string(),
            is_current_month: day.is_current_month,
            availability: AvailabilityMapper::to_dto(&day.availability),
        }
    }

    pub fn to_week_view_dto(domain: &DomainWeekView) -> SharedWeekView {
        let month = domain.cursor.month();
        SharedWeekView {
            cursor: WeekCursorInfo {
                month,
                year: domain.cursor.year(),
                week_index: domain.cursor.week_index(),
                total_weeks: domain.total_weeks,
            },
            month_name: date_grid::month_name(month).to_string(),
            days: domain.days.iter().map(Self::to_week_day).collect(),
        }
    }

    pub fn to_month_grid_dto(domain: &MonthGridView) -> MonthGrid {
        MonthGrid {
            month: domain.month,
            year: domain.year,
            month_name: date_grid::month_name(domain.month).to_string(),
            weeks: domain
                .weeks
                .iter()
                .map(|week| week.iter().map(Self::to_calendar_cell).collect())
                .collect(),
        }
    }

    pub fn to_selection_dto(selection: &Selection) -> SelectionStatus {
        match selection {
            Selection::Unselected => SelectionStatus::Unselected,
            Selection::Selected(date) => SelectionStatus::Selected {
                date: date_grid::iso_date(*date),
            },
            Selection::EditingTimeRange { date, draft } => SelectionStatus::EditingTimeRange {
                date: date_grid::iso_date(*date),
                draft: AvailabilityMapper::slot_to_dto(draft),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::availability::{DayAvailability, DayType, TimeSlot};
    use crate::domain::WeekCursor;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_week_view_dto() {
        let cursor = WeekCursor::new(1, 2024, 0).unwrap();
        let days = cursor
            .week()
            .unwrap()
            .iter()
            .map(|cell| DayView {
                date: cell.date,
                is_current_month: cell.is_current_month,
                availability: DayAvailability::default(),
            })
            .collect();
        let view = DomainWeekView {
            cursor,
            total_weeks: 5,
            days,
        };

        let dto = CalendarMapper::to_week_view_dto(&view);

        assert_eq!(dto.month_name, "February");
        assert_eq!(dto.cursor.total_weeks, 5);
        assert_eq!(dto.days.len(), 7);
        assert_eq!(dto.days[0].day, "Sunday");
        assert_eq!(dto.days[0].date, "2024-01-28");
        assert!(!dto.days[0].is_current_month);
        assert_eq!(dto.days[4].date, "2024-02-01");
        assert_eq!(dto.days[4].availability.time_slots[0].start, "10:00");
    }

    #[test]
    fn test_selection_dto() {
        let editing = Selection::EditingTimeRange {
            date: date(2024, 2, 14),
            draft: TimeSlot::parse("09:30", "16:00").unwrap(),
        };

        match CalendarMapper::to_selection_dto(&editing) {
            SelectionStatus::EditingTimeRange { date, draft } => {
                assert_eq!(date, "2024-02-14");
                assert_eq!(draft.start, "09:30");
                assert_eq!(draft.end, "16:00");
            }
            other => panic!("unexpected selection {:?}", other),
        }

        assert_eq!(
            CalendarMapper::to_selection_dto(&Selection::Unselected),
            SelectionStatus::Unselected
        );
    }

    #[test]
    fn test_calendar_cell() {
        let cell = CalendarMapper::to_calendar_cell(&DayView {
            date: date(2024, 2, 29),
            is_current_month: true,
            availability: DayAvailability::closed(DayType::Holiday),
        });

        assert_eq!(cell.day, 29);
        assert_eq!(cell.weekday, "Thursday");
        assert_eq!(cell.availability.day_type, DayType::Holiday);
    }
}
