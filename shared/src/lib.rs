use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Classification of a single calendar date for a garage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Open for bookings within the day's time slots
    Working,
    /// Regular closed day
    Weekend,
    /// Closed for a holiday
    Holiday,
}

/// An opening window within a working day, both ends as "HH:MM"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

/// One calendar date's classification and opening hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    #[serde(rename = "type")]
    pub day_type: DayType,
    /// Empty for weekend and holiday days
    #[serde(default, alias = "timeSlots")]
    pub time_slots: Vec<TimeSlot>,
}

/// A single cell of the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarCell {
    pub date: String, // e.g., "2024-02-01"
    pub day: u32,
    pub weekday: String,
    /// Padding days from adjacent months are dimmed and cannot be selected
    pub is_current_month: bool,
    pub availability: DayAvailability,
}

/// Month grid made of Sunday-aligned week rows of exactly 7 cells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGrid {
    pub month: u32, // 0 = January, 11 = December
    pub year: i32,
    pub month_name: String,
    pub weeks: Vec<Vec<CalendarCell>>,
}

/// Position of the visible week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekCursorInfo {
    pub month: u32, // 0 = January, 11 = December
    pub year: i32,
    pub week_index: usize,
    pub total_weeks: usize,
}

/// One day of the visible week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekDay {
    pub day: String, // e.g., "Monday"
    pub date: String,
    pub availability: DayAvailability,
    pub is_current_month: bool,
}

/// The visible week with its availability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekView {
    pub cursor: WeekCursorInfo,
    pub month_name: String,
    pub days: Vec<WeekDay>,
}

/// Response after moving the visible week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigateWeekResponse {
    pub week: WeekView,
    pub success_message: String,
}

/// Request to show a specific month (the week resets to the first row)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusRequest {
    pub month: u32,
    pub year: i32,
}

/// Current date information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32, // 0 = January
    pub year: i32,
    pub day: u32,
    pub formatted_date: String, // e.g., "June 19, 2025"
    pub iso_date: String,       // e.g., "2025-06-19"
}

/// Where the date-selection flow currently stands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionStatus {
    Unselected,
    Selected { date: String },
    /// The time-range modal is open for a working day
    EditingTimeRange { date: String, draft: TimeSlot },
}

/// Request to select a date on the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectDateRequest {
    pub date: String,
}

/// Request to classify the selected date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChooseDayTypeRequest {
    pub day_type: DayType,
}

/// Request to change the time range in the open modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditTimeRangeRequest {
    pub start: String,
    pub end: String,
}

/// Response for every selection operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionResponse {
    pub selection: SelectionStatus,
    pub week: WeekView,
    pub success_message: String,
}

/// All stored classifications for a garage, keyed by "YYYY-MM-DD"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityMapResponse {
    pub garage_id: String,
    pub entries: BTreeMap<String, DayAvailability>,
}

/// Request to replace every stored classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplaceAvailabilityRequest {
    pub entries: BTreeMap<String, DayAvailability>,
}

/// Effective availability for one date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateAvailabilityResponse {
    pub date: String,
    pub availability: DayAvailability,
    /// False when the default working day is reported for an unset date
    pub is_stored: bool,
}

/// Response after persisting the availability map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveAvailabilityResponse {
    pub saved_entries: usize,
    pub success_message: String,
}

impl DayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayType::Working => "working",
            DayType::Weekend => "weekend",
            DayType::Holiday => "holiday",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_display() {
        assert_eq!(DayType::Working.to_string(), "working");
        assert_eq!(DayType::Holiday.as_str(), "holiday");
    }

    #[test]
    fn test_day_availability_wire_format() {
        let availability = DayAvailability {
            day_type: DayType::Working,
            time_slots: vec![TimeSlot {
                start: "09:00".to_string(),
                end: "17:00".to_string(),
            }],
        };

        let json = serde_json::to_value(&availability).unwrap();
        assert_eq!(json["type"], "working");
        assert_eq!(json["time_slots"][0]["start"], "09:00");
        assert_eq!(json["time_slots"][0]["end"], "17:00");
    }

    #[test]
    fn test_day_availability_accepts_camel_case_slots() {
        let json = r#"{"type":"working","timeSlots":[{"start":"08:30","end":"12:00"}]}"#;
        let availability: DayAvailability = serde_json::from_str(json).unwrap();
        assert_eq!(availability.day_type, DayType::Working);
        assert_eq!(availability.time_slots[0].start, "08:30");

        let holiday: DayAvailability = serde_json::from_str(r#"{"type":"holiday"}"#).unwrap();
        assert_eq!(holiday.day_type, DayType::Holiday);
        assert!(holiday.time_slots.is_empty());
    }

    #[test]
    fn test_selection_status_is_tagged() {
        let status = SelectionStatus::EditingTimeRange {
            date: "2024-02-14".to_string(),
            draft: TimeSlot {
                start: "10:00".to_string(),
                end: "18:00".to_string(),
            },
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["state"], "editing_time_range");
        assert_eq!(json["date"], "2024-02-14");

        let unselected = serde_json::to_value(SelectionStatus::Unselected).unwrap();
        assert_eq!(unselected["state"], "unselected");
    }
}
