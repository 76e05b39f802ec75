//! Domain model for per-date garage availability.
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub use shared::DayType;

/// Format used for time slot endpoints on the wire and on disk
pub const TIME_FORMAT: &str = "%H:%M";

/// Opening hours used for any date that has never been classified
pub const DEFAULT_START_HOUR: u32 = 10;
pub const DEFAULT_END_HOUR: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeSlotError {
    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidFormat(String),
    #[error("Start time {start} must be before end time {end}")]
    StartNotBeforeEnd { start: String, end: String },
    #[error("Working days need exactly one time slot, got {0}")]
    WrongSlotCount(usize),
    #[error("A {0} day cannot have time slots")]
    UnexpectedSlots(DayType),
}

/// A validated opening window, `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    start: NaiveTime,
    #[serde(with = "hhmm")]
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, TimeSlotError> {
        if start >= end {
            return Err(TimeSlotError::StartNotBeforeEnd {
                start: start.format(TIME_FORMAT).to_string(),
                end: end.format(TIME_FORMAT).to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both ends from "HH:MM" strings
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeSlotError> {
        Self::new(parse_time(start)?, parse_time(end)?)
    }

    /// 10:00-18:00
    pub fn default_working() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(DEFAULT_END_HOUR, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format(TIME_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(TIME_FORMAT).to_string()
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, TimeSlotError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| TimeSlotError::InvalidFormat(value.to_string()))
}

/// Classification of one calendar date.
///
/// Deserializing goes through [`DayAvailability::from_parts`], so a stored
/// holiday with hours or a working day without them is rejected on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DayAvailabilityRecord")]
pub struct DayAvailability {
    pub day_type: DayType,
    pub time_slots: Vec<TimeSlot>,
}

/// Unchecked on-disk shape of [`DayAvailability`]
#[derive(Deserialize)]
struct DayAvailabilityRecord {
    day_type: DayType,
    #[serde(default)]
    time_slots: Vec<TimeSlot>,
}

impl TryFrom<DayAvailabilityRecord> for DayAvailability {
    type Error = TimeSlotError;

    fn try_from(record: DayAvailabilityRecord) -> Result<Self, Self::Error> {
        Self::from_parts(record.day_type, record.time_slots)
    }
}

impl DayAvailability {
    pub fn working(slot: TimeSlot) -> Self {
        Self {
            day_type: DayType::Working,
            time_slots: vec![slot],
        }
    }

    /// A closed day (weekend or holiday) carries no time slots
    pub fn closed(day_type: DayType) -> Self {
        Self {
            day_type,
            time_slots: Vec::new(),
        }
    }

    /// Build from a day type and raw slots, enforcing the shape rules:
    /// working days carry exactly one slot, closed days carry none.
    pub fn from_parts(day_type: DayType, time_slots: Vec<TimeSlot>) -> Result<Self, TimeSlotError> {
        match day_type {
            DayType::Working if time_slots.len() != 1 => {
                Err(TimeSlotError::WrongSlotCount(time_slots.len()))
            }
            DayType::Weekend | DayType::Holiday if !time_slots.is_empty() => {
                Err(TimeSlotError::UnexpectedSlots(day_type))
            }
            _ => Ok(Self { day_type, time_slots }),
        }
    }

    /// The slot shown in the time-range modal for this day
    pub fn working_slot(&self) -> Option<TimeSlot> {
        match self.day_type {
            DayType::Working => self.time_slots.first().copied(),
            _ => None,
        }
    }
}

impl Default for DayAvailability {
    fn default() -> Self {
        Self::working(TimeSlot::default_working())
    }
}

mod hhmm {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_slot() {
        let slot = TimeSlot::parse("09:00", "17:00").unwrap();
        assert_eq!(slot.start_str(), "09:00");
        assert_eq!(slot.end_str(), "17:00");
    }

    #[test]
    fn test_time_slot_rejects_bad_input() {
        assert_eq!(
            TimeSlot::parse("9am", "17:00"),
            Err(TimeSlotError::InvalidFormat("9am".to_string()))
        );
        assert!(matches!(
            TimeSlot::parse("18:00", "10:00"),
            Err(TimeSlotError::StartNotBeforeEnd { .. })
        ));
        assert!(matches!(
            TimeSlot::parse("10:00", "10:00"),
            Err(TimeSlotError::StartNotBeforeEnd { .. })
        ));
        assert!(TimeSlot::parse("24:00", "25:00").is_err());
    }

    #[test]
    fn test_default_is_working_ten_to_six() {
        let availability = DayAvailability::default();
        assert_eq!(availability.day_type, DayType::Working);
        let slot = availability.working_slot().unwrap();
        assert_eq!(slot.start_str(), "10:00");
        assert_eq!(slot.end_str(), "18:00");
    }

    #[test]
    fn test_from_parts_shape_rules() {
        let slot = TimeSlot::default_working();
        assert!(DayAvailability::from_parts(DayType::Working, vec![slot]).is_ok());
        assert_eq!(
            DayAvailability::from_parts(DayType::Working, vec![]),
            Err(TimeSlotError::WrongSlotCount(0))
        );
        assert_eq!(
            DayAvailability::from_parts(DayType::Holiday, vec![slot]),
            Err(TimeSlotError::UnexpectedSlots(DayType::Holiday))
        );
        assert!(DayAvailability::from_parts(DayType::Weekend, vec![]).is_ok());
    }

    #[test]
    fn test_closed_day_has_no_working_slot() {
        assert_eq!(DayAvailability::closed(DayType::Weekend).working_slot(), None);
    }

    #[test]
    fn test_yaml_uses_hour_minute_format() {
        let availability = DayAvailability::working(TimeSlot::parse("08:30", "16:45").unwrap());
        let yaml = serde_yaml::to_string(&availability).unwrap();
        assert!(yaml.contains("08:30"));
        assert!(yaml.contains("16:45"));

        let restored: DayAvailability = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, availability);
    }

    #[test]
    fn test_yaml_rejects_wrong_shape() {
        let holiday_with_hours = "day_type: holiday\ntime_slots:\n- start: '09:00'\n  end: '17:00'\n";
        let err = serde_yaml::from_str::<DayAvailability>(holiday_with_hours).unwrap_err();
        assert!(err.to_string().contains("cannot have time slots"));

        let working_without_hours = "day_type: working\n";
        assert!(serde_yaml::from_str::<DayAvailability>(working_without_hours).is_err());

        let weekend: DayAvailability = serde_yaml::from_str("day_type: weekend\n").unwrap();
        assert_eq!(weekend, DayAvailability::closed(DayType::Weekend));
    }
}
