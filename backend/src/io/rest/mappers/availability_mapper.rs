use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::date_grid;
use crate::domain::models::availability::{DayAvailability, TimeSlot};
use crate::domain::AvailabilityError;
use shared::{DayAvailability as SharedDayAvailability, TimeSlot as SharedTimeSlot};

/// Mapper to convert between shared availability DTOs and domain models.
pub struct AvailabilityMapper;

impl AvailabilityMapper {
    pub fn slot_to_dto(slot: &TimeSlot) -> SharedTimeSlot {
        SharedTimeSlot {
            start: slot.start_str(),
            end: slot.end_str(),
        }
    }

    /// Parses "HH:MM" strings and enforces `start < end`.
    pub fn slot_to_domain(dto: &SharedTimeSlot) -> Result<TimeSlot, AvailabilityError> {
        Ok(TimeSlot::parse(&dto.start, &dto.end)?)
    }

    pub fn to_dto(domain: &DayAvailability) -> SharedDayAvailability {
        SharedDayAvailability {
            day_type: domain.day_type,
            time_slots: domain.time_slots.iter().map(Self::slot_to_dto).collect(),
        }
    }

    pub fn to_domain(dto: &SharedDayAvailability) -> Result<DayAvailability, AvailabilityError> {
        let time_slots = dto
            .time_slots
            .iter()
            .map(Self::slot_to_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DayAvailability::from_parts(dto.day_type, time_slots)?)
    }

    pub fn parse_date(value: &str) -> Result<NaiveDate, AvailabilityError> {
        date_grid::parse_iso_date(value).ok_or_else(|| AvailabilityError::InvalidDate(value.to_string()))
    }

    pub fn entries_to_dto(entries: &BTreeMap<NaiveDate, DayAvailability>) -> BTreeMap<String, SharedDayAvailability> {
        entries
            .iter()
            .map(|(date, availability)| (date_grid::iso_date(*date), Self::to_dto(availability)))
            .collect()
    }

    /// Converts a whole submitted map. Any invalid key or entry rejects the
    /// entire map.
    pub fn entries_to_domain(
        entries: &BTreeMap<String, SharedDayAvailability>,
    ) -> Result<BTreeMap<NaiveDate, DayAvailability>, AvailabilityError> {
        entries
            .iter()
            .map(|(date, availability)| -> Result<_, AvailabilityError> {
                Ok((Self::parse_date(date)?, Self::to_domain(availability)?))
            })
            .collect()
    }
}
