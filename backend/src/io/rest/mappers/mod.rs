pub mod availability_mapper;
pub mod calendar_mapper;

pub use availability_mapper::AvailabilityMapper;
pub use calendar_mapper::CalendarMapper;
