//! # Domain Module
//!
//! Calendar and availability logic for a garage, independent of HTTP and of
//! the storage backend.
//!
//! ## Module Organization
//!
//! - **date_grid**: Sunday-aligned month grids and the current-week locator
//! - **navigation**: week cursor with month/year rollover
//! - **availability_store**: in-memory date -> classification map
//! - **selection**: date selection and day-type assignment state machine
//! - **availability_service**: ties the pieces together for one garage and
//!   persists through the storage layer
//!
//! ## Business Rules
//!
//! - A date without an entry is a working day from 10:00 to 18:00
//! - Working days carry exactly one time slot, closed days carry none
//! - Only days of the visible month can be selected
//! - The visible week index is always valid for its month

pub mod availability_service;
pub mod availability_store;
pub mod date_grid;
pub mod models;
pub mod navigation;
pub mod selection;

pub use availability_service::*;
pub use availability_store::AvailabilityStore;
pub use date_grid::CalendarError;
pub use navigation::WeekCursor;
pub use selection::{ChoiceOutcome, Selection, SelectionController, SelectionError};
