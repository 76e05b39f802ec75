//! # IO Module
//!
//! Interface layer between HTTP clients and the availability domain.
//!
//! Translates requests into domain operations and formats domain results as
//! the shared DTOs. Built on axum, with handlers receiving the services
//! through axum state.
//!
//! ## Supported Operations
//!
//! - **/api/availability**: read, replace and save the stored classifications
//! - **/api/calendar**: month grids, the visible week and week navigation
//! - **/api/selection**: date selection and day-type assignment

pub mod rest;

pub use rest::*;
