//! # Storage Module
//!
//! Handles persistence of garage availability.
//!
//! The domain layer only sees the [`AvailabilityStorage`] trait; the current
//! implementation keeps one YAML file per garage under the data directory:
//!
//! ```text
//! data/
//! └── {garage_id}/
//!     └── availability.yaml
//! ```

pub mod traits;
pub mod yaml;

pub use traits::AvailabilityStorage;
pub use yaml::{AvailabilityRepository, DataConnection};
