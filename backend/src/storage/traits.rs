//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so the availability service
//! works the same against YAML files or any other backend.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::domain::models::availability::DayAvailability;

/// Trait defining the interface for availability storage operations
#[async_trait]
pub trait AvailabilityStorage: Send + Sync {
    /// Load every stored classification for a garage.
    /// Returns an empty map when nothing has been saved yet.
    async fn load_availability(&self, garage_id: &str) -> Result<BTreeMap<NaiveDate, DayAvailability>>;

    /// Replace the stored classifications for a garage.
    /// Either the whole map is written or the previous data is left intact.
    async fn store_availability(
        &self,
        garage_id: &str,
        entries: &BTreeMap<NaiveDate, DayAvailability>,
    ) -> Result<()>;
}
