//! # YAML Availability Repository
//!
//! Stores each garage's classifications in `{garage_id}/availability.yaml`.
//!
//! ## Features
//!
//! - Human-readable YAML, one entry per classified date
//! - Atomic writes through a temp file and rename, so a failed save never
//!   leaves a half-written file behind
//! - A missing file is treated as "nothing classified yet"

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use super::connection::DataConnection;
use crate::domain::models::availability::DayAvailability;
use crate::storage::AvailabilityStorage;

const AVAILABILITY_FILE_NAME: &str = "availability.yaml";

/// On-disk layout of `availability.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityFile {
    garage_id: String,
    updated_at: String, // RFC 3339 timestamp
    #[serde(default)]
    entries: BTreeMap<NaiveDate, DayAvailability>,
}

/// YAML-file availability repository
#[derive(Clone)]
pub struct AvailabilityRepository {
    connection: DataConnection,
}

impl AvailabilityRepository {
    pub fn new(connection: DataConnection) -> Self {
        Self { connection }
    }

    fn availability_path(&self, garage_id: &str) -> Result<PathBuf> {
        Ok(self
            .connection
            .garage_directory(garage_id)?
            .join(AVAILABILITY_FILE_NAME))
    }
}

#[async_trait]
impl AvailabilityStorage for AvailabilityRepository {
    async fn load_availability(&self, garage_id: &str) -> Result<BTreeMap<NaiveDate, DayAvailability>> {
        let yaml_path = self.availability_path(garage_id)?;

        if !yaml_path.exists() {
            debug!("No availability file for garage '{}'", garage_id);
            return Ok(BTreeMap::new());
        }

        let yaml_content = fs::read_to_string(&yaml_path)
            .with_context(|| format!("Failed to read {}", yaml_path.display()))?;
        let file: AvailabilityFile = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", yaml_path.display()))?;

        debug!(
            "Loaded {} availability entries for garage '{}' from {:?}",
            file.entries.len(),
            garage_id,
            yaml_path
        );
        Ok(file.entries)
    }

    async fn store_availability(
        &self,
        garage_id: &str,
        entries: &BTreeMap<NaiveDate, DayAvailability>,
    ) -> Result<()> {
        let garage_dir = self.connection.ensure_garage_directory(garage_id)?;
        let yaml_path = garage_dir.join(AVAILABILITY_FILE_NAME);

        let file = AvailabilityFile {
            garage_id: garage_id.to_string(),
            updated_at: Utc::now().to_rfc3339(),
            entries: entries.clone(),
        };
        let yaml_content = serde_yaml::to_string(&file)?;

        // Atomic write: each call gets its own temp file in the garage
        // directory, then renames it over the previous file
        let mut temp_file = NamedTempFile::new_in(&garage_dir)
            .with_context(|| format!("Failed to create temp file in {}", garage_dir.display()))?;
        temp_file.write_all(yaml_content.as_bytes())?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(&yaml_path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to replace {}", yaml_path.display()))?;

        info!(
            "Stored {} availability entries for garage '{}'",
            entries.len(),
            garage_id
        );
        Ok(())
    }
}
