//! Server configuration.
//!
//! Defaults, then an optional YAML file named by `GARAGE_AVAILABILITY_CONFIG`,
//! then individual environment overrides.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::storage::DataConnection;

pub const CONFIG_FILE_ENV: &str = "GARAGE_AVAILABILITY_CONFIG";
pub const BIND_ENV: &str = "GARAGE_AVAILABILITY_BIND";
pub const DATA_DIR_ENV: &str = "GARAGE_AVAILABILITY_DATA_DIR";
pub const GARAGE_ID_ENV: &str = "GARAGE_AVAILABILITY_GARAGE_ID";
pub const CORS_ORIGIN_ENV: &str = "GARAGE_AVAILABILITY_CORS_ORIGIN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_address: String,
    pub data_directory: PathBuf,
    pub garage_id: String,
    pub cors_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            data_directory: DataConnection::default_directory(),
            garage_id: "default".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_FILE_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(bind_address) = lookup(BIND_ENV) {
            config.bind_address = bind_address;
        }
        if let Some(data_directory) = lookup(DATA_DIR_ENV) {
            config.data_directory = PathBuf::from(data_directory);
        }
        if let Some(garage_id) = lookup(GARAGE_ID_ENV) {
            config.garage_id = garage_id;
        }
        if let Some(cors_origin) = lookup(CORS_ORIGIN_ENV) {
            config.cors_origin = cors_origin;
        }

        if config.garage_id.trim().is_empty() {
            anyhow::bail!("garage_id must not be empty");
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Reading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }
}
