use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the data folder created inside the user's documents directory
const DEFAULT_DIRECTORY_NAME: &str = "Garage Availability";

/// DataConnection manages the data directory and per-garage paths
#[derive(Clone, Debug)]
pub struct DataConnection {
    base_directory: PathBuf,
}

impl DataConnection {
    /// Create a new connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Default data directory: ~/Documents/Garage Availability, or ./data
    /// when no documents directory can be determined
    pub fn default_directory() -> PathBuf {
        dirs::document_dir()
            .map(|documents| documents.join(DEFAULT_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Directory holding one garage's files.
    ///
    /// Garage ids become directory names, so anything that could escape the
    /// base directory is rejected.
    pub fn garage_directory(&self, garage_id: &str) -> Result<PathBuf> {
        let is_safe = !garage_id.is_empty()
            && garage_id != "."
            && garage_id != ".."
            && garage_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');

        if !is_safe {
            return Err(anyhow::anyhow!("Invalid garage id: '{}'", garage_id));
        }

        Ok(self.base_directory.join(garage_id))
    }

    /// Directory for a garage, created on demand
    pub fn ensure_garage_directory(&self, garage_id: &str) -> Result<PathBuf> {
        let dir = self.garage_directory(garage_id)?;
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            info!("Created garage directory: {}", dir.display());
        }
        Ok(dir)
    }
}
