//! Configuration management

use crate::error::{Result, StorekeepError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding the workspace configuration
pub const WORKSPACE_DIR: &str = ".storekeep";
const CONFIG_FILE: &str = "config.toml";

/// Data file names, relative to the workspace root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub hospital: String,
    pub inventory: String,
    pub finance: String,
    pub atm: String,
    pub library: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        DataFiles {
            hospital: "hospital_data.json".to_string(),
            inventory: "inventory_data.json".to_string(),
            finance: "finance_data.json".to_string(),
            atm: "atm_data.json".to_string(),
            library: "library_data.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry; doubles on every further retry
    pub initial_delay_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            max_retries: 3,
            initial_delay_ms: 1000,
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub files: DataFiles,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            files: DataFiles::default(),
            weather: WeatherConfig::default(),
        }
    }

    /// Load config from .storekeep/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorekeepError::NotStorekeepDirectory(path.to_path_buf())
            } else {
                StorekeepError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| StorekeepError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .storekeep/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join(CONFIG_FILE);

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| StorekeepError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
