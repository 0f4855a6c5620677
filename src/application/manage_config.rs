//! Config management use case

use crate::error::{Result, StorekeepError};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};

/// Every key `get` understands, in listing order
pub const CONFIG_KEYS: [&str; 11] = [
    "created",
    "files.hospital",
    "files.inventory",
    "files.finance",
    "files.atm",
    "files.library",
    "weather.geocoding_url",
    "weather.forecast_url",
    "weather.max_retries",
    "weather.initial_delay_ms",
    "weather.timeout_seconds",
];

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        read_key(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "created" => {
                return Err(StorekeepError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            "files.hospital" => config.files.hospital = file_name(value)?,
            "files.inventory" => config.files.inventory = file_name(value)?,
            "files.finance" => config.files.finance = file_name(value)?,
            "files.atm" => config.files.atm = file_name(value)?,
            "files.library" => config.files.library = file_name(value)?,
            "weather.geocoding_url" => config.weather.geocoding_url = value.to_string(),
            "weather.forecast_url" => config.weather.forecast_url = value.to_string(),
            "weather.max_retries" => config.weather.max_retries = number(key, value)?,
            "weather.initial_delay_ms" => config.weather.initial_delay_ms = number(key, value)?,
            "weather.timeout_seconds" => config.weather.timeout_seconds = number(key, value)?,
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values as key/value pairs
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| Ok((*key, read_key(&config, key)?)))
            .collect()
    }
}

fn read_key(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "created" => config.created.to_rfc3339(),
        "files.hospital" => config.files.hospital.clone(),
        "files.inventory" => config.files.inventory.clone(),
        "files.finance" => config.files.finance.clone(),
        "files.atm" => config.files.atm.clone(),
        "files.library" => config.files.library.clone(),
        "weather.geocoding_url" => config.weather.geocoding_url.clone(),
        "weather.forecast_url" => config.weather.forecast_url.clone(),
        "weather.max_retries" => config.weather.max_retries.to_string(),
        "weather.initial_delay_ms" => config.weather.initial_delay_ms.to_string(),
        "weather.timeout_seconds" => config.weather.timeout_seconds.to_string(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

fn unknown_key(key: &str) -> StorekeepError {
    StorekeepError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn file_name(value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StorekeepError::Config(
            "Data file name cannot be empty".to_string(),
        ));
    }
    Ok(value.to_string())
}

fn number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| StorekeepError::Config(format!("'{}' expects a whole number, got '{}'", key, value)))
}
