//! Error types for storekeep

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for storekeep application
#[derive(Debug, Error)]
pub enum StorekeepError {
    #[error("Not a storekeep directory: {0}")]
    NotStorekeepDirectory(PathBuf),

    #[error("Unknown {kind} ID: {id}")]
    RecordNotFound { kind: &'static str, id: u64 },

    #[error("Unknown {kind}: '{name}'")]
    NameNotFound { kind: &'static str, name: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid PIN")]
    Authentication,

    #[error("Could not save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("City '{0}' not found")]
    LocationNotFound(String),

    #[error("Network error: could not reach the weather service ({0})")]
    Network(String),

    #[error("Weather service error: {0}")]
    WeatherService(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StorekeepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StorekeepError::NotStorekeepDirectory(_) => 2,
            StorekeepError::RecordNotFound { .. }
            | StorekeepError::NameNotFound { .. }
            | StorekeepError::LocationNotFound(_) => 3,
            StorekeepError::InvalidInput(_) | StorekeepError::Rejected(_) => 4,
            StorekeepError::Authentication => 5,
            StorekeepError::Save { .. } => 6,
            StorekeepError::Network(_) | StorekeepError::WeatherService(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StorekeepError::NotStorekeepDirectory(path) => {
                format!(
                    "Not a storekeep directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'storekeep init' in this directory to create a new workspace\n\
                    • Navigate to an existing storekeep directory\n\
                    • Set STOREKEEP_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            StorekeepError::RecordNotFound { kind, id } => {
                format!(
                    "Unknown {} ID: {}\n\n\
                    Nothing was changed. List the existing records and try again.",
                    kind, id
                )
            }
            StorekeepError::Save { path, source } => {
                format!(
                    "Could not save {}: {}\n\n\
                    The change was NOT recorded. Check disk space and permissions, then retry.",
                    path.display(),
                    source
                )
            }
            StorekeepError::Network(msg) => {
                format!(
                    "Network error: could not reach the weather service ({})\n\n\
                    Suggestions:\n\
                    • Check your internet connection\n\
                    • Check 'storekeep config weather.geocoding_url' and 'weather.forecast_url'",
                    msg
                )
            }
            StorekeepError::LocationNotFound(city) => {
                format!("City '{}' not found. Please check the spelling.", city)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StorekeepError
pub type Result<T> = std::result::Result<T, StorekeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_storekeep_directory_suggestion() {
        let err = StorekeepError::NotStorekeepDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("storekeep init"));
        assert!(msg.contains("STOREKEEP_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_save_error_says_not_recorded() {
        let err = StorekeepError::Save {
            path: PathBuf::from("inventory_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Could not save inventory_data.json"));
        assert!(msg.contains("NOT recorded"));
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_record_not_found_message() {
        let err = StorekeepError::RecordNotFound {
            kind: "doctor",
            id: 7,
        };
        assert_eq!(err.to_string(), "Unknown doctor ID: 7");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_location_not_found_is_distinct_from_network() {
        let missing = StorekeepError::LocationNotFound("Atlantis".to_string());
        let network = StorekeepError::Network("timed out".to_string());
        assert_eq!(missing.exit_code(), 3);
        assert_eq!(network.exit_code(), 7);
        assert!(missing.display_with_suggestions().contains("check the spelling"));
        assert!(network
            .display_with_suggestions()
            .contains("internet connection"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = StorekeepError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad key");
        assert_eq!(err.exit_code(), 1);
    }
}
