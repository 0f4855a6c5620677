//! Field validation shared by the transaction handlers

use crate::error::{Result, StorekeepError};
use chrono::Local;

/// Timestamp format stored on records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in the stored record format
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Trim a required text field, rejecting empty values.
pub fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StorekeepError::InvalidInput(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

/// Accept only finite amounts strictly greater than zero.
pub fn positive_amount(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(StorekeepError::InvalidInput(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(value)
}

/// Accept only finite amounts that are zero or positive.
pub fn non_negative_amount(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(StorekeepError::InvalidInput(format!(
            "{} must be zero or positive",
            field
        )));
    }
    Ok(value)
}

pub fn positive_count(field: &str, value: u64) -> Result<u64> {
    if value == 0 {
        return Err(StorekeepError::InvalidInput(format!(
            "{} must be positive",
            field
        )));
    }
    Ok(value)
}
