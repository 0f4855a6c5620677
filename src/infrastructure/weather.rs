//! Open-Meteo HTTP client with retry

use crate::domain::weather::{CurrentConditions, Location};
use crate::error::{Result, StorekeepError};
use crate::infrastructure::config::WeatherConfig;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<Location>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentConditions>,
}

/// Failure of a single request attempt
enum AttemptError {
    /// Worth retrying: transport failures, 5xx, 429
    Transient(String),
    Fatal(StorekeepError),
}

pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| StorekeepError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(WeatherClient { client, config })
    }

    /// Delay before retry number `retry` (0-based): initial, 2x, 4x, ...
    fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u64.saturating_pow(retry);
        Duration::from_millis(self.config.initial_delay_ms.saturating_mul(factor))
    }

    /// Resolve a city name to its first geocoding match
    pub fn geocode(&self, city: &str) -> Result<Location> {
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];
        let response: GeocodingResponse = self.get_json(&self.config.geocoding_url, &query)?;

        response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| StorekeepError::LocationNotFound(city.to_string()))
    }

    pub fn current_conditions(&self, location: &Location) -> Result<CurrentConditions> {
        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("temperature_unit", "celsius".to_string()),
            ("wind_speed_unit", "kmh".to_string()),
            ("timezone", "auto".to_string()),
        ];
        let response: ForecastResponse = self.get_json(&self.config.forecast_url, &query)?;

        response.current_weather.ok_or_else(|| {
            StorekeepError::WeatherService(
                "Could not retrieve current weather data for this location".to_string(),
            )
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let max_retries = self.config.max_retries;
        let mut retry = 0;

        loop {
            match self.attempt(url, query) {
                Ok(value) => return Ok(value),
                Err(AttemptError::Fatal(e)) => return Err(e),
                Err(AttemptError::Transient(message)) => {
                    if retry >= max_retries {
                        tracing::error!(url = %url, attempts = retry + 1, error = %message, "Giving up on request");
                        return Err(StorekeepError::Network(message));
                    }

                    let delay = self.backoff(retry);
                    tracing::warn!(
                        attempt = retry + 1,
                        max_retries = max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %message,
                        "Request failed, retrying"
                    );
                    std::thread::sleep(delay);
                    retry += 1;
                }
            }
        }
    }

    fn attempt<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, AttemptError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| AttemptError::Transient(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AttemptError::Transient(format!("HTTP status {}", status)));
        }
        if !status.is_success() {
            return Err(AttemptError::Fatal(StorekeepError::WeatherService(format!(
                "Failed to fetch data. Status code: {}",
                status.as_u16()
            ))));
        }

        response.json::<T>().map_err(|e| {
            AttemptError::Fatal(StorekeepError::WeatherService(format!(
                "Unexpected response: {}",
                e
            )))
        })
    }
}
