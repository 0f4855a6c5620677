//! Weather lookup use case

use crate::domain::weather::WeatherReport;
use crate::error::{Result, StorekeepError};
use crate::infrastructure::config::WeatherConfig;
use crate::infrastructure::{FileSystemRepository, WeatherClient, WorkspaceRepository};

/// Service for current-conditions lookups by city name
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(config: WeatherConfig) -> Result<Self> {
        Ok(WeatherService {
            client: WeatherClient::new(config)?,
        })
    }

    /// Use the workspace's weather settings when inside a workspace, defaults otherwise.
    pub fn discover() -> Result<Self> {
        let config = match FileSystemRepository::discover() {
            Ok(repo) => repo.load_config()?.weather,
            Err(StorekeepError::NotStorekeepDirectory(_)) => WeatherConfig::default(),
            Err(e) => return Err(e),
        };
        Self::new(config)
    }

    /// Geocode the city, then fetch its current conditions
    pub fn lookup(&self, city: &str) -> Result<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(StorekeepError::InvalidInput(
                "Please enter a city name to search".to_string(),
            ));
        }

        tracing::info!(city = %city, "Searching for weather");
        let location = self.client.geocode(city)?;
        let conditions = self.client.current_conditions(&location)?;

        Ok(WeatherReport {
            location,
            conditions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_lookup_combines_both_calls() {
        let mut server = Server::new();
        server
            .mock("GET", "/v1/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"results": [{"name": "Lagos", "latitude": 6.45, "longitude": 3.39, "country": "Nigeria"}]}"#,
            )
            .create();
        server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("latitude".into(), "6.45".into()),
                Matcher::UrlEncoded("longitude".into(), "3.39".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"current_weather": {"temperature": 29.1, "windspeed": 14.0, "winddirection": 200, "time": "2025-01-17T12:00"}}"#,
            )
            .create();

        let service = WeatherService::new(WeatherConfig {
            geocoding_url: format!("{}/v1/search", server.url()),
            forecast_url: format!("{}/v1/forecast", server.url()),
            initial_delay_ms: 0,
            ..WeatherConfig::default()
        })
        .unwrap();

        let report = service.lookup("  Lagos ").unwrap();
        assert_eq!(report.location.display_name(), "Lagos, Nigeria");
        assert_eq!(report.conditions.temperature, 29.1);
        assert_eq!(report.conditions.wind_direction(), "S");
    }

    #[test]
    fn test_empty_city_is_invalid() {
        let service = WeatherService::new(WeatherConfig::default()).unwrap();
        assert!(matches!(
            service.lookup("   "),
            Err(StorekeepError::InvalidInput(_))
        ));
    }
}
