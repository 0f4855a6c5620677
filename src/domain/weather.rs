//! Weather lookup value types

use serde::Deserialize;

const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Convert a wind bearing in degrees to one of eight compass points.
pub fn cardinal_direction(degrees: f64) -> &'static str {
    let index = (degrees / 45.0).round().rem_euclid(8.0) as usize;
    DIRECTIONS[index % DIRECTIONS.len()]
}

/// First geocoding match for a city name
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Location {
    /// "City, Region, Country", skipping missing parts
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin1) = self.admin1.as_deref().filter(|s| !s.is_empty()) {
            parts.push(admin1);
        }
        if let Some(country) = self.country.as_deref().filter(|s| !s.is_empty()) {
            parts.push(country);
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentConditions {
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    pub windspeed: f64,
    pub winddirection: f64,
    /// ISO-8601 local time of the observation
    pub time: String,
}

impl CurrentConditions {
    pub fn wind_direction(&self) -> &'static str {
        cardinal_direction(self.winddirection)
    }

    pub fn updated_at(&self) -> String {
        self.time.replace('T', " ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub conditions: CurrentConditions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_direction() {
        assert_eq!(cardinal_direction(0.0), "N");
        assert_eq!(cardinal_direction(22.0), "N");
        assert_eq!(cardinal_direction(23.0), "NE");
        assert_eq!(cardinal_direction(90.0), "E");
        assert_eq!(cardinal_direction(225.0), "SW");
        assert_eq!(cardinal_direction(350.0), "N");
        assert_eq!(cardinal_direction(360.0), "N");
    }

    #[test]
    fn test_display_name_skips_missing_parts() {
        let mut location = Location {
            name: "Paris".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            admin1: Some("Île-de-France".to_string()),
            country: Some("France".to_string()),
        };
        assert_eq!(location.display_name(), "Paris, Île-de-France, France");

        location.admin1 = None;
        assert_eq!(location.display_name(), "Paris, France");
    }

    #[test]
    fn test_updated_at_replaces_t() {
        let conditions = CurrentConditions {
            temperature: 12.3,
            windspeed: 8.0,
            winddirection: 180.0,
            time: "2025-01-17T10:00".to_string(),
        };
        assert_eq!(conditions.updated_at(), "2025-01-17 10:00");
        assert_eq!(conditions.wind_direction(), "S");
    }
}
