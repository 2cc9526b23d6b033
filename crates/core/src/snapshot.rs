use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::weather::WeatherReading;

/// One immutable point-in-time weather reading tied to a location.
///
/// Rows are append-only: every sync inserts a new snapshot and never updates
/// or deletes prior ones (beyond the per-location retention cap). The
/// snapshot with the maximum id per location is that location's "latest
/// weather".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub id: i64,
    pub location_id: i64,
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub description: String,
    pub icon: String,
    pub humidity: Option<i64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<i64>,
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for a snapshot, built from a normalized provider reading.
#[derive(Debug, Clone)]
pub struct NewSnapshot {
    pub location_id: i64,
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub description: String,
    pub icon: String,
    pub humidity: Option<i64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<i64>,
}

impl NewSnapshot {
    /// Builds an insert payload from a normalized reading.
    #[must_use]
    pub fn from_reading(location_id: i64, reading: &WeatherReading) -> Self {
        Self {
            location_id,
            temp: reading.temp,
            feels_like: Some(reading.feels_like),
            description: reading.description.clone(),
            icon: reading.icon.clone(),
            humidity: Some(reading.humidity),
            wind_speed: Some(reading.wind_speed),
            pressure: Some(reading.pressure),
        }
    }
}
