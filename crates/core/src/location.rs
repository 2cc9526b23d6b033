use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snapshot::WeatherSnapshot;

/// A saved city. Identity is the row id; `(name)` and `(lat, lon)` are used
/// for approximate-duplicate detection on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Whether this location refers to the same place as `(name, lat, lon)`.
    ///
    /// Same place = exact (case-sensitive) name match, or both coordinate
    /// deltas within [`crate::DUPLICATE_COORD_EPSILON`] degrees.
    #[must_use]
    pub fn is_same_place(&self, name: &str, lat: f64, lon: f64) -> bool {
        self.name == name
            || ((self.lat - lat).abs() <= crate::DUPLICATE_COORD_EPSILON
                && (self.lon - lon).abs() <= crate::DUPLICATE_COORD_EPSILON)
    }
}

/// Input for creating a location. Coordinates are resolved by geocoding,
/// never supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationInput {
    pub name: String,
    pub country: String,
}

/// Partial update for a location. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub is_favorite: Option<bool>,
    pub name: Option<String>,
}

/// A location joined to its most recent snapshot (`None` when the location
/// has never been synced).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationWithWeather {
    #[serde(flatten)]
    pub location: Location,
    pub latest_weather: Option<WeatherSnapshot>,
}
