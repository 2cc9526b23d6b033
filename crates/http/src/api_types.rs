//! Request/response DTOs for the HTTP surface. JSON field names are
//! camelCase — this is the stable wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skywatch_core::Units;
use skywatch_service::SyncResult;

/// Optional units override for forecast endpoints. Falls back to the stored
/// preferences when absent.
#[derive(Debug, Deserialize)]
pub struct UnitsQuery {
    pub units: Option<Units>,
}

/// Query for the ad-hoc forecast endpoint: a city name, or a full
/// coordinate pair.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub units: Option<Units>,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Aggregate sync-all response: per-location status entries (order
/// unspecified) and the completion time.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub message: String,
    pub results: Vec<SyncResult>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use skywatch_core::{Location, LocationWithWeather};
    use skywatch_service::SyncStatus;

    #[test]
    fn location_with_weather_serializes_flat_camel_case() {
        let entry = LocationWithWeather {
            location: Location {
                id: 1,
                name: "London".to_owned(),
                country: "GB".to_owned(),
                lat: 51.5,
                lon: -0.12,
                is_favorite: true,
                created_at: Utc::now(),
            },
            latest_weather: None,
        };
        let value = serde_json::to_value(&entry).unwrap();
        // Location fields are flattened to the top level, camelCased.
        assert_eq!(value["name"], "London");
        assert_eq!(value["isFavorite"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value["latestWeather"].is_null());
    }

    #[test]
    fn sync_response_matches_wire_contract() {
        let response = SyncResponse {
            message: "Sync completed".to_owned(),
            results: vec![
                SyncResult { id: 1, status: SyncStatus::Success },
                SyncResult { id: 2, status: SyncStatus::Error },
            ],
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["results"][0]["status"], "success");
        assert_eq!(value["results"][1]["status"], "error");
        assert_eq!(value["results"][1]["id"], 2);
    }
}
