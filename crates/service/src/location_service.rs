use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use skywatch_core::{
    Forecast, Location, LocationInput, LocationUpdate, LocationWithWeather, NewSnapshot, Units,
    WeatherSnapshot,
};
use skywatch_provider::WeatherProvider;
use skywatch_storage::SqliteStore;

use crate::error::{FieldError, ServiceError};

type Result<T> = std::result::Result<T, ServiceError>;

/// Per-location outcome of a sync-all run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Success,
    Error,
}

/// One entry of a sync-all report.
#[derive(Debug, Clone, Serialize)]
pub struct SyncResult {
    pub id: i64,
    pub status: SyncStatus,
}

/// Aggregate result of a sync-all run. Entry order is unspecified; callers
/// look up status per id.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub results: Vec<SyncResult>,
    pub timestamp: DateTime<Utc>,
}

/// Locations and their weather snapshots: create with geocoding and
/// duplicate detection, list with latest readings, and provider sync.
pub struct LocationService {
    store: SqliteStore,
    provider: Arc<dyn WeatherProvider>,
}

impl LocationService {
    #[must_use]
    pub fn new(store: SqliteStore, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { store, provider }
    }

    /// Creates a location from a city/country pair.
    ///
    /// Geocodes the pair (failing with not-found on zero matches), rejects
    /// near-duplicates of stored locations, inserts the row, then attempts
    /// an initial weather fetch. The fetch is non-fatal: on failure the
    /// location is returned with `latest_weather: None`.
    pub async fn create(&self, input: &LocationInput, units: Units) -> Result<LocationWithWeather> {
        let name = input.name.trim();
        let country = input.country.trim();
        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(FieldError { field: "name", message: "city name is required".to_owned() });
        }
        if country.is_empty() {
            errors.push(FieldError {
                field: "country",
                message: "country name is required".to_owned(),
            });
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let coords = self.provider.geocode(name, country).await?;

        // Name comparison is exact and case-sensitive.
        for existing in self.store.list_locations().await? {
            if existing.is_same_place(name, coords.lat, coords.lon) {
                return Err(ServiceError::Conflict { id: existing.id, name: existing.name });
            }
        }

        let location = self.store.insert_location(name, country, coords.lat, coords.lon).await?;
        tracing::info!(id = location.id, name = %location.name, "location created");

        let latest_weather =
            match self.provider.current_by_coords(coords.lat, coords.lon, units).await {
                Ok(reading) => Some(
                    self.store
                        .insert_snapshot(&NewSnapshot::from_reading(location.id, &reading))
                        .await?,
                ),
                Err(e) => {
                    tracing::warn!(
                        id = location.id,
                        error = %e,
                        "initial weather fetch failed, location created without snapshot"
                    );
                    None
                },
            };

        Ok(LocationWithWeather { location, latest_weather })
    }

    /// All locations, each with its single most recent snapshot (or `None`).
    pub async fn list_with_weather(&self) -> Result<Vec<LocationWithWeather>> {
        let locations = self.store.list_locations().await?;
        let mut latest = self.store.latest_snapshots().await?;
        Ok(locations
            .into_iter()
            .map(|location| {
                let latest_weather = latest.remove(&location.id);
                LocationWithWeather { location, latest_weather }
            })
            .collect())
    }

    /// Applies a partial update (favorite flag, rename).
    pub async fn update(&self, id: i64, update: &LocationUpdate) -> Result<Location> {
        Ok(self.store.update_location(id, update).await?)
    }

    /// Deletes a location; storage cascades to its snapshots.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete_location(id).await?;
        tracing::info!(id, "location deleted");
        Ok(())
    }

    /// Fetches current weather for one location and appends a snapshot.
    /// Prior snapshots are never touched.
    pub async fn sync_one(&self, location: &Location, units: Units) -> Result<WeatherSnapshot> {
        let reading = self.provider.current_by_coords(location.lat, location.lon, units).await?;
        Ok(self.store.insert_snapshot(&NewSnapshot::from_reading(location.id, &reading)).await?)
    }

    /// Syncs every stored location, isolating per-location failures.
    ///
    /// Provider fetches run concurrently; one failed location never aborts
    /// the batch. Records the completion time as the last global sync.
    pub async fn sync_all(&self, units: Units) -> Result<SyncReport> {
        let locations = self.store.list_locations().await?;
        if locations.is_empty() {
            return Ok(SyncReport { results: Vec::new(), timestamp: Utc::now() });
        }

        let fetches = locations.iter().map(|location| {
            let provider = Arc::clone(&self.provider);
            let (id, lat, lon) = (location.id, location.lat, location.lon);
            async move { (id, provider.current_by_coords(lat, lon, units).await) }
        });
        let outcomes = futures_util::future::join_all(fetches).await;

        let mut results = Vec::with_capacity(outcomes.len());
        for (id, outcome) in outcomes {
            let status = match outcome {
                Ok(reading) => {
                    match self.store.insert_snapshot(&NewSnapshot::from_reading(id, &reading)).await
                    {
                        Ok(_) => SyncStatus::Success,
                        Err(e) => {
                            tracing::warn!(location_id = id, error = %e, "snapshot insert failed");
                            SyncStatus::Error
                        },
                    }
                },
                Err(e) => {
                    tracing::warn!(location_id = id, error = %e, "weather fetch failed");
                    SyncStatus::Error
                },
            };
            results.push(SyncResult { id, status });
        }

        let timestamp = Utc::now();
        self.store.set_last_global_sync(timestamp).await?;
        let failed = results.iter().filter(|r| r.status == SyncStatus::Error).count();
        tracing::info!(total = results.len(), failed, "sync-all completed");

        Ok(SyncReport { results, timestamp })
    }

    /// Forecast for a stored location's coordinates.
    pub async fn forecast_for(&self, id: i64, units: Units) -> Result<Forecast> {
        let location = self.store.get_location(id).await?;
        Ok(self.provider.forecast_by_coords(location.lat, location.lon, units).await?)
    }

    /// Ad-hoc forecast for a city name (not necessarily a stored location).
    pub async fn forecast_by_city(&self, city: &str, units: Units) -> Result<Forecast> {
        Ok(self.provider.forecast_by_city(city, units).await?)
    }

    /// Ad-hoc forecast for a coordinate pair.
    pub async fn forecast_by_coords(&self, lat: f64, lon: f64, units: Units) -> Result<Forecast> {
        Ok(self.provider.forecast_by_coords(lat, lon, units).await?)
    }
}
