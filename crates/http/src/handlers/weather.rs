use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use skywatch_core::Forecast;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{ForecastQuery, SyncResponse};

/// Ad-hoc forecast lookup by city name or coordinate pair. Coordinates win
/// when both are supplied.
pub async fn forecast(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Forecast>, ApiError> {
    let units = match query.units {
        Some(units) => units,
        None => state.preferences_service.get().await?.units,
    };
    let forecast = match (query.lat, query.lon, query.city.as_deref()) {
        (Some(lat), Some(lon), _) => {
            state.location_service.forecast_by_coords(lat, lon, units).await?
        },
        (_, _, Some(city)) if !city.trim().is_empty() => {
            state.location_service.forecast_by_city(city.trim(), units).await?
        },
        _ => {
            return Err(ApiError::BadRequest("city or coordinates are required".to_owned()));
        },
    };
    Ok(Json(forecast))
}

/// Syncs every stored location; per-location failures are reported, never
/// fatal to the batch.
pub async fn sync_all(State(state): State<Arc<AppState>>) -> Result<Json<SyncResponse>, ApiError> {
    let units = state.preferences_service.get().await?.units;
    let report = state.location_service.sync_all(units).await?;
    let message = if report.results.is_empty() {
        "No locations to sync".to_owned()
    } else {
        "Sync completed".to_owned()
    };
    Ok(Json(SyncResponse { message, results: report.results, timestamp: report.timestamp }))
}
