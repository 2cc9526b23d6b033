use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use skywatch_core::{Forecast, Location, LocationInput, LocationUpdate, LocationWithWeather};

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{MessageResponse, UnitsQuery};

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LocationWithWeather>>, ApiError> {
    Ok(Json(state.location_service.list_with_weather().await?))
}

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LocationInput>,
) -> Result<(StatusCode, Json<LocationWithWeather>), ApiError> {
    // The initial fetch uses the stored units preference.
    let units = state.preferences_service.get().await?.units;
    let created = state.location_service.create(&input, units).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<LocationUpdate>,
) -> Result<Json<Location>, ApiError> {
    Ok(Json(state.location_service.update(id, &update).await?))
}

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.location_service.delete(id).await?;
    Ok(Json(MessageResponse { message: "Location deleted successfully".to_owned() }))
}

pub async fn location_forecast(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<UnitsQuery>,
) -> Result<Json<Forecast>, ApiError> {
    let units = match query.units {
        Some(units) => units,
        None => state.preferences_service.get().await?.units,
    };
    Ok(Json(state.location_service.forecast_for(id, units).await?))
}
