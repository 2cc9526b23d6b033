use axum::{Json, extract::State};
use std::sync::Arc;

use skywatch_core::{PreferencesUpdate, UserPreferences};

use crate::AppState;
use crate::api_error::ApiError;

pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
) -> Result<Json<UserPreferences>, ApiError> {
    Ok(Json(state.preferences_service.get().await?))
}

pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Json(update): Json<PreferencesUpdate>,
) -> Result<Json<UserPreferences>, ApiError> {
    Ok(Json(state.preferences_service.update(&update).await?))
}
