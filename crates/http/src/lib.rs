//! HTTP API server for skywatch.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;

use skywatch_service::{LocationService, PreferencesService};

pub use api_types::{ForecastQuery, SyncResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Locations and their weather snapshots.
    pub location_service: Arc<LocationService>,
    /// Singleton display preferences.
    pub preferences_service: Arc<PreferencesService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/locations",
            get(handlers::locations::list_locations).post(handlers::locations::create_location),
        )
        .route(
            "/locations/{id}",
            patch(handlers::locations::update_location)
                .delete(handlers::locations::delete_location),
        )
        .route("/locations/{id}/forecast", get(handlers::locations::location_forecast))
        .route(
            "/preferences",
            get(handlers::preferences::get_preferences)
                .patch(handlers::preferences::update_preferences),
        )
        .route("/weather/forecast", get(handlers::weather::forecast))
        .route("/weather/sync", post(handlers::weather::sync_all))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
