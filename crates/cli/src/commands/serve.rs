use std::sync::Arc;

use anyhow::Result;
use skywatch_core::AppConfig;
use skywatch_http::{AppState, create_router};
use skywatch_provider::{OpenWeatherClient, WeatherProvider};
use skywatch_service::{LocationService, PreferencesService};
use skywatch_storage::SqliteStore;

use crate::{ensure_db_dir, get_db_path};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = AppConfig::from_env()?;
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store = SqliteStore::new(&db_path, config.snapshot_retention).await?;

    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(&config)?);
    let state = Arc::new(AppState {
        location_service: Arc::new(LocationService::new(store.clone(), provider)),
        preferences_service: Arc::new(PreferencesService::new(store)),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
