use std::sync::Arc;

use anyhow::Result;
use skywatch_core::AppConfig;
use skywatch_provider::{OpenWeatherClient, WeatherProvider};
use skywatch_service::{LocationService, PreferencesService};
use skywatch_storage::SqliteStore;

use crate::{ensure_db_dir, get_db_path};

/// One-off sync of every stored location, printing the per-location report.
pub(crate) async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store = SqliteStore::new(&db_path, config.snapshot_retention).await?;

    let provider: Arc<dyn WeatherProvider> = Arc::new(OpenWeatherClient::new(&config)?);
    let preferences = PreferencesService::new(store.clone());
    let locations = LocationService::new(store, provider);

    let units = preferences.get().await?.units;
    let report = locations.sync_all(units).await?;
    println!("{}", serde_json::to_string_pretty(&report.results)?);
    Ok(())
}
