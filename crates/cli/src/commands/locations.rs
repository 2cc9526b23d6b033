use anyhow::Result;
use skywatch_core::LocationWithWeather;
use skywatch_storage::SqliteStore;

use crate::{ensure_db_dir, get_db_path};

/// Prints stored locations with their latest weather. Reads storage
/// directly; no provider credential required.
pub(crate) async fn run() -> Result<()> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store = SqliteStore::new(&db_path, skywatch_core::DEFAULT_SNAPSHOT_RETENTION).await?;

    let locations = store.list_locations().await?;
    let mut latest = store.latest_snapshots().await?;
    let listed: Vec<LocationWithWeather> = locations
        .into_iter()
        .map(|location| {
            let latest_weather = latest.remove(&location.id);
            LocationWithWeather { location, latest_weather }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&listed)?);
    Ok(())
}
