//! Storage tests against in-memory SQLite.

#![expect(clippy::unwrap_used, reason = "test code")]

use skywatch_core::{LocationUpdate, NewSnapshot, PreferencesUpdate, Units};

use crate::SqliteStore;

async fn create_test_store() -> SqliteStore {
    SqliteStore::in_memory().await.unwrap()
}

fn test_snapshot(location_id: i64, temp: f64) -> NewSnapshot {
    NewSnapshot {
        location_id,
        temp,
        feels_like: Some(temp + 2.0),
        description: "scattered clouds".to_owned(),
        icon: "03d".to_owned(),
        humidity: Some(60),
        wind_speed: Some(5.0),
        pressure: Some(1013),
    }
}

#[tokio::test]
async fn latest_snapshots_picks_max_id_per_location() {
    let store = create_test_store().await;
    let london = store.insert_location("London", "GB", 51.5, -0.12).await.unwrap();
    let paris = store.insert_location("Paris", "FR", 48.85, 2.35).await.unwrap();
    let unsynced = store.insert_location("Oslo", "NO", 59.91, 10.75).await.unwrap();

    store.insert_snapshot(&test_snapshot(london.id, 10.0)).await.unwrap();
    let newest_london = store.insert_snapshot(&test_snapshot(london.id, 12.0)).await.unwrap();
    let newest_paris = store.insert_snapshot(&test_snapshot(paris.id, 18.0)).await.unwrap();

    let latest = store.latest_snapshots().await.unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest.get(&london.id).unwrap().id, newest_london.id);
    assert_eq!(latest.get(&london.id).unwrap().temp, 12.0);
    assert_eq!(latest.get(&paris.id).unwrap().id, newest_paris.id);
    assert!(!latest.contains_key(&unsynced.id));
}

#[tokio::test]
async fn delete_location_cascades_to_snapshots() {
    let store = create_test_store().await;
    let doomed = store.insert_location("Berlin", "DE", 52.52, 13.4).await.unwrap();
    let kept = store.insert_location("Madrid", "ES", 40.42, -3.7).await.unwrap();
    store.insert_snapshot(&test_snapshot(doomed.id, 8.0)).await.unwrap();
    store.insert_snapshot(&test_snapshot(doomed.id, 9.0)).await.unwrap();
    store.insert_snapshot(&test_snapshot(kept.id, 21.0)).await.unwrap();

    store.delete_location(doomed.id).await.unwrap();

    assert_eq!(store.snapshot_count(doomed.id).await.unwrap(), 0);
    assert_eq!(store.snapshot_count(kept.id).await.unwrap(), 1);
    assert!(store.get_location(doomed.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn delete_unknown_location_is_not_found() {
    let store = create_test_store().await;
    assert!(store.delete_location(999).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn update_location_applies_only_supplied_fields() {
    let store = create_test_store().await;
    let loc = store.insert_location("Rome", "IT", 41.9, 12.5).await.unwrap();
    assert!(!loc.is_favorite);

    let updated = store
        .update_location(loc.id, &LocationUpdate { is_favorite: Some(true), name: None })
        .await
        .unwrap();
    assert!(updated.is_favorite);
    assert_eq!(updated.name, "Rome");

    let renamed = store
        .update_location(loc.id, &LocationUpdate { is_favorite: None, name: Some("Roma".into()) })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Roma");
    assert!(renamed.is_favorite, "rename must not reset favorite flag");

    let err = store.update_location(999, &LocationUpdate::default()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn snapshot_history_is_pruned_to_retention() {
    let store = SqliteStore::in_memory_with_retention(3).await.unwrap();
    let loc = store.insert_location("Tokyo", "JP", 35.68, 139.69).await.unwrap();

    for i in 0..5 {
        store.insert_snapshot(&test_snapshot(loc.id, f64::from(i))).await.unwrap();
    }

    assert_eq!(store.snapshot_count(loc.id).await.unwrap(), 3);
    // The survivor with the max id is the most recent insert.
    let latest = store.latest_snapshots().await.unwrap();
    assert_eq!(latest.get(&loc.id).unwrap().temp, 4.0);
}

#[tokio::test]
async fn preferences_are_created_once_with_defaults() {
    let store = create_test_store().await;

    let first = store.get_or_create_preferences().await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.units, Units::Metric);
    assert_eq!(first.refresh_interval_minutes, 30);
    assert!(first.last_global_sync_at.is_none());

    // Second read returns the same row, not a second default.
    let second = store.get_or_create_preferences().await.unwrap();
    assert_eq!(second.id, first.id);
}

#[tokio::test]
async fn update_preferences_persists_supplied_fields() {
    let store = create_test_store().await;

    let updated = store
        .update_preferences(&PreferencesUpdate {
            units: Some(Units::Imperial),
            refresh_interval_minutes: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.units, Units::Imperial);
    assert_eq!(updated.refresh_interval_minutes, 30, "unsupplied field keeps default");

    let updated = store
        .update_preferences(&PreferencesUpdate {
            units: None,
            refresh_interval_minutes: Some(60),
        })
        .await
        .unwrap();
    assert_eq!(updated.refresh_interval_minutes, 60);
    assert_eq!(updated.units, Units::Imperial, "unsupplied field keeps prior value");

    let read_back = store.get_or_create_preferences().await.unwrap();
    assert_eq!(read_back.refresh_interval_minutes, 60);
}

#[tokio::test]
async fn last_global_sync_round_trips() {
    let store = create_test_store().await;
    let at = chrono::Utc::now();
    store.set_last_global_sync(at).await.unwrap();
    let prefs = store.get_or_create_preferences().await.unwrap();
    assert_eq!(prefs.last_global_sync_at, Some(at));
}
