//! SQLite store for locations, weather snapshots, and preferences.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use skywatch_core::{
    DB_POOL_ACQUIRE_TIMEOUT_SECS, DB_POOL_MAX_CONNECTIONS, DEFAULT_SNAPSHOT_RETENTION, Location,
    LocationUpdate, NewSnapshot, PreferencesUpdate, Units, UserPreferences, WeatherSnapshot,
};

use crate::error::StorageError;
use crate::migrations::run_migrations;

type Result<T> = std::result::Result<T, StorageError>;

/// Pooled SQLite storage backend.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
    /// Snapshots retained per location; older rows are pruned on insert.
    retention: u32,
}

impl SqliteStore {
    /// Opens (creating if missing) the database at `path` and runs migrations.
    pub async fn new(path: &Path, retention: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(DB_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(DB_POOL_ACQUIRE_TIMEOUT_SECS))
            .connect_with(options)
            .await?;
        Self::init(pool, retention).await
    }

    /// Opens an in-memory database. Used by tests and one-off tooling.
    ///
    /// The pool is pinned to a single connection so the database outlives
    /// individual acquires.
    pub async fn in_memory() -> Result<Self> {
        Self::in_memory_with_retention(DEFAULT_SNAPSHOT_RETENTION).await
    }

    /// In-memory database with a custom retention cap.
    pub async fn in_memory_with_retention(retention: u32) -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::init(pool, retention).await
    }

    async fn init(pool: SqlitePool, retention: u32) -> Result<Self> {
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::debug!(retention, "SqliteStore initialized");
        Ok(Self { pool, retention })
    }

    // ---- locations ----

    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        let rows = sqlx::query(
            "SELECT id, name, country, lat, lon, is_favorite, created_at
             FROM locations ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_location).collect()
    }

    pub async fn get_location(&self, id: i64) -> Result<Location> {
        let row = sqlx::query(
            "SELECT id, name, country, lat, lon, is_favorite, created_at
             FROM locations WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(r) => row_to_location(&r),
            None => Err(StorageError::NotFound { entity: "location", id: id.to_string() }),
        }
    }

    pub async fn insert_location(
        &self,
        name: &str,
        country: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Location> {
        let row = sqlx::query(
            "INSERT INTO locations (name, country, lat, lon, is_favorite, created_at)
             VALUES (?1, ?2, ?3, ?4, 0, ?5)
             RETURNING id, name, country, lat, lon, is_favorite, created_at",
        )
        .bind(name)
        .bind(country)
        .bind(lat)
        .bind(lon)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        row_to_location(&row)
    }

    /// Applies only the supplied fields; absent fields keep their value.
    pub async fn update_location(&self, id: i64, update: &LocationUpdate) -> Result<Location> {
        let row = sqlx::query(
            "UPDATE locations
             SET is_favorite = COALESCE(?1, is_favorite),
                 name = COALESCE(?2, name)
             WHERE id = ?3
             RETURNING id, name, country, lat, lon, is_favorite, created_at",
        )
        .bind(update.is_favorite)
        .bind(update.name.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(r) => row_to_location(&r),
            None => Err(StorageError::NotFound { entity: "location", id: id.to_string() }),
        }
    }

    /// Deletes the location; the `ON DELETE CASCADE` foreign key removes its
    /// snapshots in the same statement.
    pub async fn delete_location(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "location", id: id.to_string() });
        }
        Ok(())
    }

    // ---- snapshots ----

    /// Inserts a new snapshot, then prunes that location's history down to
    /// the retention cap.
    pub async fn insert_snapshot(&self, new: &NewSnapshot) -> Result<WeatherSnapshot> {
        let row = sqlx::query(
            "INSERT INTO weather_snapshots
             (location_id, temp, feels_like, description, icon, humidity,
              wind_speed, pressure, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             RETURNING id, location_id, temp, feels_like, description, icon,
                       humidity, wind_speed, pressure, timestamp",
        )
        .bind(new.location_id)
        .bind(new.temp)
        .bind(new.feels_like)
        .bind(&new.description)
        .bind(&new.icon)
        .bind(new.humidity)
        .bind(new.wind_speed)
        .bind(new.pressure)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        let snapshot = row_to_snapshot(&row)?;

        let pruned = sqlx::query(
            "DELETE FROM weather_snapshots
             WHERE location_id = ?1
               AND id NOT IN (
                   SELECT id FROM weather_snapshots
                   WHERE location_id = ?1
                   ORDER BY id DESC LIMIT ?2
               )",
        )
        .bind(new.location_id)
        .bind(i64::from(self.retention))
        .execute(&self.pool)
        .await?;
        if pruned.rows_affected() > 0 {
            tracing::debug!(
                location_id = new.location_id,
                pruned = pruned.rows_affected(),
                "pruned snapshot history"
            );
        }

        Ok(snapshot)
    }

    /// The most recent snapshot per location, keyed by location id.
    ///
    /// One pass computes the maximum snapshot id per location, a join fetches
    /// exactly those rows; no per-location scans.
    pub async fn latest_snapshots(&self) -> Result<HashMap<i64, WeatherSnapshot>> {
        let rows = sqlx::query(
            "SELECT s.id, s.location_id, s.temp, s.feels_like, s.description,
                    s.icon, s.humidity, s.wind_speed, s.pressure, s.timestamp
             FROM weather_snapshots s
             JOIN (
                 SELECT location_id, MAX(id) AS max_id
                 FROM weather_snapshots
                 GROUP BY location_id
             ) latest ON s.id = latest.max_id",
        )
        .fetch_all(&self.pool)
        .await?;
        let mut by_location = HashMap::with_capacity(rows.len());
        for row in &rows {
            let snapshot = row_to_snapshot(row)?;
            by_location.insert(snapshot.location_id, snapshot);
        }
        Ok(by_location)
    }

    /// Number of stored snapshots for one location.
    pub async fn snapshot_count(&self, location_id: i64) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM weather_snapshots WHERE location_id = ?1")
                .bind(location_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    // ---- preferences ----

    /// Returns the singleton preferences row, creating it with defaults when
    /// absent. The fixed-key insert makes concurrent first reads safe.
    pub async fn get_or_create_preferences(&self) -> Result<UserPreferences> {
        self.ensure_preferences_row().await?;
        let row = sqlx::query(
            "SELECT id, units, refresh_interval_minutes, last_global_sync_at
             FROM user_preferences WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await?;
        row_to_preferences(&row)
    }

    /// Applies only the supplied fields, creating the row with defaults first
    /// when absent. Range/enum validation happens in the service layer.
    pub async fn update_preferences(&self, update: &PreferencesUpdate) -> Result<UserPreferences> {
        self.ensure_preferences_row().await?;
        let row = sqlx::query(
            "UPDATE user_preferences
             SET units = COALESCE(?1, units),
                 refresh_interval_minutes = COALESCE(?2, refresh_interval_minutes)
             WHERE id = 1
             RETURNING id, units, refresh_interval_minutes, last_global_sync_at",
        )
        .bind(update.units.map(Units::as_str))
        .bind(update.refresh_interval_minutes)
        .fetch_one(&self.pool)
        .await?;
        row_to_preferences(&row)
    }

    /// Records the completion time of the last sync-all run.
    pub async fn set_last_global_sync(&self, at: DateTime<Utc>) -> Result<()> {
        self.ensure_preferences_row().await?;
        sqlx::query("UPDATE user_preferences SET last_global_sync_at = ?1 WHERE id = 1")
            .bind(at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ensure_preferences_row(&self) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO user_preferences (id, units, refresh_interval_minutes)
             VALUES (1, 'metric', 30)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_location(row: &SqliteRow) -> Result<Location> {
    Ok(Location {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        country: row.try_get("country")?,
        lat: row.try_get("lat")?,
        lon: row.try_get("lon")?,
        is_favorite: row.try_get("is_favorite")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_snapshot(row: &SqliteRow) -> Result<WeatherSnapshot> {
    Ok(WeatherSnapshot {
        id: row.try_get("id")?,
        location_id: row.try_get("location_id")?,
        temp: row.try_get("temp")?,
        feels_like: row.try_get("feels_like")?,
        description: row.try_get("description")?,
        icon: row.try_get("icon")?,
        humidity: row.try_get("humidity")?,
        wind_speed: row.try_get("wind_speed")?,
        pressure: row.try_get("pressure")?,
        timestamp: row.try_get("timestamp")?,
    })
}

/// Parse `Units` from its TEXT column. Unknown values (corrupt rows) warn
/// and fall back to the default instead of failing the read.
fn parse_units(s: &str) -> Units {
    Units::from_str(s).unwrap_or_else(|_| {
        tracing::warn!(invalid_units = %s, "corrupt units value in DB, defaulting to metric");
        Units::default()
    })
}

fn row_to_preferences(row: &SqliteRow) -> Result<UserPreferences> {
    let units: String = row.try_get("units")?;
    Ok(UserPreferences {
        id: row.try_get("id")?,
        units: parse_units(&units),
        refresh_interval_minutes: row.try_get("refresh_interval_minutes")?,
        last_global_sync_at: row.try_get("last_global_sync_at")?,
    })
}
