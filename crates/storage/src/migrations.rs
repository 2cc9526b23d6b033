//! SQLite schema migrations for skywatch storage.

use anyhow::Result;
use sqlx::SqlitePool;

/// Run all migrations. Idempotent: safe to call on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            country TEXT NOT NULL,
            lat REAL NOT NULL,
            lon REAL NOT NULL,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weather_snapshots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            location_id INTEGER NOT NULL
                REFERENCES locations(id) ON DELETE CASCADE,
            temp REAL NOT NULL,
            feels_like REAL,
            description TEXT NOT NULL,
            icon TEXT NOT NULL,
            humidity INTEGER,
            wind_speed REAL,
            pressure INTEGER,
            timestamp TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_snapshots_location ON weather_snapshots (location_id)",
    )
    .execute(pool)
    .await?;

    // Fixed-key single-row table: concurrent get-or-create cannot produce a
    // second row.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_preferences (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            units TEXT NOT NULL DEFAULT 'metric',
            refresh_interval_minutes INTEGER NOT NULL DEFAULT 30,
            last_global_sync_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
