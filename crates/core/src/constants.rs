//! Shared constants for skywatch.
//!
//! Centralizes magic numbers that would otherwise be duplicated across crates.

/// Two stored locations are considered the same place when both coordinate
/// deltas are within this many degrees.
pub const DUPLICATE_COORD_EPSILON: f64 = 0.1;

/// Lower bound for the preferences refresh interval, in minutes.
pub const MIN_REFRESH_INTERVAL_MINUTES: i64 = 5;

/// Upper bound for the preferences refresh interval, in minutes (one day).
pub const MAX_REFRESH_INTERVAL_MINUTES: i64 = 1440;

/// Default refresh interval when preferences are first created.
pub const DEFAULT_REFRESH_INTERVAL_MINUTES: i64 = 30;

/// Default number of snapshots retained per location. Older rows are pruned
/// after each insert; history never grows unbounded.
pub const DEFAULT_SNAPSHOT_RETENTION: u32 = 100;

/// SQLite connection pool: maximum connections.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 5;

/// SQLite connection pool: acquire timeout in seconds.
pub const DB_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Per-call timeout for provider HTTP requests, in seconds. A timed-out
/// fetch counts as a sync failure for that location only.
pub const PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Default base URL for the weather API.
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default base URL for the geocoding API.
pub const DEFAULT_GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
