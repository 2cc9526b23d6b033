//! Runtime configuration, built from environment variables at startup and
//! injected into services at construction. No ambient global state.

use crate::constants::{
    DEFAULT_GEO_BASE_URL, DEFAULT_SNAPSHOT_RETENTION, DEFAULT_WEATHER_BASE_URL,
    PROVIDER_TIMEOUT_SECS,
};
use crate::env_config::env_parse_with_default;

/// Provider and storage configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Weather API credential. Required: the provider client fails fast
    /// without one — there is no synthetic-data fallback.
    pub api_key: String,
    /// Base URL of the weather API (current + forecast endpoints).
    pub weather_base_url: String,
    /// Base URL of the geocoding API.
    pub geo_base_url: String,
    /// Per-call timeout for provider requests, in seconds.
    pub provider_timeout_secs: u64,
    /// Snapshots retained per location; older rows are pruned on insert.
    pub snapshot_retention: u32,
}

impl AppConfig {
    /// Builds the configuration from the environment.
    ///
    /// # Errors
    /// Returns an error when no API key is configured
    /// (`SKYWATCH_API_KEY` or `OPENWEATHER_API_KEY`).
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("SKYWATCH_API_KEY")
            .or_else(|_| std::env::var("OPENWEATHER_API_KEY"))
            .map_err(|_| {
                anyhow::anyhow!(
                    "SKYWATCH_API_KEY or OPENWEATHER_API_KEY environment variable must be set"
                )
            })?;
        if api_key.trim().is_empty() {
            anyhow::bail!("weather API key is empty");
        }
        Ok(Self {
            api_key,
            weather_base_url: std::env::var("SKYWATCH_WEATHER_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_BASE_URL.to_owned()),
            geo_base_url: std::env::var("SKYWATCH_GEO_URL")
                .unwrap_or_else(|_| DEFAULT_GEO_BASE_URL.to_owned()),
            provider_timeout_secs: env_parse_with_default(
                "SKYWATCH_PROVIDER_TIMEOUT_SECS",
                PROVIDER_TIMEOUT_SECS,
            ),
            snapshot_retention: env_parse_with_default(
                "SKYWATCH_SNAPSHOT_RETENTION",
                DEFAULT_SNAPSHOT_RETENTION,
            ),
        })
    }
}
