//! Weather provider client for skywatch
//!
//! Wraps the external weather/geocoding HTTP API and normalizes its nested
//! response shapes into the flat internal representation. The
//! [`WeatherProvider`] trait is the seam services program against; tests
//! substitute fakes.

mod client;
mod error;
mod response;

use async_trait::async_trait;
use skywatch_core::{Coordinates, Forecast, Units, WeatherReading};

pub use client::OpenWeatherClient;
pub use error::ProviderError;

/// External weather API surface consumed by the service layer.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a city name.
    async fn current_by_city(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherReading, ProviderError>;

    /// Current conditions for a coordinate pair.
    async fn current_by_coords(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<WeatherReading, ProviderError>;

    /// 5-day/3-hour forecast for a city name.
    async fn forecast_by_city(&self, city: &str, units: Units) -> Result<Forecast, ProviderError>;

    /// 5-day/3-hour forecast for a coordinate pair.
    async fn forecast_by_coords(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<Forecast, ProviderError>;

    /// Resolves `(city, country)` to coordinates. `NotFound` on zero results.
    async fn geocode(&self, city: &str, country: &str) -> Result<Coordinates, ProviderError>;
}
