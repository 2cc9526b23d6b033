use async_trait::async_trait;
use serde::de::DeserializeOwned;
use skywatch_core::{AppConfig, Coordinates, Forecast, Units, WeatherReading};

use crate::error::ProviderError;
use crate::response::{
    RawForecast, RawGeoEntry, RawReading, normalize_forecast, normalize_reading,
};
use crate::WeatherProvider;

/// Client for the OpenWeatherMap-style weather and geocoding API.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    weather_base_url: String,
    geo_base_url: String,
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("api_key", &"***")
            .field("weather_base_url", &self.weather_base_url)
            .field("geo_base_url", &self.geo_base_url)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    /// Creates a client from the app configuration.
    ///
    /// # Errors
    /// `MissingCredentials` when the key is empty (fail-fast policy: no
    /// synthetic fallback data), or `ClientInit` if the HTTP client cannot
    /// be built.
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredentials);
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.provider_timeout_secs))
            .build()
            .map_err(|e| ProviderError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            weather_base_url: config.weather_base_url.trim_end_matches('/').to_owned(),
            geo_base_url: config.geo_base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Issues a GET, maps the provider's status codes, and decodes the body.
    ///
    /// 401 → `InvalidCredentials`, 404 → `NotFound`, other non-success →
    /// `Status` with the status text. Timeouts surface as `Http`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T, ProviderError> {
        tracing::debug!(url = %url, context, "provider request");
        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ProviderError::InvalidCredentials);
        }
        if status.as_u16() == 404 {
            return Err(ProviderError::NotFound(context.to_owned()));
        }
        if !status.is_success() {
            return Err(ProviderError::Status {
                code: status.as_u16(),
                text: status.canonical_reason().unwrap_or("unknown status").to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::JsonParse {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_by_city(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherReading, ProviderError> {
        let raw: RawReading = self
            .get_json(
                format!("{}/weather", self.weather_base_url),
                &[("q", city.to_owned()), ("units", units.as_str().to_owned())],
                &format!("current weather for city '{city}'"),
            )
            .await?;
        normalize_reading(raw)
    }

    async fn current_by_coords(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<WeatherReading, ProviderError> {
        let raw: RawReading = self
            .get_json(
                format!("{}/weather", self.weather_base_url),
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("units", units.as_str().to_owned()),
                ],
                &format!("current weather at ({lat}, {lon})"),
            )
            .await?;
        normalize_reading(raw)
    }

    async fn forecast_by_city(&self, city: &str, units: Units) -> Result<Forecast, ProviderError> {
        let raw: RawForecast = self
            .get_json(
                format!("{}/forecast", self.weather_base_url),
                &[("q", city.to_owned()), ("units", units.as_str().to_owned())],
                &format!("forecast for city '{city}'"),
            )
            .await?;
        normalize_forecast(raw)
    }

    async fn forecast_by_coords(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<Forecast, ProviderError> {
        let raw: RawForecast = self
            .get_json(
                format!("{}/forecast", self.weather_base_url),
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("units", units.as_str().to_owned()),
                ],
                &format!("forecast at ({lat}, {lon})"),
            )
            .await?;
        normalize_forecast(raw)
    }

    async fn geocode(&self, city: &str, country: &str) -> Result<Coordinates, ProviderError> {
        let matches: Vec<RawGeoEntry> = self
            .get_json(
                format!("{}/direct", self.geo_base_url),
                &[("q", format!("{city},{country}")), ("limit", "1".to_owned())],
                &format!("geocoding '{city}, {country}'"),
            )
            .await?;
        matches
            .first()
            .map(|entry| Coordinates { lat: entry.lat, lon: entry.lon })
            .ok_or_else(|| ProviderError::NotFound(format!("no match for '{city}, {country}'")))
    }
}
