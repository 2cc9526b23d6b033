use serde::{Deserialize, Serialize};

/// A normalized weather reading, flattened from the provider's nested
/// response shape. Identical whether it came from the current-conditions
/// endpoint or one entry of a forecast list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub temp: f64,
    pub feels_like: f64,
    pub description: String,
    pub icon: String,
    pub humidity: i64,
    pub wind_speed: f64,
    pub pressure: i64,
    /// Provider reading time, unix seconds.
    pub dt: i64,
    /// Human-readable reading time, present on forecast entries only.
    #[serde(rename = "dt_txt", skip_serializing_if = "Option::is_none")]
    pub dt_txt: Option<String>,
}

/// City metadata resolved by the provider alongside a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCity {
    pub name: String,
    pub country: String,
    pub coord: Coordinates,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A 5-day/3-hour forecast: normalized entries plus resolved city metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub list: Vec<WeatherReading>,
    pub city: ForecastCity,
}
