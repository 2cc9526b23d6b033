//! Raw provider response shapes and their normalization.
//!
//! The provider nests readings under `main`, `weather[0]`, and `wind`;
//! normalization flattens them into [`WeatherReading`]. The same mapping is
//! applied to current-conditions responses and to every entry of a forecast
//! list.

use serde::Deserialize;
use skywatch_core::{Coordinates, Forecast, ForecastCity, WeatherReading};

use crate::error::ProviderError;

/// One raw reading: a current-conditions body or one forecast list entry.
#[derive(Debug, Deserialize)]
pub(crate) struct RawReading {
    pub main: RawMain,
    pub weather: Vec<RawCondition>,
    pub wind: RawWind,
    pub dt: i64,
    pub dt_txt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pressure: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWind {
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawForecast {
    pub list: Vec<RawReading>,
    pub city: RawCity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCity {
    pub name: String,
    pub country: String,
    pub coord: Coordinates,
}

/// One geocoding match.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGeoEntry {
    pub lat: f64,
    pub lon: f64,
}

/// Flattens one raw reading. Fails only on shape violations the type system
/// cannot rule out (empty `weather` array).
pub(crate) fn normalize_reading(raw: RawReading) -> Result<WeatherReading, ProviderError> {
    let condition = raw
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::MalformedResponse("empty weather array".to_owned()))?;
    Ok(WeatherReading {
        temp: raw.main.temp,
        feels_like: raw.main.feels_like,
        description: condition.description,
        icon: condition.icon,
        humidity: raw.main.humidity,
        wind_speed: raw.wind.speed,
        pressure: raw.main.pressure,
        dt: raw.dt,
        dt_txt: raw.dt_txt,
    })
}

/// Normalizes every entry of a forecast response, keeping the resolved city
/// metadata.
pub(crate) fn normalize_forecast(raw: RawForecast) -> Result<Forecast, ProviderError> {
    let list = raw
        .list
        .into_iter()
        .map(normalize_reading)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Forecast {
        list,
        city: ForecastCity {
            name: raw.city.name,
            country: raw.city.country,
            coord: raw.city.coord,
        },
    })
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use super::*;

    #[test]
    fn normalizes_current_reading() {
        let raw: RawReading = serde_json::from_str(
            r#"{
                "main": {"temp": 25, "feels_like": 27, "humidity": 60, "pressure": 1013},
                "weather": [{"description": "sunny", "icon": "01d"}],
                "wind": {"speed": 5},
                "dt": 123456789
            }"#,
        )
        .unwrap();

        let reading = normalize_reading(raw).unwrap();
        assert_eq!(reading.temp, 25.0);
        assert_eq!(reading.feels_like, 27.0);
        assert_eq!(reading.description, "sunny");
        assert_eq!(reading.icon, "01d");
        assert_eq!(reading.humidity, 60);
        assert_eq!(reading.wind_speed, 5.0);
        assert_eq!(reading.pressure, 1013);
        assert_eq!(reading.dt, 123_456_789);
        assert!(reading.dt_txt.is_none());
    }

    #[test]
    fn empty_weather_array_is_malformed() {
        let raw: RawReading = serde_json::from_str(
            r#"{
                "main": {"temp": 1, "feels_like": 1, "humidity": 1, "pressure": 1},
                "weather": [],
                "wind": {"speed": 0},
                "dt": 0
            }"#,
        )
        .unwrap();
        assert!(matches!(
            normalize_reading(raw),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn normalizes_forecast_entries_identically_to_current() {
        let raw: RawForecast = serde_json::from_str(
            r#"{
                "list": [
                    {
                        "main": {"temp": 12.5, "feels_like": 11.0, "humidity": 70, "pressure": 1001},
                        "weather": [{"description": "light rain", "icon": "10d"}],
                        "wind": {"speed": 3.2},
                        "dt": 1700000000,
                        "dt_txt": "2023-11-14 22:13:20"
                    },
                    {
                        "main": {"temp": 13.0, "feels_like": 12.0, "humidity": 65, "pressure": 1003},
                        "weather": [{"description": "overcast clouds", "icon": "04d"}],
                        "wind": {"speed": 4.0},
                        "dt": 1700010800,
                        "dt_txt": "2023-11-15 01:13:20"
                    }
                ],
                "city": {
                    "name": "London",
                    "country": "GB",
                    "coord": {"lat": 51.5074, "lon": -0.1278}
                }
            }"#,
        )
        .unwrap();

        let forecast = normalize_forecast(raw).unwrap();
        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.list[0].description, "light rain");
        assert_eq!(forecast.list[0].dt_txt.as_deref(), Some("2023-11-14 22:13:20"));
        assert_eq!(forecast.city.name, "London");
        assert_eq!(forecast.city.coord.lat, 51.5074);
    }
}
