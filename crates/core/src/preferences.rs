use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Units mode for provider requests and display formatting.
///
/// Controls only the provider `units` query parameter; stored snapshot
/// values are kept as returned by the provider in the requested units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, m/s.
    #[default]
    Metric,
    /// Fahrenheit, mph.
    Imperial,
    /// Kelvin, m/s.
    Standard,
}

impl Units {
    /// The provider query-parameter value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }
}

impl std::str::FromStr for Units {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            "standard" => Ok(Self::Standard),
            _ => Err(anyhow::anyhow!("Invalid units mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single-row user preferences record. Lazily created with defaults on
/// first read; at most one row is ever meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: i64,
    pub units: Units,
    pub refresh_interval_minutes: i64,
    pub last_global_sync_at: Option<DateTime<Utc>>,
}

/// Partial update for preferences. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub units: Option<Units>,
    pub refresh_interval_minutes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_round_trip_serde() {
        let json = serde_json::to_string(&Units::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
        let back: Units = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Units::Imperial);
    }

    #[test]
    fn units_rejects_unknown_mode() {
        assert!(serde_json::from_str::<Units>("\"kelvin\"").is_err());
        assert!("kelvin".parse::<Units>().is_err());
    }
}
