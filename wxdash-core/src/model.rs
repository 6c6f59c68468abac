use serde::{Deserialize, Serialize};

/// A non-empty, trimmed city query.
///
/// Operations taking a `CityName` cannot be called with a blank query;
/// the precondition is enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    /// Trims `raw`; returns `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic position, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized current conditions for one place. Immutable once built;
/// replaced wholesale on each successful query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub country: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    /// Provider reports meters; normalized to kilometers.
    pub visibility_km: f64,
    pub icon: String,
    /// Unix seconds.
    pub sunrise: i64,
    /// Unix seconds.
    pub sunset: i64,
}

impl CurrentConditions {
    /// Icon asset for the detail card (large size).
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon, IconSize::Large)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min_c: i32,
    pub max_c: i32,
}

/// One summarized forecast day. The values are a sample from the first
/// 3-hourly entry of the day, not an aggregate over the whole day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO calendar date, no time portion.
    pub date: String,
    pub temperature: TemperatureRange,
    pub description: String,
    pub icon: String,
    pub humidity_pct: u8,
}

impl ForecastDay {
    /// Icon asset for a forecast tile (small size).
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon, IconSize::Small)
    }
}

/// Success payload of a query: current conditions plus up to 5 forecast days.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Large,
    Small,
}

/// Provider icon asset URL for a given icon identifier.
pub fn icon_url(icon: &str, size: IconSize) -> String {
    let scale = match size {
        IconSize::Large => "@4x",
        IconSize::Small => "@2x",
    };
    format!("https://openweathermap.org/img/wn/{icon}{scale}.png")
}
