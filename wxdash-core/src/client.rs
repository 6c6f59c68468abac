use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::QueryError;
use crate::forecast::{self, OwForecastResponse, OwWeather};
use crate::model::{CityName, Coordinates, CurrentConditions, WeatherReport};

const OPENWEATHER_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// OpenWeatherMap client: fetches current conditions and the 3-hourly
/// forecast feed and normalizes both into a [`WeatherReport`].
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: OPENWEATHER_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Query current conditions and the 5-day forecast by city name.
    ///
    /// Issues two sequential requests, metric units: current conditions
    /// first, then the forecast feed. No result is produced unless both
    /// succeed.
    #[instrument(skip(self))]
    pub async fn query_by_city(&self, city: &CityName) -> Result<WeatherReport, QueryError> {
        let current = self.fetch_current(city).await?;
        let feed = self.fetch_forecast(city).await?;

        debug!(
            city = %city,
            forecast_entries = feed.list.len(),
            "normalizing provider responses"
        );

        Ok(WeatherReport {
            current: normalize_current(current),
            forecast: forecast::daily_summaries(&feed.list),
        })
    }

    /// Query by coordinates: one current-conditions request solely to
    /// resolve the place name for the coordinates, then a full re-query
    /// by that name. The output is identical to calling
    /// [`Self::query_by_city`] with the resolved name directly.
    #[instrument(skip(self))]
    pub async fn query_by_location(
        &self,
        coords: Coordinates,
    ) -> Result<WeatherReport, QueryError> {
        let name = self.resolve_place_name(coords).await?;
        debug!(%name, "resolved place name for coordinates");

        let city = CityName::parse(&name)
            .ok_or_else(|| QueryError::location_transport(String::new()))?;
        self.query_by_city(&city).await
    }

    async fn fetch_current(&self, city: &CityName) -> Result<OwCurrentResponse, QueryError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(QueryError::not_found());
        }
        if !status.is_success() {
            return Err(QueryError::provider(status.as_u16()));
        }

        let body = res.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| QueryError::transport(e.to_string()))
    }

    async fn fetch_forecast(&self, city: &CityName) -> Result<OwForecastResponse, QueryError> {
        let url = format!("{}/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(QueryError::provider(status.as_u16()));
        }

        let body = res.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| QueryError::transport(e.to_string()))
    }

    async fn resolve_place_name(&self, coords: Coordinates) -> Result<String, QueryError> {
        let url = format!("{}/weather", self.base_url);
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| QueryError::location_transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(QueryError::location_status(status.as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| QueryError::location_transport(e.to_string()))?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| QueryError::location_transport(e.to_string()))?;

        Ok(parsed.name)
    }
}

fn transport(err: reqwest::Error) -> QueryError {
    QueryError::transport(err.to_string())
}

fn normalize_current(raw: OwCurrentResponse) -> CurrentConditions {
    let (description, icon) = OwWeather::describe(&raw.weather);

    CurrentConditions {
        name: raw.name,
        country: raw.sys.country,
        temperature_c: raw.main.temp.round() as i32,
        feels_like_c: raw.main.feels_like.round() as i32,
        description,
        humidity_pct: raw.main.humidity,
        wind_speed_mps: raw.wind.speed,
        pressure_hpa: raw.main.pressure,
        visibility_km: raw.visibility / 1000.0,
        icon,
        sunrise: raw.sys.sunrise,
        sunset: raw.sys.sunset,
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    visibility: f64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}
