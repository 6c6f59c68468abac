use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::Coordinates;

const IPINFO_URL: &str = "https://ipinfo.io/json";

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location lookup failed: {0}")]
    Lookup(String),
}

/// Capability port for "where is this device". The shipped implementation
/// is IP-based; tests substitute a deterministic double.
#[async_trait]
pub trait LocationProvider: Send + Sync + std::fmt::Debug {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Approximate device position resolved from the machine's public IP via
/// ipinfo.io. City-level accuracy at best.
#[derive(Debug, Clone)]
pub struct IpLocationProvider {
    http: reqwest::Client,
    endpoint: String,
}

impl IpLocationProvider {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: IPINFO_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for IpLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    /// `"latitude,longitude"`.
    loc: String,
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let res = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| {
                warn!(%err, "geolocation endpoint unreachable");
                LocationError::ServiceUnavailable
            })?;

        if !res.status().is_success() {
            warn!(status = %res.status(), "geolocation endpoint returned an error");
            return Err(LocationError::ServiceUnavailable);
        }

        let parsed: IpInfoResponse = res
            .json()
            .await
            .map_err(|err| LocationError::Lookup(err.to_string()))?;

        let coords = parse_loc(&parsed.loc)
            .ok_or_else(|| LocationError::Lookup(format!("unparseable loc field: {}", parsed.loc)))?;
        debug!(lat = coords.latitude, lon = coords.longitude, "resolved device position");
        Ok(coords)
    }
}

fn parse_loc(loc: &str) -> Option<Coordinates> {
    let (lat, lon) = loc.split_once(',')?;
    Some(Coordinates {
        latitude: lat.trim().parse().ok()?,
        longitude: lon.trim().parse().ok()?,
    })
}
