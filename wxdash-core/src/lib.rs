//! Core library for the `wxdash` terminal weather dashboard.
//!
//! This crate defines:
//! - The OpenWeatherMap client and response normalization
//! - The reduction of the 3-hourly forecast feed into daily summaries
//! - Capability ports for device location and key/value persistence
//! - Recent-search and query-state bookkeeping used by the front end
//!
//! It is used by `wxdash-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
mod forecast;
pub mod location;
pub mod model;
pub mod recent;
pub mod state;
pub mod storage;

pub use client::WeatherClient;
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{ErrorKind, QueryError};
pub use location::{IpLocationProvider, LocationError, LocationProvider};
pub use model::{
    CityName, Coordinates, CurrentConditions, ForecastDay, TemperatureRange, WeatherReport,
};
pub use recent::RecentSearches;
pub use state::{QueryState, SearchState};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreError};
