use crate::client::WeatherClient;
use crate::error::QueryError;
use crate::location::{LocationError, LocationProvider};
use crate::model::{CityName, WeatherReport};
use crate::recent::RecentSearches;
use crate::state::{QueryState, SearchState};

/// Caller-facing surface of the dashboard: owns the weather client, the
/// location port, the recent-search list, and the observable query state.
#[derive(Debug)]
pub struct Dashboard {
    client: WeatherClient,
    locator: Box<dyn LocationProvider>,
    recent: RecentSearches,
    state: SearchState,
}

impl Dashboard {
    pub fn new(
        client: WeatherClient,
        locator: Box<dyn LocationProvider>,
        recent: RecentSearches,
    ) -> Self {
        Self {
            client,
            locator,
            recent,
            state: SearchState::new(),
        }
    }

    /// Search by city name. Blank input is a complete no-op: no request is
    /// issued, no state changes, the recent list is untouched. Any
    /// non-blank attempt is recorded in the recent list, successful or not.
    pub async fn search_city(&mut self, raw: &str) {
        let Some(city) = CityName::parse(raw) else {
            return;
        };

        self.recent.record(city.as_str());

        let generation = self.state.begin();
        let outcome = self.client.query_by_city(&city).await;
        self.state.finish(generation, outcome);
    }

    /// Search by device location. A locator failure is returned for the
    /// front end to surface; query state and the recent list stay
    /// untouched. Location searches never touch the recent list.
    pub async fn search_here(&mut self) -> Result<(), LocationError> {
        let coords = self.locator.current_position().await?;

        let generation = self.state.begin();
        let outcome = self.client.query_by_location(coords).await;
        self.state.finish(generation, outcome);
        Ok(())
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    pub fn state(&self) -> &QueryState {
        self.state.state()
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.state.report()
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn recent_searches(&self) -> &[String] {
        self.recent.entries()
    }
}
