use crate::error::QueryError;
use crate::model::WeatherReport;

/// Observable outcome of the latest query. Exactly one of these holds at
/// any time; a result is never shown alongside a newer error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Ready(WeatherReport),
    Failed(QueryError),
}

/// Tri-state plus loading flag for the query in flight.
///
/// Each query started through [`SearchState::begin`] gets a monotonically
/// increasing generation; a completion handed to [`SearchState::finish`]
/// with a superseded generation is dropped, so an older response landing
/// late can never overwrite a newer query's outcome.
#[derive(Debug, Default)]
pub struct SearchState {
    state: QueryState,
    loading: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query: clears the previous outcome, raises the loading
    /// flag, and returns the generation its completion must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = QueryState::Idle;
        self.loading = true;
        self.generation
    }

    /// Record a query outcome, unless it belongs to a superseded generation.
    pub fn finish(&mut self, generation: u64, outcome: Result<WeatherReport, QueryError>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        self.state = match outcome {
            Ok(report) => QueryState::Ready(report),
            Err(err) => QueryState::Failed(err),
        };
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match &self.state {
            QueryState::Ready(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match &self.state {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
