use tracing::warn;

use crate::storage::KeyValueStore;

/// Storage key for the persisted list; a JSON array of strings.
pub const RECENT_SEARCHES_KEY: &str = "recentWeatherSearches";

const MAX_RECENT: usize = 5;

/// Up to five recently searched city names, most recent first,
/// case-insensitively deduplicated, persisted through a [`KeyValueStore`].
///
/// Storage failures degrade gracefully: the in-memory list stays correct
/// and a warning is logged.
#[derive(Debug)]
pub struct RecentSearches {
    store: Box<dyn KeyValueStore>,
    entries: Vec<String>,
}

impl RecentSearches {
    /// Load the persisted list. Missing or corrupt data starts empty.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "could not read recent searches, starting empty");
                Vec::new()
            }
        };
        Self { store, entries }
    }

    /// Record a search: any case-insensitive duplicate is removed first,
    /// the name is prepended as typed, and the list is capped at five.
    pub fn record(&mut self, city: &str) {
        let lower = city.to_lowercase();
        self.entries.retain(|entry| entry.to_lowercase() != lower);
        self.entries.insert(0, city.to_string());
        self.entries.truncate(MAX_RECENT);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.store.remove(RECENT_SEARCHES_KEY) {
            warn!(%err, "could not remove persisted recent searches");
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(err) = self.store.set(RECENT_SEARCHES_KEY, &json) {
                    warn!(%err, "could not persist recent searches");
                }
            }
            Err(err) => warn!(%err, "could not encode recent searches"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, KeyValueStore, MemoryStore};

    fn in_memory() -> RecentSearches {
        RecentSearches::load(Box::new(MemoryStore::new()))
    }

    #[test]
    fn newest_search_goes_first() {
        let mut recent = in_memory();

        recent.record("Paris");
        recent.record("Tokyo");

        assert_eq!(recent.entries(), ["Tokyo", "Paris"]);
    }

    #[test]
    fn case_insensitive_dedup_keeps_the_new_casing() {
        let mut recent = in_memory();

        recent.record("Tokyo");
        recent.record("Paris");
        assert_eq!(recent.entries(), ["Paris", "Tokyo"]);

        recent.record("paris");
        assert_eq!(recent.entries(), ["paris", "Tokyo"]);
    }

    #[test]
    fn list_never_exceeds_five_entries() {
        let mut recent = in_memory();

        for city in ["A", "B", "C", "D", "E", "F", "G"] {
            recent.record(city);
        }

        assert_eq!(recent.entries(), ["G", "F", "E", "D", "C"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut recent = in_memory();

        recent.record("Paris");
        recent.clear();

        assert!(recent.is_empty());
    }

    #[test]
    fn list_survives_a_reload_through_the_store() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FileStore::open(dir.path().to_path_buf()).unwrap();
            let mut recent = RecentSearches::load(Box::new(store));
            recent.record("Paris");
            recent.record("Tokyo");
        }

        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        let recent = RecentSearches::load(Box::new(store));
        assert_eq!(recent.entries(), ["Tokyo", "Paris"]);
    }

    #[test]
    fn corrupt_persisted_data_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(RECENT_SEARCHES_KEY, "not json at all").unwrap();

        let recent = RecentSearches::load(Box::new(store));
        assert!(recent.is_empty());
    }
}
