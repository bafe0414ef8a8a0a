use anyhow::Result;
use chrono::Utc;
use movie_history_config::PathManager;
use movie_history_models::{HistoryStats, HistoryUpdate, MovieDraft, MovieRecord};
use tracing::{debug, info, warn};

use crate::seed::sample_history;
use crate::stats::compute_stats;
use crate::storage::{FileStore, KeyValueStore};

/// The single storage key holding the serialized history list.
pub const HISTORY_KEY: &str = "movieHistory";

/// Durable CRUD access to the watch history, plus derived statistics.
///
/// Every operation is one synchronous read-modify-write against the
/// single backing key. Persistence failures never propagate: writes
/// report success as a boolean and unreadable data loads as an empty
/// list, with a diagnostic logged either way.
pub struct HistoryStore {
    backend: Box<dyn KeyValueStore>,
}

impl HistoryStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by the history directory of the standard app paths.
    pub fn open(paths: &PathManager) -> Result<Self> {
        let backend = FileStore::new(paths.history_dir())?;
        Ok(Self::new(Box::new(backend)))
    }

    /// Read the full list. Absent or unreadable data degrades to an
    /// empty list; this path never writes.
    pub fn load(&self) -> Vec<MovieRecord> {
        let raw = match self.backend.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read movie history: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<MovieRecord>>(&raw) {
            Ok(movies) => {
                debug!("Loaded movie history ({} entries)", movies.len());
                movies
            }
            Err(e) => {
                warn!("Movie history is unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize and write the whole list, overwriting the prior value.
    pub fn save(&self, movies: &[MovieRecord]) -> bool {
        let json = match serde_json::to_string_pretty(movies) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize movie history: {}", e);
                return false;
            }
        };
        match self.backend.set(HISTORY_KEY, &json) {
            Ok(()) => {
                debug!("Saved movie history ({} entries)", movies.len());
                true
            }
            Err(e) => {
                warn!("Failed to write movie history: {}", e);
                false
            }
        }
    }

    /// Insert a new entry at the front, or replace the entry with the
    /// same id in place. Stamps today's date on the entry; this is the
    /// only write path that sets `watched_date`.
    pub fn upsert(&self, draft: MovieDraft) -> bool {
        let mut movies = self.load();
        let record = draft.into_record(Utc::now().date_naive());
        match movies.iter().position(|m| m.id == record.id) {
            Some(index) => {
                debug!("Replacing history entry {} in place", record.id);
                movies[index] = record;
            }
            None => {
                debug!("Adding history entry {} at the front", record.id);
                movies.insert(0, record);
            }
        }
        self.save(&movies)
    }

    /// Drop every entry with the given id. Removing an id that is not
    /// present still counts as success.
    pub fn remove(&self, id: u32) -> bool {
        let mut movies = self.load();
        let before = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() < before {
            debug!("Removed {} history entries with id {}", before - movies.len(), id);
        }
        self.save(&movies)
    }

    /// Merge the supplied rating/review over the matching entry, leaving
    /// every other field untouched. Returns false without writing when
    /// the id is not present.
    pub fn partial_update(&self, id: u32, update: HistoryUpdate) -> bool {
        let mut movies = self.load();
        let index = match movies.iter().position(|m| m.id == id) {
            Some(index) => index,
            None => {
                debug!("No history entry {} to update", id);
                return false;
            }
        };
        if let Some(rating) = update.rating {
            movies[index].rating = rating;
        }
        if let Some(review) = update.review {
            movies[index].review = Some(review);
        }
        self.save(&movies)
    }

    /// Delete the backing key entirely; the next load sees an empty list.
    pub fn clear(&self) -> bool {
        match self.backend.remove(HISTORY_KEY) {
            Ok(()) => {
                info!("Cleared movie history");
                true
            }
            Err(e) => {
                warn!("Failed to clear movie history: {}", e);
                false
            }
        }
    }

    /// Fresh statistics snapshot over the current list.
    pub fn statistics(&self) -> HistoryStats {
        compute_stats(&self.load())
    }

    /// Write the fixed sample entries if no history exists yet. Returns
    /// whether seeding happened.
    pub fn seed_if_empty(&self) -> bool {
        if !self.load().is_empty() {
            return false;
        }
        info!("Seeding movie history with sample data");
        self.save(&sample_history())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    /// Backend whose writes always fail, simulating unavailable storage.
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn store() -> HistoryStore {
        HistoryStore::new(Box::new(MemoryStore::new()))
    }

    fn draft(id: u32, title: &str, genre: &str) -> MovieDraft {
        MovieDraft {
            id,
            title: title.to_string(),
            poster: "🎬".to_string(),
            genre: genre.to_string(),
            year: 2020,
            duration: 120,
            rating: 4.0,
            review: None,
        }
    }

    #[test]
    fn test_load_on_fresh_store_is_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn test_upsert_inserts_at_front_and_stamps_today() {
        let store = store();
        assert!(store.upsert(draft(1, "First", "Drama")));
        assert!(store.upsert(draft(2, "Second", "Comedy")));

        let movies = store.load();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 2);
        assert_eq!(movies[1].id, 1);
        assert_eq!(movies[0].watched_date, Utc::now().date_naive());
    }

    #[test]
    fn test_upsert_same_id_replaces_in_place() {
        let store = store();
        store.upsert(draft(1, "First", "Drama"));
        store.upsert(draft(2, "Second", "Comedy"));
        store.upsert(draft(3, "Third", "Action"));

        // List is now [3, 2, 1]; updating 2 must not move it
        let mut updated = draft(2, "Second, revisited", "Comedy");
        updated.rating = 5.0;
        assert!(store.upsert(updated));

        let movies = store.load();
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[1].id, 2);
        assert_eq!(movies[1].title, "Second, revisited");
        assert_eq!(movies[1].rating, 5.0);
    }

    #[test]
    fn test_remove_drops_matching_entries() {
        let store = store();
        store.upsert(draft(1, "First", "Drama"));
        store.upsert(draft(2, "Second", "Comedy"));

        assert!(store.remove(1));
        let movies = store.load();
        assert_eq!(movies.len(), 1);
        assert!(movies.iter().all(|m| m.id != 1));
    }

    #[test]
    fn test_remove_missing_id_succeeds_and_changes_nothing() {
        let store = store();
        store.upsert(draft(1, "First", "Drama"));

        assert!(store.remove(42));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_partial_update_touches_only_supplied_fields() {
        let store = store();
        let mut with_review = draft(1, "First", "Drama");
        with_review.review = Some("Great".to_string());
        store.upsert(with_review);

        assert!(store.partial_update(
            1,
            HistoryUpdate {
                rating: Some(3.0),
                review: None,
            }
        ));

        let movies = store.load();
        assert_eq!(movies[0].rating, 3.0);
        assert_eq!(movies[0].review, Some("Great".to_string()));
        assert_eq!(movies[0].title, "First");
    }

    #[test]
    fn test_partial_update_missing_id_returns_false_without_writing() {
        let store = store();
        store.upsert(draft(1, "First", "Drama"));
        let before = store.load();

        assert!(!store.partial_update(
            42,
            HistoryUpdate {
                rating: Some(1.0),
                review: Some("nope".to_string()),
            }
        ));
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_load_after_clear_is_empty() {
        let store = store();
        store.upsert(draft(1, "First", "Drama"));
        assert!(store.clear());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let store = store();
        let movies = vec![
            MovieRecord {
                id: 2,
                title: "The Matrix".to_string(),
                poster: "🕶️".to_string(),
                genre: "Sci-Fi".to_string(),
                year: 1999,
                duration: 136,
                rating: 5.0,
                watched_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                review: Some("Mind-bending masterpiece!".to_string()),
            },
            MovieRecord {
                id: 5,
                title: "Pulp Fiction".to_string(),
                poster: "💼".to_string(),
                genre: "Crime".to_string(),
                year: 1994,
                duration: 154,
                rating: 4.0,
                watched_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
                review: None,
            },
        ];

        assert!(store.save(&movies));
        assert_eq!(store.load(), movies);
    }

    #[test]
    fn test_corrupt_blob_loads_as_empty_without_side_effects() {
        let backend = MemoryStore::new();
        backend.set(HISTORY_KEY, "{not json").unwrap();
        let store = HistoryStore::new(Box::new(backend));

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_on_disk_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file_store = FileStore::new(dir.path().to_path_buf()).unwrap();
        file_store.set(HISTORY_KEY, "[{\"id\": oops").unwrap();

        let store = HistoryStore::new(Box::new(file_store));
        assert!(store.load().is_empty());
        assert!(dir.path().join("movieHistory.json").exists());
    }

    #[test]
    fn test_failing_backend_masks_errors_as_false() {
        let store = HistoryStore::new(Box::new(FailingStore));
        assert!(!store.save(&[]));
        assert!(!store.upsert(draft(1, "First", "Drama")));
        assert!(!store.remove(1));
        assert!(!store.clear());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_seed_if_empty_seeds_once() {
        let store = store();
        assert!(store.seed_if_empty());

        let movies = store.load();
        assert_eq!(movies.len(), 3);
        let ids: Vec<u32> = movies.iter().map(|m| m.id).collect();

        assert!(!store.seed_if_empty());
        let unchanged = store.load();
        assert_eq!(unchanged.len(), 3);
        assert_eq!(ids, unchanged.iter().map(|m| m.id).collect::<Vec<u32>>());
    }

    #[test]
    fn test_seed_if_empty_skips_non_empty_history() {
        let store = store();
        store.upsert(draft(7, "Mine", "Drama"));
        assert!(!store.seed_if_empty());
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_statistics_on_empty_store() {
        let stats = store().statistics();
        assert_eq!(stats.total_movies, 0);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.avg_rating, "0.0");
        assert_eq!(stats.favorite_genre, "None");
        assert!(stats.genre_distribution.is_empty());
    }
}
