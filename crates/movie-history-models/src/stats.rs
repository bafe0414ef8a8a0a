use serde::Serialize;
use std::collections::HashMap;

/// Derived, read-only snapshot of the watch history.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_movies: usize,
    /// Total watch time in hours, rounded to the nearest whole hour.
    pub total_hours: u64,
    /// Average rating formatted to one decimal; "0.0" for an empty list.
    pub avg_rating: String,
    /// Most frequent genre; "None" for an empty list.
    pub favorite_genre: String,
    pub genre_distribution: HashMap<String, u32>,
}

impl HistoryStats {
    pub fn empty() -> Self {
        Self {
            total_movies: 0,
            total_hours: 0,
            avg_rating: "0.0".to_string(),
            favorite_genre: "None".to_string(),
            genre_distribution: HashMap::new(),
        }
    }
}
