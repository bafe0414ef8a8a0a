use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One watched movie entry, as stored on the wire (camelCase fields,
/// `review` omitted when absent).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: u32,
    pub title: String,
    pub poster: String, // Short glyph stand-in for artwork
    pub genre: String,  // Free-form, not a closed enumeration
    pub year: u32,
    pub duration: u32, // Minutes
    pub rating: f32,   // Expected 0-5, not enforced
    pub watched_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

/// A movie entry before it has been stamped with a watched date.
/// The store's upsert path is the only place that turns a draft into a
/// full `MovieRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub id: u32,
    pub title: String,
    pub poster: String,
    pub genre: String,
    pub year: u32,
    pub duration: u32,
    pub rating: f32,
    pub review: Option<String>,
}

impl MovieDraft {
    pub fn into_record(self, watched_date: NaiveDate) -> MovieRecord {
        MovieRecord {
            id: self.id,
            title: self.title,
            poster: self.poster,
            genre: self.genre,
            year: self.year,
            duration: self.duration,
            rating: self.rating,
            watched_date,
            review: self.review,
        }
    }
}

/// Partial update over an existing entry. Fields left as `None` are
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryUpdate {
    pub rating: Option<f32>,
    pub review: Option<String>,
}
