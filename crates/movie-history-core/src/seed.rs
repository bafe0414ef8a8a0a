use chrono::NaiveDate;
use movie_history_models::MovieRecord;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// The fixed sample entries written by first-run seeding.
pub fn sample_history() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            id: 1,
            title: "Psych: The Movie".to_string(),
            poster: "🎬".to_string(),
            genre: "Comedy".to_string(),
            year: 2017,
            duration: 88,
            rating: 5.0,
            watched_date: date(2024, 10, 15),
            review: Some(
                "Hilarious continuation of the series! Perfect blend of mystery and humor."
                    .to_string(),
            ),
        },
        MovieRecord {
            id: 2,
            title: "The Shawshank Redemption".to_string(),
            poster: "🎭".to_string(),
            genre: "Drama".to_string(),
            year: 1994,
            duration: 142,
            rating: 5.0,
            watched_date: date(2024, 10, 10),
            review: Some("Absolutely masterpiece. One of the best films ever made.".to_string()),
        },
        MovieRecord {
            id: 3,
            title: "Inception".to_string(),
            poster: "🌀".to_string(),
            genre: "Science Fiction".to_string(),
            year: 2010,
            duration: 148,
            rating: 5.0,
            watched_date: date(2024, 10, 5),
            review: Some(
                "Mind-bending thriller that keeps you thinking long after it ends.".to_string(),
            ),
        },
    ]
}
