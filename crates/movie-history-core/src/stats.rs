use std::collections::HashMap;

use movie_history_models::{HistoryStats, MovieRecord};

/// Aggregate the derived snapshot for a history list.
///
/// Favorite genre is the genre with the highest occurrence count; ties
/// go to the genre seen first while scanning the list front to back.
pub fn compute_stats(movies: &[MovieRecord]) -> HistoryStats {
    if movies.is_empty() {
        return HistoryStats::empty();
    }

    let total_movies = movies.len();
    let total_minutes: u64 = movies.iter().map(|m| u64::from(m.duration)).sum();
    let total_hours = (total_minutes as f64 / 60.0).round() as u64;

    let rating_sum: f64 = movies.iter().map(|m| f64::from(m.rating)).sum();
    let avg_rating = format!("{:.1}", rating_sum / total_movies as f64);

    let mut genre_distribution: HashMap<String, u32> = HashMap::new();
    let mut seen_order: Vec<String> = Vec::new();
    for movie in movies {
        if !genre_distribution.contains_key(&movie.genre) {
            seen_order.push(movie.genre.clone());
        }
        *genre_distribution.entry(movie.genre.clone()).or_insert(0) += 1;
    }

    let mut favorite_genre = String::from("None");
    let mut best_count = 0;
    for genre in &seen_order {
        let count = genre_distribution[genre];
        if count > best_count {
            best_count = count;
            favorite_genre = genre.clone();
        }
    }

    HistoryStats {
        total_movies,
        total_hours,
        avg_rating,
        favorite_genre,
        genre_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn movie(id: u32, genre: &str, duration: u32, rating: f32) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {}", id),
            poster: "🎬".to_string(),
            genre: genre.to_string(),
            year: 2020,
            duration,
            rating,
            watched_date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap(),
            review: None,
        }
    }

    #[test]
    fn test_empty_list_sentinels() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_movies, 0);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.avg_rating, "0.0");
        assert_eq!(stats.favorite_genre, "None");
        assert!(stats.genre_distribution.is_empty());
    }

    #[test]
    fn test_total_hours_rounds_to_nearest() {
        // 88 + 142 + 148 = 378 minutes -> 6.3 hours -> 6
        let movies = vec![
            movie(1, "Comedy", 88, 5.0),
            movie(2, "Drama", 142, 5.0),
            movie(3, "Science Fiction", 148, 5.0),
        ];
        assert_eq!(compute_stats(&movies).total_hours, 6);
    }

    #[test]
    fn test_avg_rating_one_decimal() {
        let movies = vec![
            movie(1, "Comedy", 90, 5.0),
            movie(2, "Drama", 90, 5.0),
            movie(3, "Action", 90, 4.0),
        ];
        assert_eq!(compute_stats(&movies).avg_rating, "4.7");
    }

    #[test]
    fn test_favorite_genre_by_count() {
        let movies = vec![
            movie(1, "Drama", 90, 4.0),
            movie(2, "Comedy", 90, 4.0),
            movie(3, "Comedy", 90, 4.0),
        ];
        let stats = compute_stats(&movies);
        assert_eq!(stats.favorite_genre, "Comedy");
        assert_eq!(stats.genre_distribution["Comedy"], 2);
        assert_eq!(stats.genre_distribution["Drama"], 1);
    }

    #[test]
    fn test_favorite_genre_tie_goes_to_first_seen() {
        let movies = vec![
            movie(1, "Drama", 90, 4.0),
            movie(2, "Comedy", 90, 4.0),
            movie(3, "Drama", 90, 4.0),
            movie(4, "Comedy", 90, 4.0),
        ];
        assert_eq!(compute_stats(&movies).favorite_genre, "Drama");
    }

    #[test]
    fn test_single_movie() {
        let stats = compute_stats(&[movie(1, "Crime", 154, 4.0)]);
        assert_eq!(stats.total_movies, 1);
        assert_eq!(stats.total_hours, 3); // 154 / 60 = 2.57 -> 3
        assert_eq!(stats.avg_rating, "4.0");
        assert_eq!(stats.favorite_genre, "Crime");
    }
}
