use super::{prompts, session};
use crate::output::Output;
use crate::HistoryCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_history_config::{Config, PathManager};
use movie_history_core::{can_enter, HistoryStore};
use movie_history_models::{HistoryUpdate, MovieDraft, Route};

pub fn run_history(cmd: HistoryCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let current = session::current_session(&paths);

    if !can_enter(Route::History, &current) {
        output.error("You need to sign in first: biscoop login");
        return Ok(());
    }

    let store = HistoryStore::open(&paths)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open history store: {}", e))?;

    match cmd {
        HistoryCommands::List => list_history(&store, &paths, output),
        HistoryCommands::Add {
            id,
            title,
            poster,
            genre,
            year,
            duration,
            rating,
            review,
        } => {
            let draft = MovieDraft {
                id,
                title,
                poster,
                genre,
                year,
                duration,
                rating,
                review,
            };
            add_movie(&store, draft, output)
        }
        HistoryCommands::Remove { id } => remove_movie(&store, id, output),
        HistoryCommands::Rate { id, rating, review } => {
            rate_movie(&store, id, rating, review, output)
        }
        HistoryCommands::Stats => show_stats(&store, output),
        HistoryCommands::Clear { yes } => clear_history(&store, yes, output),
        HistoryCommands::Seed => seed_history(&store, output),
    }
}

fn list_history(store: &HistoryStore, paths: &PathManager, output: &Output) -> Result<()> {
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    let mut movies = store.load();
    if movies.is_empty() && config.history.seed_on_first_run && store.seed_if_empty() {
        movies = store.load();
    }

    if output.is_json() {
        output.json(&serde_json::to_value(&movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        output.info("No watched movies yet. Add one with 'biscoop history add'");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Id").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Runtime").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Watched").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Review").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for movie in &movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(format!("{} {}", movie.poster, movie.title)),
            Cell::new(&movie.genre),
            Cell::new(movie.year),
            Cell::new(format!("{} min", movie.duration)),
            Cell::new(format!("{:.1}", movie.rating)),
            Cell::new(movie.watched_date),
            Cell::new(movie.review.as_deref().unwrap_or("-")),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());

    Ok(())
}

fn add_movie(store: &HistoryStore, draft: MovieDraft, output: &Output) -> Result<()> {
    let title = draft.title.clone();
    let existed = store.load().iter().any(|m| m.id == draft.id);

    if store.upsert(draft) {
        if existed {
            output.success(format!("Updated '{}' in your history", title));
        } else {
            output.success(format!("Added '{}' to your history", title));
        }
    } else {
        output.error("Could not save your history");
    }

    Ok(())
}

fn remove_movie(store: &HistoryStore, id: u32, output: &Output) -> Result<()> {
    let existed = store.load().iter().any(|m| m.id == id);

    if store.remove(id) {
        if existed {
            output.success(format!("Removed entry {}", id));
        } else {
            output.info(format!("No history entry with id {}, nothing removed", id));
        }
    } else {
        output.error("Could not save your history");
    }

    Ok(())
}

fn rate_movie(
    store: &HistoryStore,
    id: u32,
    rating: Option<f32>,
    review: Option<String>,
    output: &Output,
) -> Result<()> {
    if rating.is_none() && review.is_none() {
        output.warn("Nothing to update. Pass --rating and/or --review");
        return Ok(());
    }

    if !store.load().iter().any(|m| m.id == id) {
        output.error(format!("No history entry with id {}", id));
        return Ok(());
    }

    if store.partial_update(id, HistoryUpdate { rating, review }) {
        output.success(format!("Updated entry {}", id));
    } else {
        output.error("Could not save your history");
    }

    Ok(())
}

fn show_stats(store: &HistoryStore, output: &Output) -> Result<()> {
    let stats = store.statistics();

    if output.is_json() {
        output.json(&serde_json::to_value(&stats)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Watch Statistics")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Total movies"), Cell::new(stats.total_movies)]);
    table.add_row(vec![Cell::new("Hours watched"), Cell::new(stats.total_hours)]);
    table.add_row(vec![Cell::new("Average rating"), Cell::new(&stats.avg_rating)]);
    table.add_row(vec![
        Cell::new("Favorite genre"),
        Cell::new(&stats.favorite_genre),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());

    if !stats.genre_distribution.is_empty() {
        // HashMap order is arbitrary; sort by count, then name, for display
        let mut genres: Vec<(&String, &u32)> = stats.genre_distribution.iter().collect();
        genres.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let mut genre_table = Table::new();
        genre_table.set_header(vec![
            Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Watched").add_attribute(comfy_table::Attribute::Bold),
        ]);
        for (genre, count) in genres {
            genre_table.add_row(vec![Cell::new(genre), Cell::new(count)]);
        }
        genre_table.load_preset(comfy_table::presets::UTF8_FULL);
        genre_table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        output.info(genre_table.to_string());
    }

    Ok(())
}

fn clear_history(store: &HistoryStore, yes: bool, output: &Output) -> Result<()> {
    if !yes {
        let confirmed = prompts::prompt_yes_no("Delete your entire watch history?", Some(false))?;
        if !confirmed {
            output.info("Nothing deleted");
            return Ok(());
        }
    }

    if store.clear() {
        output.success("Watch history cleared");
    } else {
        output.error("Could not clear your history");
    }

    Ok(())
}

fn seed_history(store: &HistoryStore, output: &Output) -> Result<()> {
    if store.seed_if_empty() {
        output.success("Seeded 3 sample movies");
    } else {
        output.info("History already has entries, not seeding");
    }

    Ok(())
}
