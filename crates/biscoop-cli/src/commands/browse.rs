use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_history_config::{Config, NowShowing, PathManager};

pub fn run_browse(movie: Option<u32>, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid config: {}", e))?;

    match movie {
        Some(id) => show_movie(&config, id, output),
        None => show_board(&config, output),
    }
}

fn show_board(config: &Config, output: &Output) -> Result<()> {
    let movies = &config.screening_room.movies;

    if output.is_json() {
        output.json(&serde_json::to_value(movies)?);
        return Ok(());
    }

    if movies.is_empty() {
        output.info("Nothing is showing right now");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Id").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Now Showing").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Genre").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Runtime").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for movie in movies {
        table.add_row(vec![
            Cell::new(movie.id),
            Cell::new(format!("{} {}", movie.poster, movie.title)),
            Cell::new(&movie.genre),
            Cell::new(movie.year),
            Cell::new(format!("{} min", movie.duration)),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());
    output.info("Add one to your history with 'biscoop history add'");

    Ok(())
}

fn show_movie(config: &Config, id: u32, output: &Output) -> Result<()> {
    let movie: Option<&NowShowing> = config.screening_room.movies.iter().find(|m| m.id == id);

    let movie = match movie {
        Some(movie) => movie,
        None => {
            output.error(format!("No movie with id {} in the screening room", id));
            return Ok(());
        }
    };

    if output.is_json() {
        output.json(&serde_json::to_value(movie)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("{} {}", movie.poster, movie.title))
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Genre"), Cell::new(&movie.genre)]);
    table.add_row(vec![Cell::new("Year"), Cell::new(movie.year)]);
    table.add_row(vec![Cell::new("Runtime"), Cell::new(format!("{} min", movie.duration))]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());

    Ok(())
}
