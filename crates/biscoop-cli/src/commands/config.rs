use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_history_config::{Config, PathManager};
use serde_json::json;

pub fn run_config(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config_file = paths.config_file();
    let config = Config::load_or_default(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    if let Err(e) = config.validate() {
        output.warn(format!("Config validation: {}", e));
    }

    if output.is_json() {
        output.json(&json!({
            "configFile": config_file.display().to_string(),
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Configuration")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Config file"),
        Cell::new(config_file.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Seed sample history on first run"),
        Cell::new(config.history.seed_on_first_run),
    ]);
    table.add_row(vec![
        Cell::new("Screening room entries"),
        Cell::new(config.screening_room.movies.len()),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());

    if !config_file.exists() {
        output.info("No config file found; showing built-in defaults");
    }

    Ok(())
}
