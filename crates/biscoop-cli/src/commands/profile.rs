use super::{prompts, session};
use crate::output::Output;
use crate::ProfileCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_history_config::{PathManager, SessionStore};
use movie_history_core::{can_enter, HistoryStore};
use movie_history_models::{Route, User};
use serde_json::json;

pub fn run_profile(cmd: ProfileCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut store = session::open_session_store(&paths);

    let route = match cmd {
        ProfileCommands::Show => Route::Profile,
        ProfileCommands::Edit => Route::EditProfile,
    };
    if !can_enter(route, store.current()) {
        output.error("You need to sign in first: biscoop login");
        return Ok(());
    }

    match cmd {
        ProfileCommands::Show => show_profile(&store, &paths, output),
        ProfileCommands::Edit => edit_profile(&mut store, output),
    }
}

fn show_profile(
    store: &SessionStore,
    paths: &PathManager,
    output: &Output,
) -> Result<()> {
    let user = match store.current().user() {
        Some(user) => user.clone(),
        None => return Ok(()), // Unreachable past the guard
    };

    let history = HistoryStore::open(paths)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open history store: {}", e))?;
    let movies = history.load();
    let movies_watched = movies.len();
    let reviews_written = movies.iter().filter(|m| m.review.is_some()).count();

    if output.is_json() {
        output.json(&json!({
            "user": user,
            "moviesWatched": movies_watched,
            "reviewsWritten": reviews_written,
            "signedInAt": store.signed_in_at(),
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Profile")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&user.name)]);
    table.add_row(vec![Cell::new("Email"), Cell::new(&user.email)]);
    table.add_row(vec![Cell::new("Membership"), Cell::new("⭐ Premium Member")]);
    table.add_row(vec![Cell::new("Points earned"), Cell::new(user.points)]);
    if let Some(bio) = &user.bio {
        table.add_row(vec![Cell::new("Bio"), Cell::new(bio)]);
    }
    if let Some(signed_in_at) = store.signed_in_at() {
        table.add_row(vec![
            Cell::new("Signed in"),
            Cell::new(signed_in_at.format("%Y-%m-%d %H:%M UTC")),
        ]);
    }
    table.add_row(vec![Cell::new("Movies watched"), Cell::new(movies_watched)]);
    table.add_row(vec![Cell::new("Reviews written"), Cell::new(reviews_written)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    output.info(table.to_string());

    Ok(())
}

fn edit_profile(store: &mut SessionStore, output: &Output) -> Result<()> {
    let user = match store.current().user() {
        Some(user) => user.clone(),
        None => return Ok(()), // Unreachable past the guard
    };

    let name = prompts::prompt_string("Name", Some(&user.name))?;
    let email = prompts::prompt_string("Email", Some(&user.email))?;
    let bio = prompts::prompt_string("Bio", user.bio.as_deref())?;

    let updated = User {
        id: user.id,
        name,
        email,
        points: user.points,
        bio: if bio.is_empty() { None } else { Some(bio) },
    };
    store.update_user(updated);
    store
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to store session: {}", e))?;

    output.success("Profile updated");
    Ok(())
}
