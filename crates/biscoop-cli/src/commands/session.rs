use super::prompts;
use crate::output::Output;
use color_eyre::Result;
use movie_history_config::{PathManager, SessionStore};
use movie_history_core::{authenticate, register};
use movie_history_models::Session;
use tracing::warn;

/// Load the persisted session, treating an unreadable file as signed out.
pub fn open_session_store(paths: &PathManager) -> SessionStore {
    let mut store = SessionStore::new(paths.session_file());
    if let Err(e) = store.load() {
        warn!("Session state unreadable, continuing signed out: {}", e);
    }
    store
}

/// Convenience for commands that only need to consult the guard.
pub fn current_session(paths: &PathManager) -> Session {
    open_session_store(paths).current().clone()
}

pub fn run_login(email: Option<String>, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut store = open_session_store(&paths);

    if let Some(user) = store.current().user() {
        output.info(format!("Already signed in as {}", user.email));
        output.info("Use 'biscoop logout' to switch accounts");
        return Ok(());
    }

    let email = match email {
        Some(email) => email,
        None => prompts::prompt_string("Email", None)?,
    };
    let password = prompts::prompt_password("Password")?;

    match authenticate(&email, &password) {
        Some(user) => {
            let name = user.name.clone();
            store.sign_in(user);
            store
                .save()
                .map_err(|e| color_eyre::eyre::eyre!("Failed to store session: {}", e))?;
            output.success(format!("Signed in as {} <{}>", name, email));
        }
        None => {
            output.error("Email and password must not be empty");
        }
    }

    Ok(())
}

pub fn run_logout(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut store = open_session_store(&paths);

    if !store.current().is_authenticated() {
        output.info("Not signed in");
        return Ok(());
    }

    store
        .clear()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to clear session: {}", e))?;
    output.success("Signed out");
    Ok(())
}

pub fn run_register(name: Option<String>, email: Option<String>, output: &Output) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompts::prompt_string("Full name", None)?,
    };
    let email = match email {
        Some(email) => email,
        None => prompts::prompt_string("Email", None)?,
    };
    let password = prompts::prompt_password("Password")?;

    if register(&name, &email, &password) {
        output.success("Account created");
        output.info("Sign in with 'biscoop login'");
    } else {
        output.error("Name, email and password are all required");
    }

    Ok(())
}
