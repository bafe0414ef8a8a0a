use anyhow::Result;
use chrono::{DateTime, Utc};
use movie_history_models::{Session, User};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionData {
    #[serde(default)]
    authenticated: bool,
    #[serde(default)]
    signed_in_at: Option<DateTime<Utc>>,
    #[serde(default)]
    user: Option<User>,
}

/// Persisted login state, stored as TOML next to the config file.
///
/// A missing file means signed out; a file that fails to load leaves the
/// in-memory state at `Anonymous` and surfaces the error to the caller.
pub struct SessionStore {
    path: PathBuf,
    session: Session,
    signed_in_at: Option<DateTime<Utc>>,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            session: Session::Anonymous,
            signed_in_at: None,
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let data: SessionData = toml::from_str(&content)?;
            self.session = match data.user {
                Some(user) if data.authenticated => Session::Authenticated(user),
                _ => Session::Anonymous,
            };
            self.signed_in_at = data.signed_in_at;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = match &self.session {
            Session::Authenticated(user) => SessionData {
                authenticated: true,
                signed_in_at: self.signed_in_at,
                user: Some(user.clone()),
            },
            Session::Anonymous => SessionData::default(),
        };
        let content = toml::to_string_pretty(&data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn current(&self) -> &Session {
        &self.session
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    pub fn sign_in(&mut self, user: User) {
        self.session = Session::Authenticated(user);
        self.signed_in_at = Some(Utc::now());
    }

    /// Replace the signed-in user without resetting the sign-in time.
    /// No-op when signed out.
    pub fn update_user(&mut self, user: User) {
        if self.session.is_authenticated() {
            self.session = Session::Authenticated(user);
        }
    }

    pub fn sign_out(&mut self) {
        self.session = Session::Anonymous;
        self.signed_in_at = None;
    }

    /// Sign out and delete the session file.
    pub fn clear(&mut self) -> Result<()> {
        self.sign_out();
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn demo_user() -> User {
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            points: 250,
            bio: None,
        }
    }

    #[test]
    fn test_session_store_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut store = SessionStore::new(path.clone());
        store.sign_in(demo_user());
        store.save().unwrap();

        let mut loaded = SessionStore::new(path);
        loaded.load().unwrap();
        assert!(loaded.current().is_authenticated());
        assert_eq!(loaded.current().user().unwrap().email, "john.doe@example.com");
        assert!(loaded.signed_in_at().is_some());
    }

    #[test]
    fn test_missing_file_is_signed_out() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().join("session.toml"));
        store.load().unwrap();
        assert_eq!(*store.current(), Session::Anonymous);
    }

    #[test]
    fn test_unreadable_file_stays_anonymous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let mut store = SessionStore::new(path);
        assert!(store.load().is_err());
        assert_eq!(*store.current(), Session::Anonymous);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut store = SessionStore::new(path.clone());
        store.sign_in(demo_user());
        store.save().unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(*store.current(), Session::Anonymous);
    }

    #[test]
    fn test_update_user_keeps_sign_in_time() {
        let mut store = SessionStore::new(PathBuf::from("/tmp/unused-session.toml"));
        store.sign_in(demo_user());
        let signed_in_at = store.signed_in_at();

        let mut edited = demo_user();
        edited.name = "Jane Doe".to_string();
        store.update_user(edited);

        assert_eq!(store.current().user().unwrap().name, "Jane Doe");
        assert_eq!(store.signed_in_at(), signed_in_at);
    }

    #[test]
    fn test_update_user_when_signed_out_is_noop() {
        let mut store = SessionStore::new(PathBuf::from("/tmp/unused-session.toml"));
        store.update_user(demo_user());
        assert_eq!(*store.current(), Session::Anonymous);
    }
}
