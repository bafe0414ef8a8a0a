use movie_history_models::{Route, Session, User};
use tracing::{debug, info};

/// Check whether a route may be entered under the given session.
/// Guarded views require an authenticated session; everything else is
/// public.
pub fn can_enter(route: Route, session: &Session) -> bool {
    !route.requires_auth() || session.is_authenticated()
}

/// Placeholder credential check: any non-empty email/password pair is
/// accepted and mapped onto the demo account.
///
/// TODO: swap in a real account backend before this leaves demo mode.
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    if email.is_empty() || password.is_empty() {
        debug!("Rejected sign-in with empty credentials");
        return None;
    }
    info!("Accepted sign-in for {} (placeholder check)", email);
    Some(User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: email.to_string(),
        points: 250,
        bio: None,
    })
}

/// Placeholder registration: accepts any non-empty field set and
/// persists nothing.
pub fn register(name: &str, email: &str, password: &str) -> bool {
    let accepted = !name.is_empty() && !email.is_empty() && !password.is_empty();
    if accepted {
        info!("Registered {} <{}> (placeholder, not persisted)", name, email);
    } else {
        debug!("Rejected registration with empty fields");
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_blocks_protected_routes_for_anonymous() {
        let session = Session::Anonymous;
        assert!(!can_enter(Route::Profile, &session));
        assert!(!can_enter(Route::EditProfile, &session));
        assert!(!can_enter(Route::History, &session));
        assert!(can_enter(Route::Login, &session));
        assert!(can_enter(Route::ScreeningRoom, &session));
        assert!(can_enter(Route::MovieDetail, &session));
    }

    #[test]
    fn test_guard_admits_authenticated_everywhere() {
        let user = authenticate("john.doe@example.com", "hunter2").unwrap();
        let session = Session::Authenticated(user);
        assert!(can_enter(Route::Profile, &session));
        assert!(can_enter(Route::History, &session));
        assert!(can_enter(Route::ScreeningRoom, &session));
    }

    #[test]
    fn test_authenticate_rejects_empty_fields() {
        assert!(authenticate("", "secret").is_none());
        assert!(authenticate("john.doe@example.com", "").is_none());
        assert!(authenticate("", "").is_none());
    }

    #[test]
    fn test_authenticate_uses_given_email() {
        let user = authenticate("jane@example.com", "pw").unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.points, 250);
    }

    #[test]
    fn test_register_requires_all_fields() {
        assert!(register("Jane", "jane@example.com", "pw"));
        assert!(!register("", "jane@example.com", "pw"));
        assert!(!register("Jane", "", "pw"));
        assert!(!register("Jane", "jane@example.com", ""));
    }
}
