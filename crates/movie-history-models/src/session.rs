use serde::{Deserialize, Serialize};

use crate::user::User;

/// Login state consulted by the navigation guard: either nobody is
/// signed in, or exactly one user is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// The application's views. Profile, EditProfile and History sit behind
/// the signed-in guard; everything else is public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    MovieDetail,
    ScreeningRoom,
    Profile,
    EditProfile,
    History,
}

impl Route {
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Profile | Route::EditProfile | Route::History)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes() {
        assert!(Route::Profile.requires_auth());
        assert!(Route::EditProfile.requires_auth());
        assert!(Route::History.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Register.requires_auth());
        assert!(!Route::MovieDetail.requires_auth());
        assert!(!Route::ScreeningRoom.requires_auth());
    }

    #[test]
    fn test_session_user_access() {
        assert_eq!(Session::Anonymous.user(), None);

        let user = User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            points: 250,
            bio: None,
        };
        let session = Session::Authenticated(user.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&user));
    }
}
