//! # Session Commands
//!
//! Commands for reading and changing the authentication session.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌────────────┐   sign_in(user)    ┌────────────┐                       │
//! │  │ Signed Out │──────────────────►│ Signed In  │◄──┐ sign_in(user')    │
//! │  │            │◄──────────────────│            │───┘ (replaces user)   │
//! │  └────────────┘     sign_out      └────────────┘                       │
//! │        ▲                                                                │
//! │        └── startup with empty or corrupt credential mirror             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::User;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::state::{AppScope, SessionState, SessionStore};

/// Session as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionResponse {
    pub is_signed_in: bool,
    pub user: Option<User>,
}

impl From<&SessionStore> for SessionResponse {
    fn from(store: &SessionStore) -> Self {
        SessionResponse {
            is_signed_in: store.is_signed_in(),
            user: store.current_user().cloned(),
        }
    }
}

/// Gets the current session.
pub fn get_session(scope: &AppScope) -> SessionResponse {
    debug!("get_session command");
    scope
        .state::<SessionState>()
        .with_session(|s| SessionResponse::from(s))
}

/// Signs in, optionally as `user`. Never fails.
///
/// ## Behavior
/// - With a user: the session switches to that user and the user is written
///   to the credential mirror
/// - Without a user: the session is marked signed in and keeps its prior user
///
/// The identity is taken as given; a failing credential mirror is logged and
/// does not fail this call.
pub fn sign_in(scope: &AppScope, user: Option<User>) -> SessionResponse {
    debug!(has_user = user.is_some(), "sign_in command");
    scope.state::<SessionState>().with_session_mut(|s| {
        s.sign_in(user);
        SessionResponse::from(&*s)
    })
}

/// Signs out and clears the credential mirror. Idempotent.
pub fn sign_out(scope: &AppScope) -> SessionResponse {
    debug!("sign_out command");
    scope.state::<SessionState>().with_session_mut(|s| {
        s.sign_out();
        SessionResponse::from(&*s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;
    use crate::state::ConfigState;
    use atelier_store::MemoryStorage;

    fn scope_with(storage: MemoryStorage) -> AppScope {
        bootstrap(ConfigState::default(), Box::new(storage))
    }

    #[test]
    fn test_fresh_scope_is_signed_out() {
        let scope = scope_with(MemoryStorage::new());
        assert_eq!(
            get_session(&scope),
            SessionResponse {
                is_signed_in: false,
                user: None,
            }
        );
    }

    #[test]
    fn test_sign_in_then_out() {
        let scope = scope_with(MemoryStorage::new());

        let session = sign_in(&scope, Some(User::new("a@b.com")));
        assert!(session.is_signed_in);
        assert_eq!(session.user, Some(User::new("a@b.com")));
        assert_eq!(get_session(&scope), session);

        let session = sign_out(&scope);
        assert!(!session.is_signed_in);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_sign_in_accepts_any_identity() {
        let scope = scope_with(MemoryStorage::new());
        let session = sign_in(&scope, Some(User::new("collector")));
        assert!(session.is_signed_in);
        assert_eq!(session.user, Some(User::new("collector")));
        assert!(get_session(&scope).is_signed_in);
    }

    #[test]
    fn test_sign_in_without_user_keeps_prior_user() {
        let scope = scope_with(MemoryStorage::new());
        sign_in(&scope, Some(User::new("a@b.com")));
        let session = sign_in(&scope, None);
        assert!(session.is_signed_in);
        assert_eq!(session.user, Some(User::new("a@b.com")));
    }

    #[test]
    fn test_restored_session_visible_through_command() {
        let scope = scope_with(MemoryStorage::with_entries([
            ("authToken", "tok"),
            ("user", r#"{"emailId":"a@b.com"}"#),
        ]));
        assert_eq!(get_session(&scope).user, Some(User::new("a@b.com")));
    }

    #[test]
    fn test_response_wire_shape() {
        let json = serde_json::to_string(&SessionResponse {
            is_signed_in: true,
            user: Some(User::new("a@b.com")),
        })
        .unwrap();
        assert_eq!(json, r#"{"isSignedIn":true,"user":{"emailId":"a@b.com"}}"#);
    }

    #[test]
    #[should_panic(expected = "outside an initialized scope")]
    fn test_session_outside_scope_panics() {
        get_session(&AppScope::new());
    }
}
