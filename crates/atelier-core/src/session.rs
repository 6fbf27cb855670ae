//! # Session
//!
//! In-memory authentication state and the rules for restoring it from the
//! persisted credential mirror.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Lifecycle                                │
//! │                                                                         │
//! │   process start                                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌─────────────┐  Hydration::Restored   ┌─────────────┐                │
//! │  │ signed-out  │ ─────────────────────► │  signed-in  │                │
//! │  │ user: None  │ ◄───── sign_out() ──── │  user: ?    │                │
//! │  └─────────────┘ ───── sign_in(_) ────► └─────────────┘                │
//! │        ▲                                                                │
//! │        │ Hydration::Corrupt / Empty (state unchanged)                   │
//! │                                                                         │
//! │   process end: session dropped (only the mirror survives)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Invariant Gap
//! `sign_in(None)` sets `is_signed_in = true` and keeps whatever user was
//! there before, so a signed-in session with no user is reachable. This is
//! permitted on purpose; callers must not assume `current_user` is `Some`
//! whenever `is_signed_in` is true.

use serde::{Deserialize, Serialize};

use crate::types::User;

// =============================================================================
// Session
// =============================================================================

/// Process-lifetime authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    is_signed_in: bool,
    current_user: Option<User>,
}

impl Session {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Session::default()
    }

    #[inline]
    pub fn is_signed_in(&self) -> bool {
        self.is_signed_in
    }

    #[inline]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Marks the session signed in.
    ///
    /// With a payload the current user is replaced; without one the prior
    /// user (possibly `None`) is kept.
    pub fn sign_in(&mut self, user: Option<User>) {
        self.is_signed_in = true;
        if let Some(user) = user {
            self.current_user = Some(user);
        }
    }

    /// Returns the session to the signed-out default.
    pub fn sign_out(&mut self) {
        self.is_signed_in = false;
        self.current_user = None;
    }

    /// Applies the outcome of hydration.
    ///
    /// Only [`Hydration::Restored`] changes state; corrupt or empty mirrors
    /// leave the session as it was.
    pub fn apply(&mut self, hydration: &Hydration) {
        if let Hydration::Restored(user) = hydration {
            self.is_signed_in = true;
            self.current_user = Some(user.clone());
        }
    }
}

// =============================================================================
// Hydration
// =============================================================================

/// What the persisted credential mirror says about the previous process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// Token present and the user record parsed.
    Restored(User),
    /// Mirror is partial or unparsable; both entries must be cleared.
    Corrupt,
    /// Nothing persisted.
    Empty,
}

impl Hydration {
    /// Classifies the two raw persisted entries.
    ///
    /// ## Decision Table
    /// ```text
    /// authToken   user              →  outcome
    /// ─────────   ───────────────      ─────────
    /// absent      absent               Empty
    /// present     parses as User       Restored(user)
    /// present     absent / malformed   Corrupt
    /// absent      present (any)        Corrupt
    /// ```
    ///
    /// The token is presence-only and never inspected.
    ///
    /// A user record without a token, even a well-formed one, is a partial
    /// write like any other: sign-in writes the user only after the external
    /// flow has stored the token, so a lone user means the pair was torn.
    /// Clearing it keeps "only `user` present" on the same recovery path as
    /// "token with a malformed `user`".
    pub fn from_persisted(token: Option<&str>, user: Option<&str>) -> Self {
        match (token, user) {
            (None, None) => Hydration::Empty,
            (Some(_), Some(raw)) => match User::from_json(raw) {
                Ok(user) => Hydration::Restored(user),
                Err(_) => Hydration::Corrupt,
            },
            (Some(_), None) | (None, Some(_)) => Hydration::Corrupt,
        }
    }

    #[inline]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Hydration::Corrupt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signed_out() {
        let session = Session::new();
        assert!(!session.is_signed_in());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_sign_in_with_user() {
        let mut session = Session::new();
        session.sign_in(Some(User::new("a@b.com")));
        assert!(session.is_signed_in());
        assert_eq!(session.current_user().unwrap().email_id, "a@b.com");

        // Idempotent
        let snapshot = session.clone();
        session.sign_in(Some(User::new("a@b.com")));
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_sign_in_without_payload_keeps_prior_user() {
        let mut session = Session::new();
        session.sign_in(None);
        assert!(session.is_signed_in());
        assert!(session.current_user().is_none());

        session.sign_in(Some(User::new("a@b.com")));
        session.sign_in(None);
        assert_eq!(session.current_user().unwrap().email_id, "a@b.com");
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let mut session = Session::new();
        session.sign_in(Some(User::new("a@b.com")));
        session.sign_out();
        assert_eq!(session, Session::default());
        session.sign_out();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_hydration_decision_table() {
        let valid = r#"{"emailId":"a@b.com"}"#;

        assert_eq!(Hydration::from_persisted(None, None), Hydration::Empty);
        assert_eq!(
            Hydration::from_persisted(Some("tok"), Some(valid)),
            Hydration::Restored(User::new("a@b.com"))
        );
        assert_eq!(Hydration::from_persisted(Some("tok"), None), Hydration::Corrupt);
        assert_eq!(
            Hydration::from_persisted(Some("tok"), Some("{not json")),
            Hydration::Corrupt
        );
        assert_eq!(Hydration::from_persisted(None, Some(valid)), Hydration::Corrupt);
        assert_eq!(Hydration::from_persisted(None, Some("garbage")), Hydration::Corrupt);
    }

    #[test]
    fn test_apply_only_changes_state_when_restored() {
        let mut session = Session::new();
        session.apply(&Hydration::Corrupt);
        assert_eq!(session, Session::default());
        session.apply(&Hydration::Empty);
        assert_eq!(session, Session::default());

        session.apply(&Hydration::Restored(User::new("a@b.com")));
        assert!(session.is_signed_in());
        assert_eq!(session.current_user(), Some(&User::new("a@b.com")));
    }
}
