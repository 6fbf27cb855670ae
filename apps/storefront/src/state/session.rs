//! # Session State
//!
//! Single source of truth for "is this client authenticated, and as whom",
//! with a best-effort durable mirror.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Call                  In-memory Session          Credential Mirror     │
//! │  ────                  ─────────────────          ─────────────────     │
//! │                                                                         │
//! │  hydrate(storage) ───► Restored → signed-in  ◄─── read authToken+user  │
//! │                        Corrupt  → signed-out ───► clear both           │
//! │                        Empty    → signed-out                           │
//! │                                                                         │
//! │  sign_in(Some(u)) ───► signed-in, user = u   ───► write user           │
//! │  sign_in(None) ──────► signed-in, user kept       (untouched)          │
//! │                                                                         │
//! │  sign_out() ─────────► signed-out, user None ───► clear both           │
//! │                                                                         │
//! │  NOTE: Mirror failures are logged, never returned. The in-memory        │
//! │        session is authoritative for the life of the process.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use atelier_core::{Hydration, Session, User};
use atelier_store::{BoxedStorage, CredentialMirror, KeyValueStorage};
use tracing::{debug, info, warn};

/// Session plus its persisted credential mirror.
///
/// ## Construction
/// The only constructor is [`SessionStore::hydrate`], so the one-time
/// restore from storage always happens before any other operation.
pub struct SessionStore<S = BoxedStorage> {
    session: Session,
    mirror: CredentialMirror<S>,
    hydration: Hydration,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Builds the store and restores the session from `storage`.
    ///
    /// ## Behavior
    /// - token + parsable user: signed in as that user
    /// - partial or unparsable mirror: both entries cleared, signed out
    /// - nothing persisted: signed out
    ///
    /// Never fails; storage read errors count as "nothing persisted".
    pub fn hydrate(storage: S) -> Self {
        let mut mirror = CredentialMirror::new(storage);

        let persisted = mirror.read().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read credential mirror, starting signed out");
            Default::default()
        });

        let hydration =
            Hydration::from_persisted(persisted.token.as_deref(), persisted.user.as_deref());

        if hydration.is_corrupt() {
            warn!(
                has_token = persisted.token.is_some(),
                has_user = persisted.user.is_some(),
                "Credential mirror corrupt, clearing"
            );
            if let Err(e) = mirror.clear() {
                warn!(error = %e, "Failed to clear corrupt credential mirror");
            }
        }

        let mut session = Session::new();
        session.apply(&hydration);

        match &hydration {
            Hydration::Restored(user) => info!(email_id = %user.email_id, "Session restored"),
            Hydration::Corrupt => info!("Session reset after corrupt mirror"),
            Hydration::Empty => debug!("No persisted session"),
        }

        SessionStore {
            session,
            mirror,
            hydration,
        }
    }

    #[inline]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    #[inline]
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Outcome of the startup hydration.
    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    /// Signs in, optionally as `user`.
    ///
    /// With a payload the user is also written to the mirror. The token entry
    /// is owned by the external credential-issuance flow and is not touched.
    /// Without a payload the session becomes signed in but keeps its prior
    /// user, which may be `None`.
    ///
    /// A restart restores this session only if the token entry was written
    /// (see [`CredentialMirror::store_token`]) before the next hydration; a
    /// user without a token is treated as a torn write and cleared.
    pub fn sign_in(&mut self, user: Option<User>) {
        if let Some(user) = &user {
            if let Err(e) = self.mirror.store_user(user) {
                warn!(error = %e, "Failed to persist user, session kept in memory only");
            }
        }
        self.session.sign_in(user);
        info!(
            email_id = self.session.current_user().map(|u| u.email_id.as_str()),
            "Signed in"
        );
    }

    /// Signs out and removes both mirror entries, whether present or not.
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        if let Err(e) = self.mirror.clear() {
            warn!(error = %e, "Failed to clear credential mirror on sign out");
        }
        info!("Signed out");
    }

    pub fn mirror(&self) -> &CredentialMirror<S> {
        &self.mirror
    }

    /// Mutable mirror access for the external token-issuance flow.
    pub fn mirror_mut(&mut self) -> &mut CredentialMirror<S> {
        &mut self.mirror
    }

    /// Tears the store down, handing back the storage.
    pub fn into_storage(self) -> S {
        self.mirror.into_inner()
    }
}

impl<S> std::fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("hydration", &self.hydration)
            .finish_non_exhaustive()
    }
}

/// Scope-managed session state.
///
/// ## Thread Safety
/// The storefront drives this from a single UI event loop; the `Mutex` only
/// exists so the state can sit in an [`AppScope`](super::AppScope), which
/// requires `Send + Sync`.
#[derive(Debug)]
pub struct SessionState {
    store: Mutex<SessionStore>,
}

impl SessionState {
    pub fn new(store: SessionStore) -> Self {
        SessionState {
            store: Mutex::new(store),
        }
    }

    /// Hydrates a session from `storage` and wraps it.
    pub fn hydrate(storage: BoxedStorage) -> Self {
        SessionState::new(SessionStore::hydrate(storage))
    }

    /// Executes a function with read access to the session store.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionStore) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the session store.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_store::{FileStorage, MemoryStorage, StoreError, StoreResult};

    const VALID_USER: &str = r#"{"emailId":"a@b.com"}"#;

    /// Simulates a process restart over the same persisted entries.
    fn restart(store: SessionStore<MemoryStorage>) -> SessionStore<MemoryStorage> {
        SessionStore::hydrate(store.into_storage())
    }

    /// Storage that rejects every write.
    #[derive(Default)]
    struct ReadOnly(MemoryStorage);

    impl KeyValueStorage for ReadOnly {
        fn get(&self, key: &str) -> StoreResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }

        fn remove(&mut self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_hydrate_empty_storage() {
        let store = SessionStore::hydrate(MemoryStorage::new());
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
        assert_eq!(store.hydration(), &Hydration::Empty);
    }

    #[test]
    fn test_sign_in_survives_restart() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.mirror_mut().store_token("issued-elsewhere").unwrap();
        store.sign_in(Some(User::new("a@b.com")));

        let store = restart(store);
        assert!(store.is_signed_in());
        assert_eq!(store.current_user().unwrap().email_id, "a@b.com");
    }

    #[test]
    fn test_sign_out_clears_mirror_and_survives_restart() {
        let mut store = SessionStore::hydrate(MemoryStorage::with_entries([
            ("authToken", "tok"),
            ("user", VALID_USER),
        ]));
        assert!(store.is_signed_in());

        store.sign_out();
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
        assert!(store.mirror().read().unwrap().is_empty());

        let store = restart(store);
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.sign_out();
        store.sign_out();
        assert!(!store.is_signed_in());
        assert!(store.mirror().storage().is_empty());
    }

    #[test]
    fn test_user_without_token_is_corrupt() {
        let store = SessionStore::hydrate(MemoryStorage::with_entries([("user", "{malformed")]));
        assert_eq!(store.hydration(), &Hydration::Corrupt);
        assert!(!store.is_signed_in());
        assert!(store.mirror().storage().is_empty());
    }

    #[test]
    fn test_token_with_unparsable_user_is_corrupt() {
        let store = SessionStore::hydrate(MemoryStorage::with_entries([
            ("authToken", "tok"),
            ("user", "not json at all"),
        ]));
        assert_eq!(store.hydration(), &Hydration::Corrupt);
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
        assert!(store.mirror().read().unwrap().is_empty());
    }

    #[test]
    fn test_token_without_user_is_corrupt() {
        let store = SessionStore::hydrate(MemoryStorage::with_entries([("authToken", "tok")]));
        assert_eq!(store.hydration(), &Hydration::Corrupt);
        assert!(store.mirror().storage().is_empty());
    }

    #[test]
    fn test_sign_in_without_payload() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.sign_in(None);
        assert!(store.is_signed_in());
        assert!(store.current_user().is_none());
        // Nothing written
        assert!(store.mirror().storage().is_empty());
    }

    #[test]
    fn test_sign_in_twice_same_state() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.sign_in(Some(User::new("a@b.com")));
        let first = (store.session().clone(), store.mirror().storage().clone());
        store.sign_in(Some(User::new("a@b.com")));
        assert_eq!(first, (store.session().clone(), store.mirror().storage().clone()));
    }

    #[test]
    fn test_storage_failures_do_not_fail_session_calls() {
        let mut store = SessionStore::hydrate(ReadOnly::default());
        store.sign_in(Some(User::new("a@b.com")));
        assert!(store.is_signed_in());
        assert_eq!(store.current_user().unwrap().email_id, "a@b.com");

        store.sign_out();
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let mut store = SessionStore::hydrate(FileStorage::open(&path).unwrap());
        store.mirror_mut().store_token("tok").unwrap();
        store.sign_in(Some(User::new("a@b.com")));
        drop(store);

        let store = SessionStore::hydrate(FileStorage::open(&path).unwrap());
        assert!(store.is_signed_in());
        assert_eq!(store.current_user().unwrap().email_id, "a@b.com");
    }

    #[test]
    fn test_sign_in_without_token_does_not_survive_restart() {
        let mut store = SessionStore::hydrate(MemoryStorage::new());
        store.sign_in(Some(User::new("a@b.com")));

        let store = restart(store);
        assert_eq!(store.hydration(), &Hydration::Corrupt);
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_sign_out_retry_after_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("data");
        let path = parent.join("credentials.json");

        let mut store = SessionStore::hydrate(FileStorage::open(&path).unwrap());
        store.mirror_mut().store_token("tok").unwrap();
        store.sign_in(Some(User::new("a@b.com")));

        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "not a directory").unwrap();
        store.sign_out();
        assert!(!store.is_signed_in());
        // The failed removal is still pending
        assert!(!store.mirror().read().unwrap().is_empty());

        std::fs::remove_file(&parent).unwrap();
        std::fs::create_dir(&parent).unwrap();
        // Disk still holds the credentials the failed sign-out could not remove
        std::fs::write(&path, r#"{"authToken":"tok","user":"{\"emailId\":\"a@b.com\"}"}"#)
            .unwrap();
        store.sign_out();
        assert!(store.mirror().read().unwrap().is_empty());

        let store = SessionStore::hydrate(FileStorage::open(&path).unwrap());
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_session_state_wrapper() {
        let state = SessionState::hydrate(Box::new(MemoryStorage::new()));
        state.with_session_mut(|s| s.sign_in(Some(User::new("a@b.com"))));
        assert!(state.with_session(|s| s.is_signed_in()));
        state.with_session_mut(|s| s.sign_out());
        assert!(!state.with_session(|s| s.is_signed_in()));
    }
}
