//! # Credential Mirror
//!
//! Typed access to the two persisted entries behind a session:
//! the opaque `authToken` and the JSON-serialized `user`.
//!
//! The two entries are meant to be present together or absent together.
//! This module only reads and writes them; deciding whether a pair is
//! consistent belongs to `atelier_core::Hydration`.

use atelier_core::{User, AUTH_TOKEN_KEY, USER_KEY};

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

/// Raw persisted entries, exactly as found in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedCredentials {
    pub token: Option<String>,
    pub user: Option<String>,
}

impl PersistedCredentials {
    /// True when neither entry is present.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// The durable mirror of the session, over any [`KeyValueStorage`].
#[derive(Debug)]
pub struct CredentialMirror<S> {
    storage: S,
}

impl<S: KeyValueStorage> CredentialMirror<S> {
    pub fn new(storage: S) -> Self {
        CredentialMirror { storage }
    }

    /// Reads both entries.
    pub fn read(&self) -> StoreResult<PersistedCredentials> {
        Ok(PersistedCredentials {
            token: self.storage.get(AUTH_TOKEN_KEY)?,
            user: self.storage.get(USER_KEY)?,
        })
    }

    /// Writes the token entry. Tokens are minted outside this system; this is
    /// the hook the external credential-issuance flow uses.
    pub fn store_token(&mut self, token: &str) -> StoreResult<()> {
        self.storage.set(AUTH_TOKEN_KEY, token)
    }

    /// Writes the serialized user entry.
    pub fn store_user(&mut self, user: &User) -> StoreResult<()> {
        let json = user.to_json()?;
        self.storage.set(USER_KEY, &json)
    }

    /// Removes both entries.
    ///
    /// Both removals are attempted even if the first fails; the first error
    /// is returned.
    pub fn clear(&mut self) -> StoreResult<()> {
        let token = self.storage.remove(AUTH_TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
