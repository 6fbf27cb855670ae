//! # atelier-store: Client-Side Persistence for Atelier
//!
//! This crate provides the synchronous, device-local key-value storage that
//! mirrors the authenticated session across process restarts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Atelier Data Flow                                │
//! │                                                                         │
//! │  SessionStore (storefront app)                                         │
//! │       │  hydrate / sign_in / sign_out                                   │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   atelier-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐    ┌─────────────────┐                    │   │
//! │  │   │CredentialMirror│───►│ KeyValueStorage │ (port)             │   │
//! │  │   │ authToken      │    └────────┬────────┘                    │   │
//! │  │   │ user           │        ┌────┴─────────────┐               │   │
//! │  │   └────────────────┘        ▼                  ▼               │   │
//! │  │                       MemoryStorage       FileStorage          │   │
//! │  │                       (tests)             (credentials.json)   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `KeyValueStorage` port and the in-memory adapter
//! - [`file`] - JSON-file adapter in the platform data directory
//! - [`credentials`] - Typed access to the `authToken` / `user` entries
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use atelier_core::User;
//! use atelier_store::{CredentialMirror, MemoryStorage};
//!
//! let mut mirror = CredentialMirror::new(MemoryStorage::new());
//! mirror.store_token("opaque").unwrap();
//! mirror.store_user(&User::new("a@b.com")).unwrap();
//!
//! let persisted = mirror.read().unwrap();
//! assert!(persisted.token.is_some());
//!
//! mirror.clear().unwrap();
//! assert!(mirror.read().unwrap().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod credentials;
pub mod error;
pub mod file;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use credentials::{CredentialMirror, PersistedCredentials};
pub use error::{StoreError, StoreResult};
pub use file::FileStorage;
pub use storage::{BoxedStorage, KeyValueStorage, MemoryStorage};
