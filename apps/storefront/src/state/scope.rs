//! # App Scope
//!
//! Typed registry of application state, handed explicitly to every command.
//!
//! ## Scope Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppScope                                             │
//! │                                                                         │
//! │  startup:  scope.manage(SessionState)  scope.manage(FilterState) ...   │
//! │                                                                         │
//! │  command:  scope.state::<SessionState>()                               │
//! │                 │                                                       │
//! │                 ├── managed ──────► &SessionState                      │
//! │                 │                                                       │
//! │                 └── not managed ──► PANIC (contract violation)         │
//! │                                                                         │
//! │  probing:  scope.try_state::<SessionState>()                           │
//! │                 └── not managed ──► Err(ScopeError::NotManaged)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reaching for state that was never managed is a wiring bug at the call
//! site, not a runtime condition, so [`AppScope::state`] fails loudly.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use thiserror::Error;

/// Errors resolving state from an [`AppScope`].
#[derive(Debug, Error)]
pub enum ScopeError {
    /// The requested state type was never registered.
    #[error("{type_name} requested outside an initialized scope (call AppScope::manage first)")]
    NotManaged { type_name: &'static str },
}

/// Container of managed state, one value per type.
#[derive(Default)]
pub struct AppScope {
    states: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl AppScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        AppScope::default()
    }

    /// Registers `state`.
    ///
    /// Returns `false` and keeps the existing value if a state of the same
    /// type is already managed.
    pub fn manage<T: Send + Sync + 'static>(&mut self, state: T) -> bool {
        let id = TypeId::of::<T>();
        if self.states.contains_key(&id) {
            return false;
        }
        self.states.insert(id, Box::new(state));
        true
    }

    /// Returns true if a state of type `T` is managed.
    pub fn is_managed<T: Send + Sync + 'static>(&self) -> bool {
        self.states.contains_key(&TypeId::of::<T>())
    }

    /// Resolves a managed state, or reports which type is missing.
    pub fn try_state<T: Send + Sync + 'static>(&self) -> Result<&T, ScopeError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.downcast_ref::<T>())
            .ok_or(ScopeError::NotManaged {
                type_name: type_name::<T>(),
            })
    }

    /// Resolves a managed state.
    ///
    /// # Panics
    /// Panics if `T` was never passed to [`AppScope::manage`].
    pub fn state<T: Send + Sync + 'static>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::fmt::Debug for AppScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppScope")
            .field("managed", &self.states.len())
            .finish()
    }
}
