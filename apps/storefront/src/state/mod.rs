//! # State Module
//!
//! Manages application state for the storefront.
//!
//! Each concern gets its own state type, registered once in an [`AppScope`]
//! at startup and resolved by the commands that need it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppScope                                   │   │
//! │  │  scope.manage(config_state);                                    │   │
//! │  │  scope.manage(session_state);                                   │   │
//! │  │  scope.manage(filter_state);                                    │   │
//! │  │  scope.manage(catalog_state);                                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴──────┬──────────────┐                   │
//! │       ▼              ▼              ▼              ▼                    │
//! │  ┌──────────┐  ┌───────────┐  ┌───────────┐  ┌──────────────┐          │
//! │  │ Session  │  │  Filter   │  │  Catalog  │  │   Config     │          │
//! │  │ State    │  │  State    │  │  State    │  │   State      │          │
//! │  │          │  │           │  │           │  │              │          │
//! │  │ Mutex<   │  │ Mutex<    │  │ Mutex<    │  │ store_name   │          │
//! │  │ Session  │  │ Filter    │  │ Catalog   │  │ page_size    │          │
//! │  │ Store>   │  │ Selection>│  │ Pager>    │  │ wallet       │          │
//! │  └──────────┘  └───────────┘  └───────────┘  └──────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Session/Filter/Catalog: Mutex for exclusive access                  │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod filters;
mod scope;
mod session;

pub use catalog::{CatalogPager, CatalogState};
pub use config::{ConfigError, ConfigResult, ConfigState, WalletConfig, CONFIG_FILE_NAME};
pub use filters::{FilterSelection, FilterState, FiltersSnapshot, Listener};
pub use scope::{AppScope, ScopeError};
pub use session::{SessionState, SessionStore};
