//! # Atelier Storefront Library
//!
//! Application layer of the Atelier storefront: wires configuration, the
//! credential mirror, and per-concern state into an [`AppScope`], and exposes
//! the commands the presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! atelier_storefront/
//! ├── lib.rs          ◄─── You are here (startup & bootstrap)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── scope.rs    ◄─── AppScope (typed state registry)
//! │   ├── session.rs  ◄─── Session + credential mirror
//! │   ├── filters.rs  ◄─── Sale-type filter & view mode
//! │   ├── catalog.rs  ◄─── Catalog paginator
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── get_session, sign_in, sign_out
//! │   ├── catalog.rs  ◄─── Page window & navigation
//! │   ├── filters.rs  ◄─── get_filters, set_sale_type, set_view_mode
//! │   └── config.rs   ◄─── get_config
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use atelier_store::{BoxedStorage, FileStorage};
use error::ApiError;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppScope, CatalogState, ConfigState, FilterState, SessionState};

/// Runs storefront startup and returns the initialized scope.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,atelier=debug; override with RUST_LOG               │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • storefront.toml, then ATELIER_* environment variables             │
/// │                                                                         │
/// │  3. Open Credential Mirror ───────────────────────────────────────────► │
/// │     • ATELIER_STORAGE_PATH / storage_path, else platform data dir       │
/// │                                                                         │
/// │  4. Bootstrap Scope ──────────────────────────────────────────────────► │
/// │     • Hydrate session (exactly once)                                    │
/// │     • Manage Config, Session, Filter, Catalog state                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// `STORAGE_ERROR` if the credential mirror cannot be opened.
pub fn run() -> Result<AppScope, ApiError> {
    init_tracing();

    info!("Starting Atelier storefront");

    let config = ConfigState::load_or_default(None);
    info!(store_name = %config.store_name, page_size = config.page_size, "Configuration loaded");

    let storage = match &config.storage_path {
        Some(path) => FileStorage::open(path)?,
        None => FileStorage::open_default()?,
    };
    info!(path = ?storage.path(), "Credential mirror opened");

    Ok(bootstrap(config, Box::new(storage)))
}

/// Builds a scope over `storage` and registers every state type.
///
/// The session is hydrated here and nowhere else.
pub fn bootstrap(config: ConfigState, storage: BoxedStorage) -> AppScope {
    let mut scope = AppScope::new();

    scope.manage(SessionState::hydrate(storage));
    scope.manage(FilterState::default());
    scope.manage(CatalogState::default());
    scope.manage(config);

    info!("State initialized");
    scope
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=atelier=trace` - Show trace for atelier crates only
/// - Default: `info,atelier=debug`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,atelier=debug"));

    // A subscriber may already be installed when embedded in a host.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
