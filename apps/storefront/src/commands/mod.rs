//! # Storefront Commands Module
//!
//! All commands exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── get_session, sign_in, sign_out
//! ├── catalog.rs  ◄─── Page window and page navigation
//! ├── filters.rs  ◄─── Sale-type filter and view mode
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation layer                                                     │
//! │  ──────────────────                                                     │
//! │  commands::catalog::change_page(&scope, 11)                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn change_page(                                                        │
//! │      scope: &AppScope,        ◄── Built once by bootstrap()            │
//! │      page: u32,               ◄── From the activated marker            │
//! │  ) -> Result<CatalogResponse, ApiError>                                 │
//! │         │                                                               │
//! │         │ scope.state::<CatalogState>()  ◄── panics if never managed   │
//! │         ▼                                                               │
//! │  Presentation receives: CatalogResponse (serde, camelCase)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command resolves only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn get_session(scope: &AppScope) -> SessionResponse
//!
//! // Needs the catalog and the configured page size
//! fn set_catalog_size(scope: &AppScope, item_count: u64) -> CatalogResponse
//! ```

pub mod catalog;
pub mod config;
pub mod filters;
pub mod session;
