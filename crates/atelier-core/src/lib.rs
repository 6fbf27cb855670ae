//! # atelier-core: Pure Domain Logic for the Atelier Storefront
//!
//! This crate holds every piece of client-side logic that has real
//! invariants, as pure functions and plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Atelier Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation Layer (external)                     │   │
//! │  │    Catalog Grid ──► Paginator ──► Filters ──► Account Menu     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Storefront App (scoped state)                   │   │
//! │  │    get_session, sign_in, get_page_window, set_sale_type, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atelier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ pagination │  │  session  │  │validation│  │   │
//! │  │   │   User    │  │ PageWindow │  │  Session  │  │  rules   │  │   │
//! │  │   │ SaleType  │  │ Paginator  │  │ Hydration │  │  checks  │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              atelier-store (Credential Mirror)                  │   │
//! │  │              authToken / user keys, local file                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, SaleType, ViewMode)
//! - [`pagination`] - Page window computation and paginator navigation
//! - [`session`] - Session state transitions and hydration decisions
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use atelier_core::pagination::{compute_window, PageMarker};
//!
//! let window = compute_window(10, 20);
//! assert_eq!(
//!     window.markers(),
//!     &[
//!         PageMarker::page(1),
//!         PageMarker::Ellipsis,
//!         PageMarker::page(9),
//!         PageMarker::page(10),
//!         PageMarker::page(11),
//!         PageMarker::Ellipsis,
//!         PageMarker::page(20),
//!     ]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use pagination::{compute_window, PageMarker, PageWindow, Paginator};
pub use session::{Hydration, Session};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key of the opaque authentication token in the credential mirror.
///
/// The token is presence-only: it is never parsed by this crate.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key of the JSON-serialized [`User`] in the credential mirror.
pub const USER_KEY: &str = "user";

/// Largest page count that is rendered in full, without ellipses.
pub const FULL_WINDOW_MAX_PAGES: u32 = 7;

/// Number of pages at either end of the range that count as "near the edge".
pub const EDGE_SPAN: u32 = 3;
