//! # API Error Type
//!
//! Unified error type for storefront commands and startup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Atelier                                │
//! │                                                                         │
//! │  Presentation                Rust Application Layer                     │
//! │  ────────────                ──────────────────────                     │
//! │                                                                         │
//! │  change_page(21)                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Navigation Error? ─── CoreError::PageOutOfRange ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Boundary move? ────── NavigationUnavailable ──── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NAVIGATION_ERROR",                                          │
//! │    "message": "Page 21 is out of range (1..=20)" }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::CoreError;
use atelier_store::StoreError;
use serde::Serialize;

/// API error returned from storefront commands and startup.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NAVIGATION_ERROR",
///   "message": "Page 21 is out of range (1..=20)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Page change rejected (out of range or at a boundary)
    NavigationError,

    /// Credential mirror could not be opened
    StorageError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn navigation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NavigationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PageOutOfRange { .. } | CoreError::NavigationUnavailable { .. } => {
                ApiError::navigation(err.to_string())
            }
        }
    }
}

/// Converts storage errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DataDirUnavailable => {
                ApiError::new(ErrorCode::StorageError, "Could not determine app data directory")
            }
            other => {
                // Log the actual error but return a generic message
                tracing::error!("Credential storage failed: {}", other);
                ApiError::new(ErrorCode::StorageError, "Credential storage failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
