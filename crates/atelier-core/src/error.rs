//! # Error Types
//!
//! Domain-specific error types for atelier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atelier-core errors (this file)                                       │
//! │  ├── CoreError        - Rejected paginator navigation                  │
//! │  └── ValidationError  - Page and page-size range checks                │
//! │                                                                         │
//! │  atelier-store errors (separate crate)                                 │
//! │  └── StoreError       - Credential mirror I/O failures                 │
//! │                                                                         │
//! │  Storefront API errors (in app)                                        │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Presentation layer                       │
//! │        ValidationError → ConfigError (page size) / PageOutOfRange      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A corrupt credential mirror is deliberately absent from this hierarchy:
//! hydration heals it silently and reports nothing to the caller.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested page lies outside `[1, total_pages]`.
    ///
    /// ## When This Occurs
    /// - A page marker from a stale window is activated after the total shrank
    /// - A caller asks for page 0 or a page past the end
    #[error("Page {requested} is out of range (1..={total_pages})")]
    PageOutOfRange { requested: u32, total_pages: u32 },

    /// Previous/next navigation requested at a boundary.
    ///
    /// ## When This Occurs
    /// ```text
    /// Page 1 of 20          Page 20 of 20
    ///   [‹ Prev]  ← disabled      [Next ›]  ← disabled
    ///      │                          │
    ///      ▼                          ▼
    /// NavigationUnavailable    NavigationUnavailable
    /// { direction: Previous }  { direction: Next }
    /// ```
    #[error("Cannot go to {direction} page from page {current_page} of {total_pages}")]
    NavigationUnavailable {
        direction: NavDirection,
        current_page: u32,
        total_pages: u32,
    },
}

/// Direction of a relative paginator move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

impl std::fmt::Display for NavDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavDirection::Previous => write!(f, "previous"),
            NavDirection::Next => write!(f, "next"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PageOutOfRange {
            requested: 21,
            total_pages: 20,
        };
        assert_eq!(err.to_string(), "Page 21 is out of range (1..=20)");

        let err = CoreError::NavigationUnavailable {
            direction: NavDirection::Previous,
            current_page: 1,
            total_pages: 20,
        };
        assert_eq!(
            err.to_string(),
            "Cannot go to previous page from page 1 of 20"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: 20,
        };
        assert_eq!(err.to_string(), "page must be between 1 and 20");
    }
}
