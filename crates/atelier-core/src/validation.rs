//! # Validation Module
//!
//! Input validation utilities for the storefront core.
//!
//! ## Usage
//! ```rust
//! use atelier_core::validation::{validate_page, validate_page_size};
//!
//! validate_page_size(12).unwrap();
//! validate_page(3, 20).unwrap();
//! assert!(validate_page(21, 20).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a 1-indexed page number against a page count.
///
/// ## Rules
/// - Must be in `1..=total_pages`
/// - With zero pages no page is valid
pub fn validate_page(page: u32, total_pages: u32) -> ValidationResult<()> {
    if page == 0 || page > total_pages {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: i64::from(total_pages),
        });
    }

    Ok(())
}

/// Validates a catalog page size.
pub fn validate_page_size(page_size: u32) -> ValidationResult<()> {
    if page_size == 0 || page_size > 200 {
        return Err(ValidationError::OutOfRange {
            field: "pageSize".to_string(),
            min: 1,
            max: 200,
        });
    }

    Ok(())
}

/// Number of pages needed to show `item_count` items, `page_size` at a time.
///
/// ## Example
/// ```rust
/// use atelier_core::validation::page_count;
///
/// assert_eq!(page_count(0, 12), 0);
/// assert_eq!(page_count(12, 12), 1);
/// assert_eq!(page_count(13, 12), 2);
/// ```
pub fn page_count(item_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = item_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1, 1).is_ok());
        assert!(validate_page(20, 20).is_ok());

        assert!(validate_page(0, 20).is_err());
        assert!(validate_page(21, 20).is_err());
        assert!(validate_page(1, 0).is_err());
    }

    #[test]
    fn test_validate_page_size() {
        assert!(validate_page_size(12).is_ok());
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(201).is_err());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(1, 12), 1);
        assert_eq!(page_count(240, 12), 20);
        assert_eq!(page_count(241, 12), 21);
        assert_eq!(page_count(10, 0), 0);
    }
}
