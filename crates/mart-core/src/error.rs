//! # Error Types
//!
//! Domain-specific error types for mart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  mart-core errors (this file)                                       │
//! │  ├── CoreError        - Lookup and catalog construction failures    │
//! │  └── ValidationError  - Per-field catalog entry validation          │
//! │                                                                     │
//! │  CLI (apps/cli)                                                     │
//! │  └── anyhow::Error    - Wraps CoreError + file I/O at the boundary  │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → anyhow → stderr + exit 1       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, entry index)
//! 3. Errors are enum variants, never String
//! 4. All errors are terminal for the run - no retries, no partial output

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry matches the requested name.
    ///
    /// ## When This Occurs
    /// The requested product name has no exact (case-sensitive, untrimmed)
    /// match in the catalog. Lookup fails fast here; downstream quote math
    /// never runs against an absent product.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A catalog entry failed validation at construction time.
    ///
    /// ## When This Occurs
    /// - Negative price in a supplied catalog file
    /// - Empty product name
    #[error("Malformed catalog entry #{index} ({name:?}): {reason}")]
    MalformedCatalogEntry {
        index: usize,
        name: String,
        reason: ValidationError,
    },

    /// The supplied catalog document is not valid JSON for the expected
    /// product list shape.
    #[error("Invalid catalog JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Per-field validation errors.
///
/// Used for early validation of catalog entries before any quote runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

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
    fn test_product_not_found_message() {
        let err = CoreError::ProductNotFound("solar shades".to_string());
        assert_eq!(err.to_string(), "Product not found: solar shades");
    }

    #[test]
    fn test_malformed_entry_message() {
        let err = CoreError::MalformedCatalogEntry {
            index: 3,
            name: "beanie".to_string(),
            reason: ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("entry #3"));
        assert!(msg.contains("beanie"));
        assert!(msg.contains("price must be between"));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
