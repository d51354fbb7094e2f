//! # Error Types
//!
//! Domain-specific error types for lane-core.
//!
//! ## Error Hierarchy
//! ```text
//! lane-core errors (this file)
//! ├── CoreError        - Checkout / cart / catalog domain errors
//! └── ValidationError  - Input validation failures
//!
//! lane-catalog errors (separate crate)
//! └── CatalogSourceError - Product-file loading failures
//!
//! Flow: ValidationError → CoreError → caller
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending SKU, the cap hit)
//! 3. Errors are enum variants, never String
//! 4. None of these are transient: no retry semantics anywhere

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout domain errors.
///
/// These represent business rule violations. All of them are synchronous and
/// local to the call that raised them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A scanned SKU failed format validation before touching the cart.
    ///
    /// Recoverable: the caller rejects the scan and carries on.
    #[error("invalid SKU: {0}")]
    InvalidSku(#[source] ValidationError),

    /// A scanned SKU is not present in the catalog.
    ///
    /// Raised by `Checkout::scan` before any cart mutation, so a failed scan
    /// never leaves a partial state behind.
    #[error("item with SKU {0} does not exist in the catalog")]
    UnknownSku(String),

    /// A total was requested without a catalog to price against.
    #[error("catalog is missing")]
    MissingCatalog,

    /// The cart holds a SKU the catalog can no longer resolve.
    ///
    /// ## When This Occurs
    /// The cart was filled against one catalog and totaled against another
    /// (stale catalog). The total call fails as a whole; no partial sum is
    /// ever returned.
    #[error("product with SKU {0} not found in catalog")]
    ProductNotFound(String),

    /// An explicit `Catalog::add_product` collided with an existing SKU.
    ///
    /// Note the asymmetry with bulk construction: `Catalog::from_products`
    /// lets a later duplicate overwrite an earlier one.
    #[error("product with SKU {0} already exists in catalog")]
    DuplicateSku(String),

    /// The cart has reached its distinct-SKU cap.
    #[error("cart cannot hold more than {max} distinct items")]
    CartTooLarge { max: usize },

    /// A single SKU's quantity would exceed the per-item cap.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when input doesn't meet format requirements. Used for early
/// validation before any business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (bad characters, equal trigger SKUs, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

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
        let err = CoreError::UnknownSku("xyz".to_string());
        assert_eq!(
            err.to_string(),
            "item with SKU xyz does not exist in the catalog"
        );

        let err = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "quantity 1000 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
