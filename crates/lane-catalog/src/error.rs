//! # Loader Error Types
//!
//! Everything that can go wrong between a JSON source and a validated
//! catalog. All of these are fatal to the load that raised them: the system
//! never starts against a partially-initialized catalog.

use lane_core::ValidationError;
use thiserror::Error;

// =============================================================================
// Catalog Source Error
// =============================================================================

/// Errors raised while loading a catalog or rule configuration.
#[derive(Debug, Error)]
pub enum CatalogSourceError {
    /// The source could not be read (missing file, permissions, ...).
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid JSON, or does not match the expected shape.
    #[error("failed to parse catalog source: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but failed field validation.
    #[error("invalid record for SKU {sku}: {source}")]
    InvalidRecord {
        sku: String,
        #[source]
        source: ValidationError,
    },

    /// A record carries a price that cannot be represented in cents
    /// (negative, non-finite, or out of range).
    #[error("invalid price {price} for SKU {sku}")]
    InvalidPrice { sku: String, price: f64 },

    /// A rule record names a kind this system does not know.
    #[error("unknown rule kind: {0}")]
    UnknownRuleKind(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogSourceError::InvalidPrice {
            sku: "ipd".to_string(),
            price: -549.99,
        };
        assert_eq!(err.to_string(), "invalid price -549.99 for SKU ipd");

        let err = CatalogSourceError::UnknownRuleKind("TwoForOne".to_string());
        assert_eq!(err.to_string(), "unknown rule kind: TwoForOne");
    }
}
