//! # Domain Types
//!
//! Core domain types shared across Lane POS.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable once it enters a [`Catalog`](crate::Catalog): the catalog hands
/// out shared references only, and the core never edits a product after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stock Keeping Unit - the unique business identifier.
    pub sku: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product. Field validation happens at the catalog boundary,
    /// not here.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
