//! # Catalog Module
//!
//! SKU → Product lookup table.
//!
//! ## Two Construction Paths, Two Duplicate Policies
//! ```text
//! from_products(records)   bulk load from a data source
//! └── later duplicate WINS (last record for a SKU is kept, silently)
//!
//! add_product(sku, ...)    explicit add in tests / setup code
//! └── duplicate REJECTED with CoreError::DuplicateSku
//! ```
//! The asymmetry is deliberate: a data file is treated as a sequence of
//! upserts, while an explicit add colliding with an existing SKU is almost
//! certainly a mistake in the caller.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::{validate_price_cents, validate_product_name, validate_sku};

// =============================================================================
// Catalog
// =============================================================================

/// A read-mostly collection of products keyed by SKU.
///
/// Invariant: at most one product per SKU. Built once at checkout
/// construction; the core only ever reads it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: HashMap::new(),
        }
    }

    /// Builds a catalog from a sequence of products.
    ///
    /// This is the bulk-load path used by the data-source layer. When two
    /// records share a SKU, the later record replaces the earlier one.
    /// Records are assumed to be already validated by the loader.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.products.insert(product.sku.clone(), product);
        }
        catalog
    }

    /// Adds a single product, validating every field.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if the SKU, name, or price is malformed
    /// - [`CoreError::DuplicateSku`] if a product with this SKU already exists
    ///
    /// ## Example
    /// ```rust
    /// use lane_core::Catalog;
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_product("atv", "Apple TV", 10950).unwrap();
    /// assert!(catalog.add_product("atv", "Apple TV", 10950).is_err());
    /// ```
    pub fn add_product(
        &mut self,
        sku: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
    ) -> CoreResult<&Product> {
        let sku = sku.into();
        let name = name.into();

        validate_sku(&sku)?;
        validate_product_name(&name)?;
        validate_price_cents(price_cents)?;

        if self.products.contains_key(&sku) {
            return Err(CoreError::DuplicateSku(sku));
        }

        let product = Product::new(sku.clone(), name, price_cents);
        Ok(self.products.entry(sku).or_insert(product))
    }

    /// Retrieves a product by SKU. Pure read, never fails.
    pub fn lookup(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    /// Checks whether the catalog can resolve a SKU.
    pub fn contains(&self, sku: &str) -> bool {
        self.products.contains_key(sku)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.add_product("ipd", "Super iPad", 54999).unwrap();

        let product = catalog.lookup("ipd").unwrap();
        assert_eq!(product.name, "Super iPad");
        assert_eq!(product.price_cents, 54999);

        assert!(catalog.lookup("nope").is_none());
    }

    #[test]
    fn test_explicit_add_rejects_duplicate() {
        let mut catalog = Catalog::new();
        catalog.add_product("atv", "Apple TV", 10950).unwrap();

        let err = catalog.add_product("atv", "Apple TV v2", 9999).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateSku(sku) if sku == "atv"));

        // Original product is untouched
        assert_eq!(catalog.lookup("atv").unwrap().price_cents, 10950);
    }

    #[test]
    fn test_add_validates_fields() {
        let mut catalog = Catalog::new();

        assert!(catalog.add_product("", "Nameless", 100).is_err());
        assert!(catalog.add_product("ok", "", 100).is_err());
        assert!(catalog.add_product("ok", "Negative", -1).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_bulk_load_later_duplicate_wins() {
        let catalog = Catalog::from_products(vec![
            Product::new("SKU1", "Product 1", 1000),
            Product::new("SKU1", "Product 1 (Duplicate)", 1500),
        ]);

        assert_eq!(catalog.len(), 1);
        let product = catalog.lookup("SKU1").unwrap();
        assert_eq!(product.name, "Product 1 (Duplicate)");
        assert_eq!(product.price_cents, 1500);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_products(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.lookup("SKU1").is_none());
    }
}
