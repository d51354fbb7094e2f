//! # Catalog and Rule Loading
//!
//! Parses JSON product files and rule-configuration files into validated
//! domain values.
//!
//! ## The Decimal Boundary
//! ```text
//! product.json              this module                lane-core
//! "price": 549.99  ──────►  cents_from_price  ──────►  price_cents: 54999
//!                           (finite? >= 0?
//!                            round to cent)
//! ```
//! Floating point exists only on the left side of that arrow. Everything
//! handed to the core is integer cents.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use lane_core::{Catalog, PricingRule, Product, RuleConfig, RuleKind};

use crate::error::CatalogSourceError;

/// Largest decimal price the loader accepts, in major units.
///
/// Keeps `price * 100` comfortably inside i64 range before rounding.
const MAX_PRICE: f64 = 10_000_000_000.0;

// =============================================================================
// Product Loading
// =============================================================================

/// One product record as it appears in the JSON source.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    sku: String,
    name: String,
    /// Decimal price in major units, e.g. 549.99.
    price: f64,
}

/// Parses a JSON product array into validated products.
///
/// Field validation and decimal-to-cents conversion happen per record; the
/// first bad record fails the whole parse.
///
/// ## Example
/// ```rust
/// use lane_catalog::parse_products;
///
/// let products = parse_products(r#"[{"sku":"atv","name":"Apple TV","price":109.50}]"#).unwrap();
/// assert_eq!(products[0].price_cents, 10950);
/// ```
pub fn parse_products(input: &str) -> Result<Vec<Product>, CatalogSourceError> {
    let records: Vec<ProductRecord> = serde_json::from_str(input)?;

    let mut products = Vec::with_capacity(records.len());
    for record in records {
        lane_core::validation::validate_sku(&record.sku).map_err(|source| {
            CatalogSourceError::InvalidRecord {
                sku: record.sku.clone(),
                source,
            }
        })?;
        lane_core::validation::validate_product_name(&record.name).map_err(|source| {
            CatalogSourceError::InvalidRecord {
                sku: record.sku.clone(),
                source,
            }
        })?;
        let price_cents = cents_from_price(&record.sku, record.price)?;

        debug!(sku = %record.sku, price_cents, "parsed product record");
        products.push(Product::new(record.sku, record.name, price_cents));
    }

    Ok(products)
}

/// Loads a catalog from a JSON product file.
///
/// When two records share a SKU the later record wins, with a warning; this
/// treats the file as a sequence of upserts, matching
/// [`Catalog::from_products`]. Contrast with the explicit
/// [`Catalog::add_product`], which rejects duplicates.
///
/// ## Errors
/// - [`CatalogSourceError::Io`] - missing or unreadable file
/// - [`CatalogSourceError::Parse`] - malformed or empty (non-JSON) content
/// - [`CatalogSourceError::InvalidRecord`] / [`CatalogSourceError::InvalidPrice`]
///   - a record that parsed but fails validation
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogSourceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let products = parse_products(&raw)?;

    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    for product in &products {
        if !seen.insert(product.sku.clone()) {
            warn!(sku = %product.sku, "duplicate SKU in catalog source, later record wins");
        }
    }

    let catalog = Catalog::from_products(products);
    info!(
        path = %path.display(),
        products = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

// =============================================================================
// Rule Configuration Loading
// =============================================================================

/// One rule record as it appears in the JSON source. Prices are decimal here
/// and converted to cents before the core sees them.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
enum RuleRecord {
    BuyXForYDeal {
        sku: String,
        buy_quantity: i64,
        pay_quantity: i64,
        unit_price: f64,
    },
    BulkDiscount {
        sku: String,
        quantity_threshold: i64,
        discount_price: f64,
        original_price: f64,
    },
    BuyAndGetFree {
        trigger_a: String,
        trigger_b: String,
        free_item_price: f64,
    },
}

/// Parses a JSON rule-configuration array into constructed pricing rules,
/// preserving record order.
///
/// An unknown `kind` is fatal here ([`CatalogSourceError::UnknownRuleKind`]);
/// callers that want the non-failing dispatch use [`RuleKind::from_name`]
/// directly.
///
/// ## Example
/// ```rust
/// use lane_catalog::parse_rules;
///
/// let rules = parse_rules(
///     r#"[{"kind":"BuyXForYDeal","sku":"atv","buy_quantity":3,"pay_quantity":2,"unit_price":109.50}]"#,
/// ).unwrap();
/// assert_eq!(rules.len(), 1);
/// ```
pub fn parse_rules(input: &str) -> Result<Vec<PricingRule>, CatalogSourceError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(input)?;

    let mut rules = Vec::with_capacity(values.len());
    for value in values {
        let kind_name = value
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| {
                use serde::de::Error;
                CatalogSourceError::Parse(serde_json::Error::custom(
                    "rule record is missing a string `kind` field",
                ))
            })?
            .to_string();

        // Dispatch on the kind name first so an unrecognized kind surfaces
        // as UnknownRuleKind rather than a generic shape mismatch.
        if RuleKind::from_name(&kind_name).is_none() {
            return Err(CatalogSourceError::UnknownRuleKind(kind_name));
        }

        let record: RuleRecord = serde_json::from_value(value)?;
        rules.push(build_rule(record)?);
    }

    Ok(rules)
}

/// Loads pricing rules from a JSON configuration file.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<PricingRule>, CatalogSourceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let rules = parse_rules(&raw)?;

    info!(path = %path.display(), rules = rules.len(), "pricing rules loaded");
    Ok(rules)
}

fn build_rule(record: RuleRecord) -> Result<PricingRule, CatalogSourceError> {
    let (context_sku, config) = match record {
        RuleRecord::BuyXForYDeal {
            sku,
            buy_quantity,
            pay_quantity,
            unit_price,
        } => {
            let unit_price_cents = cents_from_price(&sku, unit_price)?;
            (
                sku.clone(),
                RuleConfig::BuyXForYDeal {
                    sku,
                    buy_quantity,
                    pay_quantity,
                    unit_price_cents,
                },
            )
        }
        RuleRecord::BulkDiscount {
            sku,
            quantity_threshold,
            discount_price,
            original_price,
        } => {
            let discount_price_cents = cents_from_price(&sku, discount_price)?;
            let original_price_cents = cents_from_price(&sku, original_price)?;
            (
                sku.clone(),
                RuleConfig::BulkDiscount {
                    sku,
                    quantity_threshold,
                    discount_price_cents,
                    original_price_cents,
                },
            )
        }
        RuleRecord::BuyAndGetFree {
            trigger_a,
            trigger_b,
            free_item_price,
        } => {
            let free_item_price_cents = cents_from_price(&trigger_a, free_item_price)?;
            (
                trigger_a.clone(),
                RuleConfig::BuyAndGetFree {
                    trigger_a,
                    trigger_b,
                    free_item_price_cents,
                },
            )
        }
    };

    config
        .build()
        .map_err(|source| CatalogSourceError::InvalidRecord {
            sku: context_sku,
            source,
        })
}

// =============================================================================
// Decimal Conversion
// =============================================================================

/// Converts a decimal price in major units to integer cents, rounding to the
/// nearest cent.
///
/// Rejects negative, non-finite, and absurdly large values.
fn cents_from_price(sku: &str, price: f64) -> Result<i64, CatalogSourceError> {
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(CatalogSourceError::InvalidPrice {
            sku: sku.to_string(),
            price,
        });
    }

    Ok((price * 100.0).round() as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const STORE_PRODUCTS: &str = r#"[
        { "sku": "ipd", "name": "Super iPad",  "price": 549.99 },
        { "sku": "mbp", "name": "MacBook Pro", "price": 1399.99 },
        { "sku": "atv", "name": "Apple TV",    "price": 109.50 },
        { "sku": "vga", "name": "VGA adapter", "price": 30.00 }
    ]"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_products_converts_to_cents() {
        let products = parse_products(STORE_PRODUCTS).unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].price_cents, 54999);
        assert_eq!(products[1].price_cents, 139999);
        assert_eq!(products[2].price_cents, 10950);
        assert_eq!(products[3].price_cents, 3000);
    }

    #[test]
    fn test_parse_products_empty_array() {
        let products = parse_products("[]").unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_parse_products_malformed_json() {
        assert!(matches!(
            parse_products("invalid JSON").unwrap_err(),
            CatalogSourceError::Parse(_)
        ));
    }

    #[test]
    fn test_parse_products_empty_input() {
        assert!(matches!(
            parse_products("").unwrap_err(),
            CatalogSourceError::Parse(_)
        ));
    }

    #[test]
    fn test_parse_products_rejects_negative_price() {
        let err = parse_products(r#"[{ "sku": "ipd", "name": "iPad", "price": -1.00 }]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::InvalidPrice { sku, .. } if sku == "ipd"
        ));
    }

    #[test]
    fn test_parse_products_rejects_bad_sku() {
        let err =
            parse_products(r#"[{ "sku": "", "name": "Nameless", "price": 1.00 }]"#).unwrap_err();
        assert!(matches!(err, CatalogSourceError::InvalidRecord { .. }));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let file = write_temp(STORE_PRODUCTS);
        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 4);
        let ipd = catalog.lookup("ipd").unwrap();
        assert_eq!(ipd.name, "Super iPad");
        assert_eq!(ipd.price_cents, 54999);
        assert!(catalog.lookup("SKU3").is_none());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/no/such/product.json").unwrap_err();
        assert!(matches!(err, CatalogSourceError::Io(_)));
    }

    #[test]
    fn test_load_catalog_duplicate_sku_later_wins() {
        let file = write_temp(
            r#"[
                { "sku": "SKU1", "name": "Product 1",             "price": 10.00 },
                { "sku": "SKU1", "name": "Product 1 (Duplicate)", "price": 15.00 }
            ]"#,
        );
        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        let product = catalog.lookup("SKU1").unwrap();
        assert_eq!(product.name, "Product 1 (Duplicate)");
        assert_eq!(product.price_cents, 1500);
    }

    #[test]
    fn test_load_catalog_empty_array_is_empty_catalog() {
        let file = write_temp("[]");
        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    // -------------------------------------------------------------------------
    // Rules
    // -------------------------------------------------------------------------

    const STORE_RULES: &str = r#"[
        { "kind": "BuyXForYDeal", "sku": "atv",
          "buy_quantity": 3, "pay_quantity": 2, "unit_price": 109.50 },
        { "kind": "BulkDiscount", "sku": "ipd",
          "quantity_threshold": 4, "discount_price": 499.99, "original_price": 549.99 },
        { "kind": "BuyAndGetFree",
          "trigger_a": "atv", "trigger_b": "ipd", "free_item_price": 30.00 }
    ]"#;

    #[test]
    fn test_parse_rules_all_kinds() {
        let rules = parse_rules(STORE_RULES).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].kind(), RuleKind::BuyXForYDeal);
        assert_eq!(rules[1].kind(), RuleKind::BulkDiscount);
        assert_eq!(rules[2].kind(), RuleKind::BuyAndGetFree);
    }

    #[test]
    fn test_parse_rules_unknown_kind() {
        let err = parse_rules(r#"[{ "kind": "TwoForOne", "sku": "atv" }]"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::UnknownRuleKind(kind) if kind == "TwoForOne"
        ));
    }

    #[test]
    fn test_parse_rules_missing_kind() {
        let err = parse_rules(r#"[{ "sku": "atv" }]"#).unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse(_)));
    }

    #[test]
    fn test_parse_rules_invalid_configuration() {
        // pay_quantity above buy_quantity
        let err = parse_rules(
            r#"[{ "kind": "BuyXForYDeal", "sku": "atv",
                  "buy_quantity": 2, "pay_quantity": 3, "unit_price": 109.50 }]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::InvalidRecord { sku, .. } if sku == "atv"
        ));
    }

    #[test]
    fn test_load_rules_from_file() {
        let file = write_temp(STORE_RULES);
        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.len(), 3);
    }

    // -------------------------------------------------------------------------
    // Decimal conversion
    // -------------------------------------------------------------------------

    #[test]
    fn test_cents_from_price_rounds_to_nearest_cent() {
        assert_eq!(cents_from_price("x", 549.99).unwrap(), 54999);
        assert_eq!(cents_from_price("x", 109.50).unwrap(), 10950);
        assert_eq!(cents_from_price("x", 0.0).unwrap(), 0);
        assert_eq!(cents_from_price("x", 0.005).unwrap(), 1);
    }

    #[test]
    fn test_cents_from_price_rejects_invalid() {
        assert!(cents_from_price("x", -0.01).is_err());
        assert!(cents_from_price("x", f64::NAN).is_err());
        assert!(cents_from_price("x", f64::INFINITY).is_err());
        assert!(cents_from_price("x", MAX_PRICE * 2.0).is_err());
    }
}
