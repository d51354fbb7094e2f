//! # Checkout Module
//!
//! Orchestrates one cart, one catalog, and an ordered list of pricing rules.
//!
//! ## Operation Flow
//! ```text
//! scan("atv")
//! ├── catalog.contains("atv")?  no ──► Err(UnknownSku), cart untouched
//! └── yes ──► cart.add_item("atv")
//!
//! total()
//! ├── raw = cart.total_price(catalog)
//! ├── discount = Σ rule.apply(&cart)    every rule, same cart snapshot
//! └── raw − discount
//! ```
//!
//! `total` is repeatable and never cached: it reflects the cart state at
//! call time.
//!
//! ## Thread Safety
//! A `Checkout` is single-threaded by design. `scan` is a non-atomic
//! read-modify-write, so callers sharing one instance across threads must
//! serialize access externally (e.g. `Mutex<Checkout>`).

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::PricingRule;

// =============================================================================
// Checkout
// =============================================================================

/// A single checkout transaction.
///
/// Owns its cart (created empty), a catalog to validate and price scans
/// against, and the pricing rules in configured order. The order is
/// preserved for deterministic iteration, though the result is
/// order-independent since every rule is evaluated against the same cart
/// snapshot and the discounts simply sum.
#[derive(Debug)]
pub struct Checkout {
    cart: Cart,
    catalog: Catalog,
    pricing_rules: Vec<PricingRule>,
}

impl Checkout {
    /// Creates a checkout with an empty cart.
    pub fn new(catalog: Catalog, pricing_rules: Vec<PricingRule>) -> Self {
        Checkout {
            cart: Cart::new(),
            catalog,
            pricing_rules,
        }
    }

    /// Scans one item into the cart.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownSku`] if the catalog cannot resolve the SKU.
    ///   Raised *before* any cart mutation: a failed scan leaves the cart
    ///   exactly as it was.
    /// - [`CoreError::InvalidSku`] and the cart-cap errors, forwarded from
    ///   [`Cart::add_item`].
    pub fn scan(&mut self, sku: &str) -> CoreResult<()> {
        if !self.catalog.contains(sku) {
            return Err(CoreError::UnknownSku(sku.to_string()));
        }

        self.cart.add_item(sku)
    }

    /// Computes the total: raw cart price minus every rule's discount.
    ///
    /// Each rule is applied independently against the same cart state; rules
    /// never see each other's effect. Callable repeatedly without side
    /// effects.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] if the cart holds a SKU the catalog
    ///   can no longer resolve (stale catalog). No partial total escapes.
    ///
    /// ## Example
    /// ```rust
    /// use lane_core::{Catalog, Checkout, PricingRule};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_product("ipd", "Super iPad", 54999).unwrap();
    ///
    /// let bulk = PricingRule::bulk_discount("ipd", 4, 49999, 54999).unwrap();
    /// let mut checkout = Checkout::new(catalog, vec![bulk]);
    /// for _ in 0..4 {
    ///     checkout.scan("ipd").unwrap();
    /// }
    ///
    /// assert_eq!(checkout.total().unwrap().cents(), 199996);
    /// ```
    pub fn total(&self) -> CoreResult<Money> {
        let raw = self.cart.total_price(Some(&self.catalog))?;

        let discount: Money = self
            .pricing_rules
            .iter()
            .map(|rule| rule.apply(&self.cart))
            .sum();

        Ok(raw - discount)
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configured pricing rules, in order.
    pub fn pricing_rules(&self) -> &[PricingRule] {
        &self.pricing_rules
    }

    /// Convenience passthrough: quantity scanned so far for a SKU.
    pub fn item_count(&self, sku: &str) -> i64 {
        self.cart.item_count(sku)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The standard store catalog the pricing scenarios were written against.
    fn store_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_product("ipd", "Super iPad", 54999).unwrap();
        catalog.add_product("mbp", "MacBook Pro", 139999).unwrap();
        catalog.add_product("atv", "Apple TV", 10950).unwrap();
        catalog.add_product("vga", "VGA adapter", 3000).unwrap();
        catalog
    }

    fn store_rules() -> Vec<PricingRule> {
        vec![
            PricingRule::buy_x_for_y("atv", 3, 2, 10950).unwrap(),
            PricingRule::bulk_discount("ipd", 4, 49999, 54999).unwrap(),
        ]
    }

    fn scan_all(checkout: &mut Checkout, skus: &[&str]) {
        for sku in skus {
            checkout.scan(sku).unwrap();
        }
    }

    #[test]
    fn test_scenario_buy_x_for_y() {
        // atv, atv, atv, vga => $249.00
        let mut checkout = Checkout::new(store_catalog(), store_rules());
        scan_all(&mut checkout, &["atv", "atv", "atv", "vga"]);

        assert_eq!(checkout.total().unwrap().cents(), 24900);
    }

    #[test]
    fn test_scenario_bulk_discount() {
        // ipd x4 => $1999.96
        let mut checkout = Checkout::new(store_catalog(), store_rules());
        scan_all(&mut checkout, &["ipd", "ipd", "ipd", "ipd"]);

        assert_eq!(checkout.total().unwrap().cents(), 199996);
    }

    #[test]
    fn test_scenario_combined_rules() {
        // atv, ipd, ipd, atv, ipd, ipd, ipd => $2718.95
        let mut checkout = Checkout::new(store_catalog(), store_rules());
        scan_all(
            &mut checkout,
            &["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"],
        );

        assert_eq!(checkout.total().unwrap().cents(), 271895);
    }

    #[test]
    fn test_total_without_rules_is_raw_total() {
        let mut checkout = Checkout::new(store_catalog(), Vec::new());
        scan_all(&mut checkout, &["atv", "vga"]);

        assert_eq!(checkout.total().unwrap().cents(), 13950);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        let checkout = Checkout::new(store_catalog(), store_rules());
        assert!(checkout.total().unwrap().is_zero());
    }

    #[test]
    fn test_scan_unknown_sku_leaves_cart_untouched() {
        let mut checkout = Checkout::new(store_catalog(), store_rules());
        checkout.scan("atv").unwrap();

        let err = checkout.scan("xyz").unwrap_err();
        assert!(matches!(err, CoreError::UnknownSku(sku) if sku == "xyz"));

        assert_eq!(checkout.item_count("xyz"), 0);
        assert_eq!(checkout.item_count("atv"), 1);
        assert_eq!(checkout.cart().line_count(), 1);
    }

    #[test]
    fn test_scan_counts_accumulate() {
        let mut checkout = Checkout::new(store_catalog(), store_rules());
        for _ in 0..5 {
            checkout.scan("atv").unwrap();
        }
        assert_eq!(checkout.item_count("atv"), 5);
    }

    #[test]
    fn test_total_is_repeatable_and_tracks_cart_state() {
        let mut checkout = Checkout::new(store_catalog(), store_rules());
        scan_all(&mut checkout, &["atv", "atv"]);

        // Below the deal threshold: no discount yet
        let before = checkout.total().unwrap();
        assert_eq!(before, checkout.total().unwrap());
        assert_eq!(before.cents(), 21900);

        // Third scan crosses the threshold: raw grows by one unit, the deal
        // gives that unit back, so a cached total would now be wrong twice over
        checkout.scan("atv").unwrap();
        assert_eq!(checkout.total().unwrap().cents(), 21900);

        checkout.scan("vga").unwrap();
        assert_eq!(checkout.total().unwrap().cents(), 24900);
    }

    #[test]
    fn test_rule_order_does_not_change_total() {
        let mut forward = Checkout::new(store_catalog(), store_rules());
        let mut reversed = Checkout::new(
            store_catalog(),
            store_rules().into_iter().rev().collect(),
        );

        let scans = ["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"];
        scan_all(&mut forward, &scans);
        scan_all(&mut reversed, &scans);

        assert_eq!(forward.total().unwrap(), reversed.total().unwrap());
    }
}
