//! # Cart Module
//!
//! The multiset of SKUs scanned so far, and the raw (undiscounted) total.
//!
//! ## Cart Operations Flow
//! ```text
//! Checkout::scan ──► Cart::add_item ──► quantity += 1 (insert at 1)
//!
//! Checkout::total ──► Cart::total_price(catalog)
//!                     └── Σ price × quantity over all lines
//! ```
//!
//! ## Invariants
//! - Every stored line has quantity >= 1; a SKU never sits at quantity 0
//! - Lines keep insertion order, so totaling iterates deterministically
//! - At most [`MAX_CART_LINES`] distinct SKUs, each at most
//!   [`MAX_ITEM_QUANTITY`] units

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_sku;
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One (SKU, quantity) entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The scanned SKU.
    pub sku: String,

    /// How many units have been scanned. Always >= 1.
    pub quantity: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// The scanned-item cart.
///
/// Created empty at checkout construction and mutated only by
/// [`Cart::add_item`]. Prices are *not* stored here: the cart holds
/// quantities only and is priced against a catalog at total time, so a
/// repriced catalog is reflected by the next total call.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a SKU to the cart.
    ///
    /// First scan of a SKU inserts a line at quantity 1; subsequent scans
    /// increment it.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidSku`] if the SKU is empty or malformed. The cart
    ///   is left untouched.
    /// - [`CoreError::QuantityTooLarge`] / [`CoreError::CartTooLarge`] when a
    ///   cap would be exceeded.
    pub fn add_item(&mut self, sku: &str) -> CoreResult<()> {
        validate_sku(sku).map_err(CoreError::InvalidSku)?;

        if let Some(line) = self.lines.iter_mut().find(|line| line.sku == sku) {
            let requested = line.quantity + 1;
            if requested > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = requested;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            sku: sku.to_string(),
            quantity: 1,
        });
        Ok(())
    }

    /// Returns the stored quantity for a SKU, or 0 if absent. Never fails.
    pub fn item_count(&self, sku: &str) -> i64 {
        self.lines
            .iter()
            .find(|line| line.sku == sku)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Returns a snapshot copy of all cart lines in insertion order.
    ///
    /// Mutating the returned vector does not affect the cart.
    pub fn items(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Computes the raw (undiscounted) total against a catalog.
    ///
    /// Iterates lines in insertion order and accumulates price × quantity.
    /// An empty cart totals to zero for any catalog.
    ///
    /// ## Errors
    /// - [`CoreError::MissingCatalog`] when no catalog is supplied
    /// - [`CoreError::ProductNotFound`] when a cart line cannot be resolved;
    ///   the call fails as a whole and no partial sum escapes
    pub fn total_price(&self, catalog: Option<&Catalog>) -> CoreResult<Money> {
        let catalog = catalog.ok_or(CoreError::MissingCatalog)?;

        let mut total = Money::zero();
        for line in &self.lines {
            let product = catalog
                .lookup(&line.sku)
                .ok_or_else(|| CoreError::ProductNotFound(line.sku.clone()))?;
            total += product.price().multiply_quantity(line.quantity);
        }

        Ok(total)
    }

    /// Number of distinct SKUs in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
