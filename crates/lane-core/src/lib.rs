//! # lane-core: Pure Checkout Logic for Lane POS
//!
//! This crate is the **heart** of Lane POS. It contains the whole checkout
//! pipeline as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  lane-catalog (I/O layer)                                           │
//! │  product.json ──► Vec<Product> ──► Catalog                          │
//! └──────────────────────────┬──────────────────────────────────────────┘
//!                            │
//! ┌──────────────────────────▼──────────────────────────────────────────┐
//! │               ★ lane-core (THIS CRATE) ★                            │
//! │                                                                     │
//! │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌──────────┐ │
//! │   │  money  │  │ catalog │  │  cart   │  │  rules  │  │ checkout │ │
//! │   │  Money  │  │ Product │  │  Cart   │  │ Pricing │  │ Checkout │ │
//! │   │  cents  │  │ lookup  │  │ scans   │  │  Rule   │  │ scan/    │ │
//! │   │         │  │         │  │         │  │         │  │ total    │ │
//! │   └─────────┘  └─────────┘  └─────────┘  └─────────┘  └──────────┘ │
//! │                                                                     │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Product)
//! - [`catalog`] - SKU → Product lookup
//! - [`cart`] - Scanned-item multiset and raw total computation
//! - [`rules`] - Promotional pricing rules and their configuration
//! - [`checkout`] - Orchestration: scan + total
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every rule evaluation is deterministic - same cart,
//!    same discount
//! 2. **No I/O**: file and network access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lane_core::{Catalog, Checkout, PricingRule};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_product("atv", "Apple TV", 10950).unwrap();
//! catalog.add_product("vga", "VGA adapter", 3000).unwrap();
//!
//! let deal = PricingRule::buy_x_for_y("atv", 3, 2, 10950).unwrap();
//! let mut checkout = Checkout::new(catalog, vec![deal]);
//!
//! checkout.scan("atv").unwrap();
//! checkout.scan("atv").unwrap();
//! checkout.scan("atv").unwrap();
//! checkout.scan("vga").unwrap();
//!
//! // 3 x $109.50 + $30.00, minus one free Apple TV
//! assert_eq!(checkout.total().unwrap().cents(), 24900);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lane_core::Money` instead of
// `use lane_core::money::Money`.

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use checkout::Checkout;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rules::{PricingRule, RuleConfig, RuleKind};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct SKUs allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and keeps a single transaction at a reasonable
/// size. Can be made configurable per-store in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single SKU in a cart.
///
/// ## Business Reason
/// Prevents accidental over-scanning (a stuck barcode trigger scanning the
/// same item hundreds of times).
pub const MAX_ITEM_QUANTITY: i64 = 999;
