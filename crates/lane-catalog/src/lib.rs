//! # lane-catalog: Catalog Data Source for Lane POS
//!
//! Loads products and pricing-rule configuration from JSON sources and hands
//! fully-validated, integer-cent domain values to [`lane_core`].
//!
//! ## Product File Format
//! One record per product; prices are decimal numbers:
//! ```json
//! [
//!   { "sku": "ipd", "name": "Super iPad",  "price": 549.99 },
//!   { "sku": "atv", "name": "Apple TV",    "price": 109.50 }
//! ]
//! ```
//!
//! ## Failure Policy
//! A missing file, malformed JSON, or an invalid record is **fatal to
//! construction**: the loader never degrades a bad source into a silently
//! empty catalog. An empty `[]` array, on the other hand, is a legitimate
//! (empty) catalog.
//!
//! ## Example
//! ```rust,no_run
//! use lane_catalog::load_catalog;
//!
//! let catalog = load_catalog("product.json")?;
//! assert!(catalog.lookup("ipd").is_some());
//! # Ok::<(), lane_catalog::CatalogSourceError>(())
//! ```

pub mod error;
pub mod loader;

pub use error::CatalogSourceError;
pub use loader::{load_catalog, load_rules, parse_products, parse_rules};
