//! # Pricing Rules
//!
//! Promotional pricing rules and their configuration.
//!
//! ## Evaluation Contract
//! ```text
//! Checkout::total
//! ├── raw = Cart::total_price(catalog)
//! ├── for each rule (configured order):
//! │       discount += rule.apply(&cart)   ← same cart snapshot every time
//! └── total = raw − discount
//! ```
//! Every rule sees the *same* unmodified cart; rules are additive, never
//! cascading, so the configured order cannot change the result.
//!
//! `apply` is pure: no mutation, no error path, idempotent. A cart that
//! simply doesn't qualify yields `Money::zero()`, never a negative amount.
//!
//! ## Why a Closed Enum?
//! The set of rule kinds is fixed and known at compile time. An enum makes
//! the match in `apply` exhaustive and keeps configuration a plain data
//! type, where a trait object would buy nothing but indirection.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_rule_quantity, validate_sku};

// =============================================================================
// Pricing Rule
// =============================================================================

/// A promotional pricing rule.
///
/// Configuration is captured at construction and immutable afterwards.
/// Instances are stateless across invocations: [`PricingRule::apply`] is a
/// pure function of the current cart contents.
///
/// Construct through the validating constructors
/// ([`PricingRule::bulk_discount`], [`PricingRule::buy_x_for_y`],
/// [`PricingRule::buy_together_free`]) or from a [`RuleConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingRule {
    /// Once a SKU reaches a quantity threshold, ALL of its units (not just
    /// the excess) are charged the reduced per-unit price.
    BulkDiscount {
        sku: String,
        quantity_threshold: i64,
        discount_price: Money,
        original_price: Money,
    },

    /// Buy a group of units, pay for fewer of them.
    ///
    /// ## Historical Grouping Behavior
    /// Discount grouping is per complete set of **three** units regardless
    /// of the configured quantities: every full group of 3 yields exactly
    /// one free unit. The configured `buy_quantity` only gates eligibility
    /// (carts below it get no discount) and `pay_quantity` is recorded but
    /// does not enter the arithmetic. This reproduces the behavior the
    /// production totals were signed off against; see DESIGN.md before
    /// changing it.
    BuyXForY {
        sku: String,
        buy_quantity: i64,
        pay_quantity: i64,
        unit_price: Money,
    },

    /// A flat discount worth one free item when two trigger SKUs appear
    /// together in the cart. Not scaled by quantity.
    BuyTogetherFree {
        trigger_a: String,
        trigger_b: String,
        free_item_price: Money,
    },
}

impl PricingRule {
    /// Creates a bulk-discount rule.
    ///
    /// ## Validation
    /// - `sku` must be a well-formed SKU
    /// - `quantity_threshold` must be positive
    /// - both prices must be non-negative, with
    ///   `discount_price_cents <= original_price_cents` so the rule can
    ///   never produce a negative discount
    ///
    /// ## Example
    /// ```rust
    /// use lane_core::PricingRule;
    ///
    /// let rule = PricingRule::bulk_discount("ipd", 4, 49999, 54999).unwrap();
    /// assert!(PricingRule::bulk_discount("ipd", 4, 54999, 49999).is_err());
    /// ```
    pub fn bulk_discount(
        sku: &str,
        quantity_threshold: i64,
        discount_price_cents: i64,
        original_price_cents: i64,
    ) -> Result<Self, ValidationError> {
        validate_sku(sku)?;
        validate_rule_quantity("quantity_threshold", quantity_threshold)?;
        validate_price_cents(discount_price_cents)?;
        validate_price_cents(original_price_cents)?;

        if discount_price_cents > original_price_cents {
            return Err(ValidationError::OutOfRange {
                field: "discount_price".to_string(),
                min: 0,
                max: original_price_cents,
            });
        }

        Ok(PricingRule::BulkDiscount {
            sku: sku.to_string(),
            quantity_threshold,
            discount_price: Money::from_cents(discount_price_cents),
            original_price: Money::from_cents(original_price_cents),
        })
    }

    /// Creates a buy-X-pay-Y rule.
    ///
    /// ## Validation
    /// - `sku` must be a well-formed SKU
    /// - both quantities must be positive, with `pay_quantity <= buy_quantity`
    /// - `unit_price_cents` must be non-negative
    pub fn buy_x_for_y(
        sku: &str,
        buy_quantity: i64,
        pay_quantity: i64,
        unit_price_cents: i64,
    ) -> Result<Self, ValidationError> {
        validate_sku(sku)?;
        validate_rule_quantity("buy_quantity", buy_quantity)?;
        validate_rule_quantity("pay_quantity", pay_quantity)?;
        validate_price_cents(unit_price_cents)?;

        if pay_quantity > buy_quantity {
            return Err(ValidationError::OutOfRange {
                field: "pay_quantity".to_string(),
                min: 1,
                max: buy_quantity,
            });
        }

        Ok(PricingRule::BuyXForY {
            sku: sku.to_string(),
            buy_quantity,
            pay_quantity,
            unit_price: Money::from_cents(unit_price_cents),
        })
    }

    /// Creates a buy-these-together-get-one-free rule.
    ///
    /// ## Validation
    /// - both trigger SKUs must be well-formed and distinct
    /// - `free_item_price_cents` must be non-negative
    pub fn buy_together_free(
        trigger_a: &str,
        trigger_b: &str,
        free_item_price_cents: i64,
    ) -> Result<Self, ValidationError> {
        validate_sku(trigger_a)?;
        validate_sku(trigger_b)?;
        validate_price_cents(free_item_price_cents)?;

        if trigger_a == trigger_b {
            return Err(ValidationError::InvalidFormat {
                field: "trigger_b".to_string(),
                reason: "trigger SKUs must be distinct".to_string(),
            });
        }

        Ok(PricingRule::BuyTogetherFree {
            trigger_a: trigger_a.to_string(),
            trigger_b: trigger_b.to_string(),
            free_item_price: Money::from_cents(free_item_price_cents),
        })
    }

    /// Evaluates this rule against a cart and returns the amount to subtract
    /// from the raw total.
    ///
    /// Pure and idempotent: the cart is not mutated, and identical cart state
    /// always yields an identical discount. A cart that doesn't meet the
    /// trigger condition yields [`Money::zero()`]; the result is never
    /// negative.
    pub fn apply(&self, cart: &Cart) -> Money {
        match self {
            PricingRule::BulkDiscount {
                sku,
                quantity_threshold,
                discount_price,
                original_price,
            } => {
                let quantity = cart.item_count(sku);
                if quantity >= *quantity_threshold {
                    // Reduced unit price covers every unit, not just the excess
                    (*original_price - *discount_price).multiply_quantity(quantity)
                } else {
                    Money::zero()
                }
            }

            PricingRule::BuyXForY {
                sku,
                buy_quantity,
                unit_price,
                ..
            } => {
                let quantity = cart.item_count(sku);
                if quantity < *buy_quantity {
                    return Money::zero();
                }
                // One free unit per complete group of three; see the variant
                // doc for why the divisor is not buy_quantity.
                let groups = quantity / 3;
                unit_price.multiply_quantity(groups)
            }

            PricingRule::BuyTogetherFree {
                trigger_a,
                trigger_b,
                free_item_price,
            } => {
                if cart.item_count(trigger_a) >= 1 && cart.item_count(trigger_b) >= 1 {
                    *free_item_price
                } else {
                    Money::zero()
                }
            }
        }
    }

    /// The kind discriminator for this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            PricingRule::BulkDiscount { .. } => RuleKind::BulkDiscount,
            PricingRule::BuyXForY { .. } => RuleKind::BuyXForYDeal,
            PricingRule::BuyTogetherFree { .. } => RuleKind::BuyAndGetFree,
        }
    }
}

// =============================================================================
// Rule Kind
// =============================================================================

/// Discriminator selecting which pricing-rule variant to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    BuyXForYDeal,
    BulkDiscount,
    BuyAndGetFree,
}

impl RuleKind {
    /// Resolves a rule-kind name to its discriminator.
    ///
    /// Unrecognized names yield `None` rather than an error: the caller
    /// decides whether an unknown kind is fatal.
    ///
    /// ## Example
    /// ```rust
    /// use lane_core::RuleKind;
    ///
    /// assert_eq!(RuleKind::from_name("BulkDiscount"), Some(RuleKind::BulkDiscount));
    /// assert_eq!(RuleKind::from_name("TwoForOne"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<RuleKind> {
        match name {
            "BuyXForYDeal" => Some(RuleKind::BuyXForYDeal),
            "BulkDiscount" => Some(RuleKind::BulkDiscount),
            "BuyAndGetFree" => Some(RuleKind::BuyAndGetFree),
            _ => None,
        }
    }

    /// The canonical configuration name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::BuyXForYDeal => "BuyXForYDeal",
            RuleKind::BulkDiscount => "BulkDiscount",
            RuleKind::BuyAndGetFree => "BuyAndGetFree",
        }
    }
}

// =============================================================================
// Rule Configuration
// =============================================================================

/// Externally-supplied rule configuration.
///
/// One variant per rule kind, discriminated by a `kind` tag, with explicit
/// named fields in the order the rule constructors take them. This replaces
/// the positional argument lists of older configurations: a record either
/// deserializes into a fully-typed variant or fails loudly.
///
/// Prices are in cents; the data-source layer converts decimal prices before
/// building these.
///
/// ```json
/// { "kind": "BuyXForYDeal", "sku": "atv",
///   "buy_quantity": 3, "pay_quantity": 2, "unit_price_cents": 10950 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RuleConfig {
    BuyXForYDeal {
        sku: String,
        buy_quantity: i64,
        pay_quantity: i64,
        unit_price_cents: i64,
    },
    BulkDiscount {
        sku: String,
        quantity_threshold: i64,
        discount_price_cents: i64,
        original_price_cents: i64,
    },
    BuyAndGetFree {
        trigger_a: String,
        trigger_b: String,
        free_item_price_cents: i64,
    },
}

impl RuleConfig {
    /// Validates this configuration and builds the rule it describes.
    pub fn build(self) -> Result<PricingRule, ValidationError> {
        match self {
            RuleConfig::BuyXForYDeal {
                sku,
                buy_quantity,
                pay_quantity,
                unit_price_cents,
            } => PricingRule::buy_x_for_y(&sku, buy_quantity, pay_quantity, unit_price_cents),
            RuleConfig::BulkDiscount {
                sku,
                quantity_threshold,
                discount_price_cents,
                original_price_cents,
            } => PricingRule::bulk_discount(
                &sku,
                quantity_threshold,
                discount_price_cents,
                original_price_cents,
            ),
            RuleConfig::BuyAndGetFree {
                trigger_a,
                trigger_b,
                free_item_price_cents,
            } => PricingRule::buy_together_free(&trigger_a, &trigger_b, free_item_price_cents),
        }
    }

    /// The kind discriminator of this configuration.
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleConfig::BuyXForYDeal { .. } => RuleKind::BuyXForYDeal,
            RuleConfig::BulkDiscount { .. } => RuleKind::BulkDiscount,
            RuleConfig::BuyAndGetFree { .. } => RuleKind::BuyAndGetFree,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
