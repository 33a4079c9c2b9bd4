//! # Domain Types
//!
//! Core domain types used throughout Mart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │     Quote       │   │     Notice      │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  name           │   │  shipping       │   │  PreOrder       │    │
//! │  │  price_cents    │   │  tax_rate       │   │  FreeShipping   │    │
//! │  │  pre_order      │   │  tax_total      │   └─────────────────┘    │
//! │  └─────────────────┘   │  total          │                          │
//! │                        └─────────────────┘                          │
//! │                                                                     │
//! │  ┌─────────────────┐                                                │
//! │  │    TaxRate      │   basis points: 1000 = 10%, 500 = 5%           │
//! │  └─────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 500 bps = 5% - the two tiers the quote uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
///
/// Products are immutable after catalog construction: created once at
/// startup, never mutated, alive for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the lookup key. Unique within the catalog by
    /// convention; uniqueness is not enforced and lookup takes the first
    /// match in catalog order.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Whether the product is sold as a pre-order.
    pub pre_order: bool,
}

impl Product {
    /// Creates a new product. Validation happens at catalog construction.
    pub fn new(name: impl Into<String>, price_cents: i64, pre_order: bool) -> Self {
        Product {
            name: name.into(),
            price_cents,
            pre_order,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// The computed pricing breakdown for one product and one address.
///
/// A transient value with no identity and no persistence: computed fresh
/// per run from a `Product` and a shipping address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Shipping cost: one of two fixed tiers ($0 or $5).
    pub shipping: Money,

    /// Applied tax rate: one of two fixed tiers (10% or 5%).
    pub tax_rate: TaxRate,

    /// Tax amount: price × rate, rounded half-up at the cent.
    pub tax_total: Money,

    /// Grand total: price + tax_total + shipping (exact integer sum).
    pub total: Money,
}

impl Quote {
    /// Whether the free-shipping branch was taken.
    #[inline]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Notice
// =============================================================================

/// An informational notice emitted alongside a quote.
///
/// Notices are observable output lines, not part of the `Quote` value.
/// Each notice is produced at most once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The product is a pre-order; the customer will be notified on dispatch.
    PreOrder,
    /// The product qualified for free shipping.
    FreeShipping,
}

/// Display renders the customer-facing notice line.
impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PreOrder => {
                write!(f, "We will send you a message when your product is on its way.")
            }
            Notice::FreeShipping => write!(f, "This product will receive free shipping"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
