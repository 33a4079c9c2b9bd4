//! # mart-core: Pure Business Logic for Mart
//!
//! This crate is the **heart** of Mart. It holds the catalog and the quote
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Mart Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     CLI (apps/cli)                            │  │
//! │  │   parse args ──► load catalog ──► print notices & summary     │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                ★ mart-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────────────┐  │  │
//! │  │  │  types  │  │  money  │  │ catalog │  │      quote      │  │  │
//! │  │  │ Product │  │  Money  │  │ lookup  │  │ shipping / tax  │  │  │
//! │  │  │  Quote  │  │ TaxCalc │  │ by name │  │ total / notices │  │  │
//! │  │  └─────────┘  └─────────┘  └─────────┘  └─────────────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CLOCK • PURE FUNCTIONS                          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate, Quote, Notice)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product catalog and name lookup
//! - [`quote`] - The quote calculation (shipping tier, tax proxy, totals)
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog entry validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, every time
//! 2. **Integer Money**: all monetary values are cents (i64), never floats
//! 3. **Explicit Errors**: a missing product is a typed error, not a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use mart_core::catalog::Catalog;
//! use mart_core::quote::quote_by_name;
//!
//! let catalog = Catalog::built_in();
//! let (product, quote) =
//!     quote_by_name(&catalog, "fanny pack", "575 Broadway, New York City, New York").unwrap();
//!
//! // $20.00 at 10% tax plus $5.00 flat shipping
//! assert_eq!(quote.tax_total.cents(), 200);
//! assert_eq!(quote.total.cents(), 2700);
//! # let _ = product;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod quote;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Notice, Product, Quote, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================
// The thresholds below are placeholder business rules inherited from the
// storefront, preserved as fixed constants rather than extension points.

/// Orders strictly above this price ship for free.
///
/// ## Business Rule
/// The threshold is exclusive: a product priced at exactly $25.00 still
/// pays the flat shipping fee.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(2500);

/// Flat shipping fee for orders at or below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Money = Money::from_cents(500);

/// Tax rate applied when the shipping address matches the jurisdiction
/// marker: 1000 bps = 10%.
pub const IN_STATE_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Tax rate applied everywhere else: 500 bps = 5%.
pub const OUT_OF_STATE_TAX_RATE: TaxRate = TaxRate::from_bps(500);

/// Substring that selects the in-state tax rate.
///
/// A crude jurisdiction proxy: matched case-sensitively anywhere in the
/// free-form shipping address, not a real tax-jurisdiction engine.
pub const TAX_JURISDICTION_MARKER: &str = "New York";
