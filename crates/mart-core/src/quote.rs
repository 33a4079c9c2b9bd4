//! # Quote Calculator
//!
//! Produces a [`Quote`] for one named product and one shipping address.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Quote Calculation                              │
//! │                                                                     │
//! │  Catalog ──find_by_name──► Product                                  │
//! │     │                         │                                     │
//! │     │ (no match)              ▼                                     │
//! │     ▼                   price > $25.00 ──yes──► shipping = $0       │
//! │  ProductNotFound              │no                                   │
//! │                               ▼                                     │
//! │                         shipping = $5.00                            │
//! │                               │                                     │
//! │                               ▼                                     │
//! │             address contains "New York" ──yes──► tax = 10%          │
//! │                               │no                                   │
//! │                               ▼                                     │
//! │                           tax = 5%                                  │
//! │                               │                                     │
//! │                               ▼                                     │
//! │          tax_total = price × rate;  total = price + tax + shipping  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-pass and stateless: no retries, no partial results, no state
//! machine. All branching constants live in the crate root.

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Notice, Product, Quote};
use crate::{
    FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, IN_STATE_TAX_RATE, OUT_OF_STATE_TAX_RATE,
    TAX_JURISDICTION_MARKER,
};

// =============================================================================
// Quote Computation
// =============================================================================

/// Computes the pricing breakdown for a resolved product and an address.
///
/// ## Rules
/// - Shipping: price strictly above [`FREE_SHIPPING_THRESHOLD`] ships free;
///   exactly $25.00 does NOT qualify and pays [`FLAT_SHIPPING_FEE`].
/// - Tax: the address is matched for the literal substring
///   [`TAX_JURISDICTION_MARKER`] (case-sensitive, anywhere in the string).
///   A match selects 10%, anything else 5%.
/// - `tax_total` rounds half-up at the cent; `total` is an exact sum.
pub fn compute_quote(product: &Product, shipping_address: &str) -> Quote {
    let price = product.price();

    let shipping = if price > FREE_SHIPPING_THRESHOLD {
        Money::zero()
    } else {
        FLAT_SHIPPING_FEE
    };

    let tax_rate = if shipping_address.contains(TAX_JURISDICTION_MARKER) {
        IN_STATE_TAX_RATE
    } else {
        OUT_OF_STATE_TAX_RATE
    };

    let tax_total = price.calculate_tax(tax_rate);
    let total = price + tax_total + shipping;

    Quote {
        shipping,
        tax_rate,
        tax_total,
        total,
    }
}

/// Collects the informational notices for a product/quote pair.
///
/// Order is stable: pre-order first, then free shipping. Each notice
/// appears at most once.
pub fn notices(product: &Product, quote: &Quote) -> Vec<Notice> {
    let mut out = Vec::new();
    if product.pre_order {
        out.push(Notice::PreOrder);
    }
    if quote.free_shipping() {
        out.push(Notice::FreeShipping);
    }
    out
}

/// Looks up a product by name and computes its quote in one step.
///
/// ## Errors
/// Returns [`CoreError::ProductNotFound`] when no catalog entry matches,
/// instead of letting downstream math run against an absent product.
pub fn quote_by_name<'a>(
    catalog: &'a Catalog,
    product_name: &str,
    shipping_address: &str,
) -> CoreResult<(&'a Product, Quote)> {
    let product = catalog
        .find_by_name(product_name)
        .ok_or_else(|| CoreError::ProductNotFound(product_name.to_string()))?;

    Ok((product, compute_quote(product, shipping_address)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::TaxRate;

    const NY_ADDRESS: &str = "575 Broadway, New York City, New York";
    const TX_ADDRESS: &str = "1100 Congress Ave, Austin, TX";

    fn product(price_cents: i64, pre_order: bool) -> Product {
        Product::new("fanny pack", price_cents, pre_order)
    }

    #[test]
    fn test_shipping_tiers() {
        // At or below $25.00: flat fee
        assert_eq!(
            compute_quote(&product(2000, false), TX_ADDRESS).shipping,
            Money::from_cents(500)
        );
        // Above $25.00: free
        assert_eq!(
            compute_quote(&product(2501, false), TX_ADDRESS).shipping,
            Money::zero()
        );
    }

    #[test]
    fn test_shipping_threshold_is_exclusive() {
        // Exactly $25.00 does not qualify for free shipping.
        let quote = compute_quote(&product(2500, false), TX_ADDRESS);
        assert_eq!(quote.shipping, Money::from_cents(500));
        assert!(!quote.free_shipping());
    }

    #[test]
    fn test_tax_rate_by_address_substring() {
        // Marker anywhere in the string selects 10%.
        for address in [
            NY_ADDRESS,
            "New York",
            "somewhere in New York state",
            "New Yorker Hotel, 8th Ave",
        ] {
            let quote = compute_quote(&product(2000, false), address);
            assert_eq!(quote.tax_rate, TaxRate::from_bps(1000), "{address}");
        }

        // Case-sensitive: lowercase or absent marker selects 5%.
        for address in [TX_ADDRESS, "new york", "York, New England", ""] {
            let quote = compute_quote(&product(2000, false), address);
            assert_eq!(quote.tax_rate, TaxRate::from_bps(500), "{address}");
        }
    }

    #[test]
    fn test_totals_are_exact() {
        let quote = compute_quote(&product(2000, false), NY_ADDRESS);
        assert_eq!(
            quote.total,
            product(2000, false).price() + quote.tax_total + quote.shipping
        );
    }

    #[test]
    fn test_scenario_fanny_pack_new_york() {
        // $20.00 fanny pack shipped to New York: no notices, $5 shipping,
        // 10% tax, $27.00 total.
        let p = product(2000, false);
        let quote = compute_quote(&p, NY_ADDRESS);

        assert_eq!(quote.shipping, Money::from_cents(500));
        assert_eq!(quote.tax_rate, TaxRate::from_bps(1000));
        assert_eq!(quote.tax_total, Money::from_cents(200));
        assert_eq!(quote.total, Money::from_cents(2700));
        assert!(notices(&p, &quote).is_empty());
    }

    #[test]
    fn test_scenario_free_shipping_out_of_state() {
        // Same product at $30.00 to a non-NY address: free-shipping notice,
        // 5% tax, $31.50 total.
        let p = product(3000, false);
        let quote = compute_quote(&p, TX_ADDRESS);

        assert_eq!(quote.shipping, Money::zero());
        assert_eq!(quote.tax_rate, TaxRate::from_bps(500));
        assert_eq!(quote.tax_total, Money::from_cents(150));
        assert_eq!(quote.total, Money::from_cents(3150));
        assert_eq!(notices(&p, &quote), vec![Notice::FreeShipping]);
    }

    #[test]
    fn test_pre_order_notice_exactly_once() {
        // Pre-order notice is independent of price and address.
        for (price_cents, address) in [(2000, NY_ADDRESS), (3000, TX_ADDRESS), (2500, "")] {
            let p = product(price_cents, true);
            let quote = compute_quote(&p, address);
            let emitted = notices(&p, &quote);
            assert_eq!(
                emitted.iter().filter(|n| **n == Notice::PreOrder).count(),
                1
            );
        }
    }

    #[test]
    fn test_quote_by_name_resolves_product() {
        let catalog = Catalog::built_in();
        let (p, quote) = quote_by_name(&catalog, "fanny pack", NY_ADDRESS).unwrap();
        assert_eq!(p.name, "fanny pack");
        assert_eq!(quote.total, Money::from_cents(2700));
    }

    #[test]
    fn test_quote_by_name_missing_product_is_explicit_error() {
        let catalog = Catalog::built_in();
        let err = quote_by_name(&catalog, "solar shades", NY_ADDRESS).unwrap_err();
        match err {
            CoreError::ProductNotFound(name) => assert_eq!(name, "solar shades"),
            other => panic!("expected ProductNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_free_item_quote() {
        // Zero price is allowed: pays flat shipping, zero tax.
        let p = product(0, false);
        let quote = compute_quote(&p, NY_ADDRESS);
        assert_eq!(quote.tax_total, Money::zero());
        assert_eq!(quote.total, Money::from_cents(500));
    }
}
