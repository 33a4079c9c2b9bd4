//! Plain-text rendering of the quote summary.
//!
//! The summary block is contract output: fixed labels, fixed column
//! alignment, every amount with exactly two decimal digits (via the
//! `Display` impl on `Money`).

use mart_core::{Product, Quote};

/// Renders the fixed-format summary block, terminated by a newline.
///
/// ```text
/// Product:  fanny pack
/// Address:  575 Broadway, New York City, New York
/// Price:    $20.00
/// Tax:      $2.00
/// Shipping: $5.00
/// Total:    $27.00
/// ```
pub fn summary(product: &Product, shipping_address: &str, quote: &Quote) -> String {
    format!(
        "Product:  {}\n\
         Address:  {}\n\
         Price:    {}\n\
         Tax:      {}\n\
         Shipping: {}\n\
         Total:    {}\n",
        product.name,
        shipping_address,
        product.price(),
        quote.tax_total,
        quote.shipping,
        quote.total,
    )
}
