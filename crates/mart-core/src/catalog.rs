//! # Catalog Module
//!
//! The fixed set of purchasable products known to the program.
//!
//! ## Responsibilities
//! - Hold a fixed ordered sequence of [`Product`] records
//! - Exact-match name lookup (first match in catalog order wins)
//! - Validate entries once at construction
//!
//! The catalog is read-only at runtime: no create/update/delete operations
//! exist. Population is an external concern - the CLI either parses a JSON
//! file supplied by the operator or falls back to the built-in set below.

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::{validate_price_cents, validate_product_name};

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, read-only sequence of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an ordered product list, validating each entry.
    ///
    /// ## Errors
    /// Returns [`CoreError::MalformedCatalogEntry`] for the first entry with
    /// an empty name or a negative price. A bad catalog stops the run before
    /// any quote is computed.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (index, product) in products.iter().enumerate() {
            validate_product_name(&product.name).map_err(|reason| {
                CoreError::MalformedCatalogEntry {
                    index,
                    name: product.name.clone(),
                    reason,
                }
            })?;
            validate_price_cents(product.price_cents).map_err(|reason| {
                CoreError::MalformedCatalogEntry {
                    index,
                    name: product.name.clone(),
                    reason,
                }
            })?;
        }

        Ok(Catalog { products })
    }

    /// Parses a catalog from a JSON array of products.
    ///
    /// ## Format
    /// ```json
    /// [
    ///   { "name": "fanny pack", "price_cents": 2000, "pre_order": false }
    /// ]
    /// ```
    ///
    /// Pure string-to-value conversion; reading the file is the caller's job.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// The built-in development catalog, used when no catalog file is given.
    pub fn built_in() -> Self {
        // Entries are statically well-formed, so no validation pass needed.
        Catalog {
            products: vec![
                Product::new("fanny pack", 2000, false),
                Product::new("beanie", 1499, false),
                Product::new("tote bag", 1850, false),
                Product::new("souvenir mug", 2500, false),
                Product::new("denim jacket", 4200, false),
                Product::new("moon boots", 5999, true),
                Product::new("enamel pin", 650, false),
            ],
        }
    }

    /// Returns the first product whose name exactly equals the input.
    ///
    /// Case-sensitive, no trimming. Returns `None` if no entry matches.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
