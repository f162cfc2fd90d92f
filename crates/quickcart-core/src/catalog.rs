//! # Catalog Module
//!
//! The static product catalog the storefront sells from.
//!
//! Products are defined once, validated once, and never mutated. The cart
//! resolves `ProductId`s against this list when it needs name and price
//! for a new line item.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Product, ProductId};
use crate::validation::{validate_price_cents, validate_product_name};

/// The demo storefront's fixed product list: (id, name, price in cents).
const DEMO_PRODUCTS: &[(u32, &str, i64)] = &[
    (1, "Laptop", 50_000),
    (2, "Smartphone", 30_000),
    (3, "Headphones", 10_000),
    (4, "Smartwatch", 15_000),
];

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, id-unique list of products.
///
/// ## Invariants
/// - Product ids are unique (checked at construction)
/// - Names are non-empty, prices non-negative (checked at construction)
/// - Iteration order is definition order (the product grid renders in
///   the same order every time)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a product list, validating every entry.
    ///
    /// ## Errors
    /// - Empty or over-long product name
    /// - Negative price
    /// - Duplicate product id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        for (idx, product) in products.iter().enumerate() {
            validate_product_name(&product.name)?;
            validate_price_cents(product.price_cents)?;

            if products[..idx].iter().any(|p| p.id == product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The demo storefront catalog: Laptop $500, Smartphone $300,
    /// Headphones $100, Smartwatch $150.
    pub fn demo() -> Self {
        let products = DEMO_PRODUCTS
            .iter()
            .map(|&(id, name, price_cents)| Product::new(ProductId::new(id), name, price_cents))
            .collect();

        Catalog::new(products).expect("demo catalog is valid")
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns the products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
