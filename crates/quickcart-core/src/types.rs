//! # Domain Types
//!
//! Core domain types used throughout QuickCart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    ProductId    │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  (cart module)  │       │
//! │  │  id             │   │  u32 newtype    │   │  ─────────────  │       │
//! │  │  name           │   │  1..4 catalog   │   │  snapshot of a  │       │
//! │  │  price_cents    │   │  99 free gift   │   │  Product + qty  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Products are static and immutable: the catalog defines them once      │
//! │  and the cart only ever copies them into line-item snapshots.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier for a catalog product.
///
/// ## Why an Integer Newtype?
/// The catalog is a small fixed list addressed by small integer ids
/// (the free gift sits at a reserved sentinel id). A newtype keeps
/// product ids from mixing with quantities or cents in signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product id from its raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront catalog.
///
/// Static and immutable: defined by the catalog (or the gift promotion)
/// and copied into the cart as a frozen snapshot when added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display name shown in the product grid and on cart lines.
    pub name: String,

    /// Price in cents (smallest currency unit). Zero for the free gift.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product.
    pub fn new(id: ProductId, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id,
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new(99);
        assert_eq!(id.get(), 99);
        assert_eq!(id.to_string(), "99");
    }

    #[test]
    fn test_product_price_accessor() {
        let product = Product::new(ProductId::new(1), "Laptop", 50_000);
        assert_eq!(product.price(), Money::from_cents(50_000));
        assert_eq!(product.price().to_string(), "$500.00");
    }
}
