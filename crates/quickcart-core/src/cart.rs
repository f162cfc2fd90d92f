//! # Cart Module
//!
//! The line-item collection beneath the store.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Collection Operations                           │
//! │                                                                         │
//! │  Store Action             Cart Operation          State Change          │
//! │  ────────────             ──────────────          ────────────          │
//! │                                                                         │
//! │  increment ──────────────► add_item(p, 1) ──────► qty += 1 | push      │
//! │                                                                         │
//! │  decrement ──────────────► remove_one(id) ──────► qty -= 1 | drop      │
//! │                                                                         │
//! │  set quantity ───────────► set_quantity(id, n) ─► qty = n  | drop at 0 │
//! │                                                                         │
//! │  gift reconcile ─────────► add_item / remove_item                      │
//! │                                                                         │
//! │  NOTE: This layer knows nothing about the gift promotion. It keeps     │
//! │        the collection invariants; the store decides what to mutate.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Line Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: key within the cart (unique per line)
/// - name/price: frozen copy of the product data at time of adding.
///   The cart displays consistent data even if a future catalog revision
///   changes the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product id this line refers to.
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Within `1..=MAX_ITEM_QUANTITY` while the line
    /// exists.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a new line item from a product and quantity.
    ///
    /// ## Price Freezing
    /// The name and price are captured at this moment and never re-read
    /// from the catalog.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity) in cents.
    ///
    /// Saturates at the `i64` limits rather than overflowing.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(self.quantity)
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of line items keyed by
/// product id.
///
/// ## Invariants
/// - Lines are unique by `product_id`
/// - Quantity is within `1..=MAX_ITEM_QUANTITY` for every line (a
///   quantity reaching 0 removes the line; negative quantities never
///   enter; input above the cap clamps to it)
/// - Iteration order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Adds quantity of a product, inserting a new line if absent.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases
    /// - Product not in cart: appended as a new line (frozen snapshot)
    /// - Non-positive quantity: no-op (the invariant stays intact)
    /// - The resulting quantity clamps at `MAX_ITEM_QUANTITY`
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity).min(MAX_ITEM_QUANTITY);
            return;
        }

        self.items
            .push(LineItem::from_product(product, quantity.min(MAX_ITEM_QUANTITY)));
    }

    /// Subtracts one from a line's quantity, dropping the line at zero.
    ///
    /// Absent product id: no-op.
    pub fn remove_one(&mut self, product_id: ProductId) {
        let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) else {
            return;
        };

        if item.quantity == 1 {
            self.items.retain(|i| i.product_id != product_id);
        } else {
            item.quantity -= 1;
        }
    }

    /// Replaces the quantity of an existing line.
    ///
    /// ## Behavior
    /// - Quantity <= 0: removes the line
    /// - Quantity above `MAX_ITEM_QUANTITY`: clamps to the cap
    /// - Line absent: no-op (returns false so the caller can insert from
    ///   the catalog instead)
    ///
    /// ## Returns
    /// Whether a line with this product id existed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity.min(MAX_ITEM_QUANTITY);
            true
        } else {
            false
        }
    }

    /// Removes a line from the cart by product id.
    ///
    /// ## Returns
    /// Whether a line was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks whether a product id has a line in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    /// Returns the quantity of a product, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map_or(0, |i| i.quantity)
    }

    /// Returns the number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal in cents.
    ///
    /// Derived on every call, never cached. Sums price × quantity over
    /// all lines (the zero-priced gift contributes nothing). Saturates
    /// at the `i64` limits rather than overflowing.
    pub fn subtotal_cents(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total_cents()))
    }

    /// Calculates the subtotal as Money.
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {}", id), price_cents)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 2);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_cents(), 100_000);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 2);
        cart.add_item(&product, 3);

        assert_eq!(cart.item_count(), 1); // Still one unique line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_add_non_positive_quantity_is_noop() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 0);
        cart.add_item(&product, -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_remove_one_decrements_then_drops() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 2);
        cart.remove_one(product.id);
        assert_eq!(cart.quantity_of(product.id), 1);

        cart.remove_one(product.id);
        assert!(!cart.contains(product.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_remove_one_absent_is_noop() {
        let mut cart = Cart::new();
        cart.remove_one(ProductId::new(42));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_set_quantity_replaces() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 2);
        assert!(cart.set_quantity(product.id, 7));
        assert_eq!(cart.quantity_of(product.id), 7);
    }

    #[test]
    fn test_cart_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 2);
        assert!(cart.set_quantity(product.id, 0));
        assert!(!cart.contains(product.id));
    }

    #[test]
    fn test_cart_set_quantity_absent_returns_false() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(ProductId::new(42), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_quantity_clamps_at_cap() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, i64::MAX);
        assert_eq!(cart.quantity_of(product.id), MAX_ITEM_QUANTITY);

        // Merging more in stays at the cap instead of overflowing
        cart.add_item(&product, i64::MAX);
        assert_eq!(cart.quantity_of(product.id), MAX_ITEM_QUANTITY);

        assert!(cart.set_quantity(product.id, i64::MAX));
        assert_eq!(cart.quantity_of(product.id), MAX_ITEM_QUANTITY);
        assert_eq!(cart.subtotal_cents(), 50_000 * MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_cart_add_saturates_at_cap_when_merging() {
        let mut cart = Cart::new();
        let product = test_product(1, 50_000);

        cart.add_item(&product, 998);
        cart.add_item(&product, 5);
        assert_eq!(cart.quantity_of(product.id), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_line_total_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, i64::MAX), 3);
        cart.add_item(&test_product(2, i64::MAX), 3);

        assert_eq!(cart.quantity_of(ProductId::new(1)), 3);
        assert_eq!(cart.subtotal_cents(), i64::MAX);
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(3, 10_000), 1);
        cart.add_item(&test_product(1, 50_000), 1);
        cart.add_item(&test_product(2, 30_000), 1);

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product_id.get()).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn test_line_snapshot_is_frozen() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 50_000), 1);

        // Same id arriving with different product data only bumps the
        // quantity; the original snapshot stays.
        let revised = Product::new(ProductId::new(1), "Renamed", 99_999);
        cart.add_item(&revised, 1);

        let line = &cart.items()[0];
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.unit_price_cents, 50_000);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_cart_subtotal_over_lines() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 50_000), 1); // $500.00
        cart.add_item(&test_product(3, 10_000), 2); // $200.00

        assert_eq!(cart.subtotal_cents(), 70_000);
        assert_eq!(cart.subtotal(), Money::from_cents(70_000));
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 50_000), 2);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }

    #[test]
    fn test_cart_totals_view() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 50_000), 2);
        cart.add_item(&test_product(2, 30_000), 1);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 130_000);
    }
}
