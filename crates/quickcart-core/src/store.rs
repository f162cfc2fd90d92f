//! # Cart Store
//!
//! The one stateful component of QuickCart: owns the catalog, the gift
//! promotion, and the cart, and keeps gift membership in sync with the
//! subtotal after every mutation.
//!
//! ## Gift Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Gift Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  subtotal >= threshold   ┌──────────────┐                 │
//! │  │  Locked  │─────────────────────────►│   Unlocked   │                 │
//! │  │ (absent) │◄─────────────────────────│ (in cart ×1) │                 │
//! │  └──────────┘  subtotal < threshold    └──────────────┘                 │
//! │        ▲                                      ▲                         │
//! │        │                                      │                         │
//! │        └────────── reconcile_gift() ──────────┘                         │
//! │              runs after every mutation                                  │
//! │                                                                         │
//! │  increment ──┐                                                          │
//! │  decrement ──┼──► cart changes ──► reconcile_gift() ──► view            │
//! │  set qty   ──┤                                                          │
//! │  clear     ──┘                                                          │
//! │                                                                         │
//! │  The gift row itself is OFF LIMITS to these operations: membership is  │
//! │  derived from the subtotal, never from user action.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why No Mutex?
//! The cart is a single-threaded, synchronous state machine driven by UI
//! callbacks. The embedding presentation layer owns exactly one store and
//! calls it with `&mut self`; there is nothing to lock.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::cart::{Cart, CartTotals, LineItem};
use crate::catalog::Catalog;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::promotion::{GiftPromotion, GiftStatus};
use crate::types::{Product, ProductId};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Store
// =============================================================================

/// The cart state machine the presentation layer drives.
///
/// ## Invariants
/// - Every mutation re-runs gift reconciliation before returning, so a
///   caller can never observe a cart whose gift membership disagrees
///   with its subtotal
/// - Mutations addressed at the gift id are ignored
/// - All operations are total: bad input clamps or no-ops, never errors
#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Catalog,
    promotion: GiftPromotion,
    cart: Cart,
}

impl CartStore {
    /// Creates a store over a catalog and gift promotion, starting with
    /// an empty cart.
    ///
    /// ## Errors
    /// The gift id must not collide with a catalog id: a sellable product
    /// cannot double as the auto-managed gift.
    pub fn new(catalog: Catalog, promotion: GiftPromotion) -> CoreResult<Self> {
        if catalog.get(promotion.gift_id()).is_some() {
            return Err(ValidationError::Duplicate {
                field: "gift id".to_string(),
                value: promotion.gift_id().to_string(),
            }
            .into());
        }

        Ok(CartStore {
            catalog,
            promotion,
            cart: Cart::new(),
        })
    }

    /// The demo storefront: four-product catalog, free Wireless Mouse at
    /// $1000.00.
    pub fn demo() -> Self {
        CartStore::new(Catalog::demo(), GiftPromotion::demo())
            .expect("demo configuration is valid")
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds 1 to a product's quantity, inserting it at quantity 1 when
    /// absent. A line already at `MAX_ITEM_QUANTITY` stays there.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Add to Cart" / the "+" stepper
    ///      │
    ///      ▼
    /// increment(&laptop)
    ///      │
    ///      ▼
    /// line qty += 1 (or new line ×1) ──► reconcile_gift()
    /// ```
    pub fn increment(&mut self, product: &Product) {
        debug!(product_id = %product.id, "increment");

        if product.id == self.promotion.gift_id() {
            debug!(product_id = %product.id, "gift is auto-managed; ignoring");
            return;
        }

        self.cart.add_item(product, 1);
        self.reconcile_gift();
    }

    /// Subtracts 1 from a product's quantity, removing the line at zero.
    /// Absent product: no-op.
    pub fn decrement(&mut self, product: &Product) {
        debug!(product_id = %product.id, "decrement");

        if product.id == self.promotion.gift_id() {
            debug!(product_id = %product.id, "gift is auto-managed; ignoring");
            return;
        }

        self.cart.remove_one(product.id);
        self.reconcile_gift();
    }

    /// Sets a product's quantity from the quantity input box.
    ///
    /// ## Behavior
    /// - Negative input clamps to 0, input above `MAX_ITEM_QUANTITY`
    ///   clamps to the cap
    /// - Quantity 0 removes the line
    /// - Existing line: quantity is replaced
    /// - Absent line: inserted from the catalog snapshot; an id the
    ///   catalog doesn't know is a no-op
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        // Quantity box input clamps into 0..=MAX_ITEM_QUANTITY
        let quantity = quantity.clamp(0, MAX_ITEM_QUANTITY);
        debug!(product_id = %product_id, quantity, "set_quantity");

        if product_id == self.promotion.gift_id() {
            debug!(product_id = %product_id, "gift is auto-managed; ignoring");
            return;
        }

        if !self.cart.set_quantity(product_id, quantity) && quantity > 0 {
            match self.catalog.get(product_id) {
                Some(product) => {
                    let product = product.clone();
                    self.cart.add_item(&product, quantity);
                }
                None => {
                    debug!(product_id = %product_id, "id not in catalog; ignoring");
                }
            }
        }

        self.reconcile_gift();
    }

    /// Empties the cart (which also drops the gift).
    pub fn clear(&mut self) {
        debug!("clear cart");
        self.cart.clear();
        self.reconcile_gift();
    }

    /// Syncs gift membership to the current subtotal.
    ///
    /// ## Behavior
    /// - Subtotal >= threshold and gift absent: append gift ×1
    /// - Subtotal < threshold and gift present: remove it
    ///
    /// Runs automatically at the end of every mutation; calling it again
    /// in between is an idempotent no-op. The derivation is recomputed
    /// from the line items each time; no cached unlock flag exists.
    pub fn reconcile_gift(&mut self) {
        let subtotal = self.cart.subtotal();
        let gift_id = self.promotion.gift_id();

        if self.promotion.is_unlocked(subtotal) {
            if !self.cart.contains(gift_id) {
                debug!(subtotal = %subtotal, "threshold reached; adding free gift");
                let gift = self.promotion.gift().clone();
                self.cart.add_item(&gift, 1);
            }
        } else if self.cart.remove_item(gift_id) {
            debug!(subtotal = %subtotal, "below threshold; removing free gift");
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The catalog this store sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The gift promotion configuration.
    pub fn promotion(&self) -> &GiftPromotion {
        &self.promotion
    }

    /// The cart lines in insertion order (gift last, when present).
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The subtotal: price × quantity summed over all lines, recomputed
    /// on every call.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// A product's current cart quantity, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.cart.quantity_of(product_id)
    }

    /// Whether a product id has a line in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.cart.contains(product_id)
    }

    /// Whether the cart currently holds the free gift.
    pub fn has_gift(&self) -> bool {
        self.cart.contains(self.promotion.gift_id())
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Number of unique lines.
    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Gift promotion state for the summary panel.
    pub fn gift_status(&self) -> GiftStatus {
        self.promotion.status(self.cart.subtotal())
    }

    /// The full serializable view: lines, totals, gift status.
    pub fn view(&self) -> CartView {
        let gift_id = self.promotion.gift_id();

        CartView {
            items: self
                .cart
                .items()
                .iter()
                .map(|item| LineView::new(item, gift_id))
                .collect(),
            totals: CartTotals::from(&self.cart),
            gift: self.gift_status(),
        }
    }
}

// =============================================================================
// View DTOs
// =============================================================================

/// One cart line as the presentation layer sees it.
///
/// ## Why a DTO?
/// - Decouples the internal line item from the API contract
/// - Adds the derived fields the UI renders (line total, gift badge)
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
    /// True for the auto-managed gift row: the UI shows a FREE GIFT badge
    /// instead of quantity controls.
    pub is_gift: bool,
}

impl LineView {
    fn new(item: &LineItem, gift_id: ProductId) -> Self {
        LineView {
            product_id: item.product_id,
            name: item.name.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
            line_total_cents: item.line_total_cents(),
            is_gift: item.product_id == gift_id,
        }
    }
}

/// Full cart view: lines, totals and gift status in one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub items: Vec<LineView>,
    pub totals: CartTotals,
    pub gift: GiftStatus,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fetches a catalog product by raw id for driving mutations.
    fn product(store: &CartStore, id: u32) -> Product {
        store
            .catalog()
            .get(ProductId::new(id))
            .cloned()
            .expect("id is in the demo catalog")
    }

    #[test]
    fn test_increment_inserts_then_bumps() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.increment(&laptop);
        assert_eq!(store.quantity_of(laptop.id), 1);

        store.increment(&laptop);
        assert_eq!(store.quantity_of(laptop.id), 2);
        assert_eq!(store.item_count(), 2); // laptop + auto-added gift
    }

    #[test]
    fn test_increment_then_decrement_restores_prior_state() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);
        let phone = product(&store, 2);

        store.increment(&laptop);
        let before = store.view();

        store.increment(&phone);
        store.decrement(&phone);

        assert_eq!(store.view(), before);
    }

    #[test]
    fn test_increment_then_decrement_restores_gift_membership() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        // $500.00: gift locked
        store.increment(&laptop);
        let before = store.view();
        assert!(!store.has_gift());

        // $1000.00: gift unlocked, then back down
        store.increment(&laptop);
        assert!(store.has_gift());

        store.decrement(&laptop);
        assert!(!store.has_gift());
        assert_eq!(store.view(), before);
    }

    #[test]
    fn test_gift_added_at_threshold_with_quantity_one() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.increment(&laptop);
        store.increment(&laptop); // 2 × $500.00 = exactly $1000.00

        assert_eq!(store.subtotal(), Money::from_cents(100_000));
        assert!(store.has_gift());
        assert_eq!(store.quantity_of(store.promotion().gift_id()), 1);
    }

    #[test]
    fn test_gift_unlocks_exactly_at_threshold() {
        let mut store = CartStore::demo();
        let phone = product(&store, 2);
        let headphones = product(&store, 3);

        // 3 × $300.00 = $900.00: still locked
        store.set_quantity(phone.id, 3);
        assert!(!store.has_gift());

        // + $100.00 = exactly $1000.00: unlocked (>=, not >)
        store.increment(&headphones);
        assert!(store.has_gift());
    }

    #[test]
    fn test_gift_removed_when_subtotal_drops() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.set_quantity(laptop.id, 2);
        assert!(store.has_gift());

        store.decrement(&laptop);
        assert!(!store.has_gift());
        assert_eq!(store.subtotal(), Money::from_cents(50_000));
    }

    #[test]
    fn test_gift_price_never_moves_subtotal() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.set_quantity(laptop.id, 2);
        assert!(store.has_gift());

        // 2 lines, but the gift contributes nothing
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.subtotal(), Money::from_cents(100_000));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut store = CartStore::demo();
        let phone = product(&store, 2);

        store.set_quantity(phone.id, 3);
        assert_eq!(store.quantity_of(phone.id), 3);

        store.set_quantity(phone.id, 0);
        assert!(!store.contains(phone.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_clamps_to_zero() {
        let mut store = CartStore::demo();
        let phone = product(&store, 2);

        store.set_quantity(phone.id, 3);
        store.set_quantity(phone.id, -7);

        assert!(!store.contains(phone.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_to_item_cap() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.set_quantity(laptop.id, i64::MAX);

        assert_eq!(store.quantity_of(laptop.id), MAX_ITEM_QUANTITY);
        assert_eq!(
            store.subtotal(),
            Money::from_cents(50_000 * MAX_ITEM_QUANTITY)
        );
        assert!(store.has_gift());

        // Incrementing a line already at the cap leaves it there
        store.increment(&laptop);
        assert_eq!(store.quantity_of(laptop.id), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_set_quantity_upserts_from_catalog() {
        let mut store = CartStore::demo();
        let watch_id = ProductId::new(4);

        // No prior line: inserted straight from the catalog snapshot
        store.set_quantity(watch_id, 2);

        assert_eq!(store.quantity_of(watch_id), 2);
        assert_eq!(store.items()[0].name, "Smartwatch");
        assert_eq!(store.subtotal(), Money::from_cents(30_000));
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut store = CartStore::demo();

        store.set_quantity(ProductId::new(42), 5);

        assert!(store.is_empty());
        assert_eq!(store.subtotal(), Money::zero());
    }

    #[test]
    fn test_gift_mutations_are_ignored() {
        let mut store = CartStore::demo();
        let gift = store.promotion().gift().clone();
        let laptop = product(&store, 1);

        // Locked: the gift cannot be forced in
        store.increment(&gift);
        store.set_quantity(gift.id, 5);
        assert!(!store.has_gift());
        assert!(store.is_empty());

        // Unlocked: the gift cannot be forced out or multiplied
        store.set_quantity(laptop.id, 2);
        assert!(store.has_gift());

        store.decrement(&gift);
        store.set_quantity(gift.id, 0);
        store.set_quantity(gift.id, 9);
        assert!(store.has_gift());
        assert_eq!(store.quantity_of(gift.id), 1);
    }

    #[test]
    fn test_gift_appended_after_existing_lines() {
        let mut store = CartStore::demo();
        let phone = product(&store, 2);
        let laptop = product(&store, 1);

        store.increment(&phone);
        store.set_quantity(laptop.id, 2); // crosses the threshold

        let ids: Vec<u32> = store.items().iter().map(|i| i.product_id.get()).collect();
        assert_eq!(ids, [2, 1, 99]); // insertion order, gift last
    }

    #[test]
    fn test_lines_added_after_unlock_follow_the_gift() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);
        let headphones = product(&store, 3);

        store.set_quantity(laptop.id, 2); // unlock appends the gift here
        store.increment(&headphones); // later lines keep appending after it

        let ids: Vec<u32> = store.items().iter().map(|i| i.product_id.get()).collect();
        assert_eq!(ids, [1, 99, 3]);
        assert!(store.has_gift());
    }

    #[test]
    fn test_reconcile_gift_is_idempotent() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.set_quantity(laptop.id, 2);
        let settled = store.view();

        store.reconcile_gift();
        store.reconcile_gift();

        assert_eq!(store.view(), settled);
        assert_eq!(store.quantity_of(store.promotion().gift_id()), 1);
    }

    #[test]
    fn test_decrement_absent_product_is_noop() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.decrement(&laptop);

        assert!(store.is_empty());
        assert_eq!(store.subtotal(), Money::zero());
    }

    #[test]
    fn test_clear_empties_cart_and_gift() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);

        store.set_quantity(laptop.id, 3);
        assert!(store.has_gift());

        store.clear();

        assert!(store.is_empty());
        assert!(!store.has_gift());
        assert_eq!(store.total_quantity(), 0);
    }

    #[test]
    fn test_gift_at_threshold_with_small_unit_promotion() {
        // The classic storefront numbers on a raw cents scale:
        // price 500, quantity 2, threshold 1000.
        let catalog = Catalog::new(vec![Product::new(ProductId::new(1), "Widget", 500)])
            .expect("catalog is valid");
        let promotion = GiftPromotion::new(
            Product::new(ProductId::new(9), "Sticker Pack", 0),
            Money::from_cents(1000),
        )
        .expect("promotion is valid");
        let mut store = CartStore::new(catalog, promotion).expect("configuration is valid");

        store.set_quantity(ProductId::new(1), 2);

        assert_eq!(store.subtotal(), Money::from_cents(1000));
        assert!(store.has_gift());
        assert_eq!(store.quantity_of(ProductId::new(9)), 1);
    }

    #[test]
    fn test_rejects_gift_id_colliding_with_catalog() {
        let catalog = Catalog::demo();
        let promotion = GiftPromotion::new(
            Product::new(ProductId::new(1), "Laptop But Free", 0),
            Money::from_cents(100_000),
        )
        .expect("promotion is valid");

        assert!(CartStore::new(catalog, promotion).is_err());
    }

    #[test]
    fn test_view_carries_lines_totals_and_gift() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);
        let headphones = product(&store, 3);

        store.set_quantity(laptop.id, 2);
        store.increment(&headphones);

        let view = store.view();

        assert_eq!(view.items.len(), 3);
        assert_eq!(view.totals.item_count, 3);
        assert_eq!(view.totals.total_quantity, 4);
        assert_eq!(view.totals.subtotal_cents, 110_000);

        assert!(view.gift.unlocked);
        assert_eq!(view.gift.remaining_cents, 0);
        assert_eq!(view.gift.progress_percent, 100);

        let gift_line = view
            .items
            .iter()
            .find(|line| line.is_gift)
            .expect("gift line present");
        assert_eq!(gift_line.quantity, 1);
        assert_eq!(gift_line.line_total_cents, 0);

        let laptop_line = &view.items[0];
        assert!(!laptop_line.is_gift);
        assert_eq!(laptop_line.line_total_cents, 100_000);
    }

    #[test]
    fn test_view_remaining_while_locked() {
        let mut store = CartStore::demo();
        let headphones = product(&store, 3);

        store.set_quantity(headphones.id, 2); // $200.00

        let view = store.view();
        assert!(!view.gift.unlocked);
        assert_eq!(view.gift.remaining_cents, 80_000); // "Add $800.00 more…"
        assert_eq!(view.gift.progress_percent, 20);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let mut store = CartStore::demo();
        let laptop = product(&store, 1);
        store.increment(&laptop);

        let json = serde_json::to_value(store.view()).expect("view serializes");

        let line = &json["items"][0];
        assert_eq!(line["productId"], 1);
        assert_eq!(line["unitPriceCents"], 50_000);
        assert_eq!(line["lineTotalCents"], 50_000);
        assert_eq!(line["isGift"], false);

        assert_eq!(json["totals"]["subtotalCents"], 50_000);
        assert_eq!(json["gift"]["remainingCents"], 50_000);
        assert_eq!(json["gift"]["progressPercent"], 50);
        assert_eq!(json["gift"]["giftName"], "Wireless Mouse");
    }
}
