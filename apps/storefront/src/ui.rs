//! # Terminal Rendering
//!
//! Turns store state into the three sections of the storefront screen:
//! product grid, cart summary (with gift progress), and cart items.
//!
//! Every function returns a `String` instead of printing so the output
//! can be unit tested.

use quickcart_core::{CartStore, Money};

/// Width of the gift progress bar in cells.
const PROGRESS_CELLS: usize = 20;

/// The product grid: every catalog product with its price and, when in
/// the cart, its current quantity.
pub fn shop(store: &CartStore) -> String {
    let mut out = String::new();
    out.push_str("Products\n");
    out.push_str("--------\n");

    for product in store.catalog().products() {
        let quantity = store.quantity_of(product.id);
        out.push_str(&format!(
            "  [{}] {:<12} {:>10}",
            product.id,
            product.name,
            product.price().to_string(),
        ));
        if quantity > 0 {
            out.push_str(&format!("  (in cart: {quantity})"));
        }
        out.push('\n');
    }

    out
}

/// The cart summary: subtotal plus the gift banner.
///
/// Below the threshold the banner counts down and draws a progress bar;
/// at or above it, it celebrates instead.
pub fn summary(store: &CartStore) -> String {
    let status = store.gift_status();
    let mut out = String::new();
    out.push_str("Cart Summary\n");
    out.push_str("------------\n");
    out.push_str(&format!("  Subtotal: {}\n", store.subtotal()));

    if status.unlocked {
        out.push_str(&format!("  You got a free {}!\n", status.gift_name));
    } else {
        out.push_str(&format!(
            "  Add {} more to get a FREE {}!\n",
            Money::from_cents(status.remaining_cents),
            status.gift_name,
        ));
        out.push_str(&format!(
            "  [{}] {}%\n",
            progress_bar(status.progress_percent),
            status.progress_percent,
        ));
    }

    out
}

/// The cart items section: one line per cart row, with the gift row
/// badged instead of showing quantity controls.
pub fn cart(store: &CartStore) -> String {
    let mut out = String::new();

    if store.is_empty() {
        out.push_str("  Your Cart is Empty\n");
        out.push_str("  Add some products to see them here!\n");
        return out;
    }

    out.push_str("Cart Items\n");
    out.push_str("----------\n");

    let gift_id = store.promotion().gift_id();
    for item in store.items() {
        out.push_str(&format!(
            "  {:<16} {} x {} = {}",
            item.name,
            item.unit_price(),
            item.quantity,
            item.line_total(),
        ));
        if item.product_id == gift_id {
            out.push_str("  [FREE GIFT]");
        }
        out.push('\n');
    }

    out
}

/// Renders a percentage as a fixed-width bar, e.g. `██████░░░░░░░░░░░░░░`.
fn progress_bar(percent: u8) -> String {
    let filled = (percent as usize * PROGRESS_CELLS) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(PROGRESS_CELLS - filled));
    bar
}

// =============================================================================
// Unit Tests
// =============================================================================
