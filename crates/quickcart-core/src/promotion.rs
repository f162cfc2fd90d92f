//! # Gift Promotion Module
//!
//! The single pricing rule in QuickCart: spend past a threshold, get a
//! free gift.
//!
//! ## Promotion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Gift Promotion Derivations                           │
//! │                                                                         │
//! │  subtotal $647.00, threshold $1000.00                                   │
//! │       │                                                                 │
//! │       ├── is_unlocked()      → false                                    │
//! │       ├── remaining()        → $353.00                                  │
//! │       │     "Add $353.00 more to get a FREE Wireless Mouse!"            │
//! │       └── progress_percent() → 64                                       │
//! │             ▓▓▓▓▓▓▓▓▓▓▓▓▓░░░░░░░  (banner progress bar)                 │
//! │                                                                         │
//! │  subtotal $1000.00 (exactly at threshold)                               │
//! │       │                                                                 │
//! │       ├── is_unlocked()      → true   (>=, not >)                       │
//! │       ├── remaining()        → $0.00                                    │
//! │       └── progress_percent() → 100                                      │
//! │             "You got a free Wireless Mouse!"                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure derivation over a subtotal. Membership of the
//! gift in the cart is the store's job (`store::CartStore::reconcile_gift`);
//! this module only answers "should it be there?".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{validate_gift_price_cents, validate_product_name, validate_threshold_cents};

/// Demo promotion: a free Wireless Mouse at a $1000.00 spend.
const DEMO_GIFT: (u32, &str) = (99, "Wireless Mouse");
const DEMO_THRESHOLD_CENTS: i64 = 100_000;

// =============================================================================
// Gift Promotion
// =============================================================================

/// The threshold promotion configuration: which product is the gift and
/// how much a cart must hold to earn it.
///
/// ## Invariants
/// - The gift's price is exactly zero (so its membership can never move
///   the subtotal across the threshold)
/// - The threshold is positive
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GiftPromotion {
    gift: Product,
    threshold_cents: i64,
}

impl GiftPromotion {
    /// Creates a promotion, validating the gift and threshold.
    ///
    /// ## Errors
    /// - Gift price is non-zero
    /// - Gift name is empty
    /// - Threshold is zero or negative
    pub fn new(gift: Product, threshold: Money) -> CoreResult<Self> {
        validate_product_name(&gift.name)?;
        validate_gift_price_cents(gift.price_cents)?;
        validate_threshold_cents(threshold.cents())?;

        Ok(GiftPromotion {
            gift,
            threshold_cents: threshold.cents(),
        })
    }

    /// The demo storefront promotion: free Wireless Mouse (id 99) once
    /// the subtotal reaches $1000.00.
    pub fn demo() -> Self {
        let (id, name) = DEMO_GIFT;
        let gift = Product::new(ProductId::new(id), name, 0);

        GiftPromotion::new(gift, Money::from_cents(DEMO_THRESHOLD_CENTS))
            .expect("demo promotion is valid")
    }

    /// The gift product (price 0).
    pub fn gift(&self) -> &Product {
        &self.gift
    }

    /// The gift's product id.
    #[inline]
    pub fn gift_id(&self) -> ProductId {
        self.gift.id
    }

    /// The unlock threshold.
    #[inline]
    pub fn threshold(&self) -> Money {
        Money::from_cents(self.threshold_cents)
    }

    /// Whether a subtotal earns the gift.
    ///
    /// Inclusive comparison: a cart sitting exactly on the threshold
    /// gets the gift.
    #[inline]
    pub fn is_unlocked(&self, subtotal: Money) -> bool {
        subtotal >= self.threshold()
    }

    /// How much more spend unlocks the gift, clamped at zero once earned.
    ///
    /// Drives the storefront banner:
    /// "Add $353.00 more to get a FREE Wireless Mouse!"
    pub fn remaining(&self, subtotal: Money) -> Money {
        let diff = self.threshold() - subtotal;
        if diff.is_negative() {
            Money::zero()
        } else {
            diff
        }
    }

    /// Progress toward the threshold as a whole percentage, clamped to
    /// 0-100 for the banner's progress bar.
    pub fn progress_percent(&self, subtotal: Money) -> u8 {
        // i128 keeps the *100 step overflow-free for any i64 subtotal
        let pct = subtotal.cents() as i128 * 100 / self.threshold_cents as i128;
        pct.clamp(0, 100) as u8
    }

    /// Bundles the derivations into the view handed to the presentation
    /// layer.
    pub fn status(&self, subtotal: Money) -> GiftStatus {
        GiftStatus {
            unlocked: self.is_unlocked(subtotal),
            gift_name: self.gift.name.clone(),
            threshold_cents: self.threshold_cents,
            remaining_cents: self.remaining(subtotal).cents(),
            progress_percent: self.progress_percent(subtotal),
        }
    }
}

// =============================================================================
// Gift Status View
// =============================================================================

/// Gift promotion state for the presentation layer.
///
/// Everything the summary panel needs: the locked-state banner with its
/// progress bar, or the unlocked congratulations line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GiftStatus {
    /// Whether the cart has earned the gift.
    pub unlocked: bool,

    /// Gift display name ("You got a free Wireless Mouse!").
    pub gift_name: String,

    /// Configured unlock threshold.
    pub threshold_cents: i64,

    /// Spend still needed to unlock; 0 once unlocked.
    pub remaining_cents: i64,

    /// Progress toward the threshold, 0-100.
    pub progress_percent: u8,
}

// =============================================================================
// Unit Tests
// =============================================================================
