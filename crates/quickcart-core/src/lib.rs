//! # quickcart-core: Pure Cart Logic for QuickCart
//!
//! This crate is the **heart** of QuickCart. It contains the whole cart
//! state machine as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       QuickCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (storefront UI)                   │   │
//! │  │    Product Grid ──► Quantity Steppers ──► Cart Summary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store calls                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                       CartStore API                             │   │
//! │  │    increment, decrement, set_quantity, clear, view             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ quickcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │ promotion │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ GiftPromo │  │   │
//! │  │   │  lookups  │  │  (cents)  │  │ LineItem  │  │ threshold │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductId, Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product catalog and id lookups
//! - [`cart`] - Line items and the cart container
//! - [`promotion`] - Free-gift threshold rules and progress math
//! - [`store`] - [`store::CartStore`], the stateful component the UI drives
//! - [`error`] - Domain error types
//! - [`validation`] - Configuration validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Mutations**: Cart operations clamp or ignore bad input, never panic
//! 5. **Derived State**: Subtotal and gift membership are recomputed from the
//!    line items on demand, never cached
//!
//! ## Example Usage
//!
//! ```rust
//! use quickcart_core::{CartStore, Money, ProductId};
//!
//! let mut store = CartStore::demo();
//! let laptop = store.catalog().get(ProductId::new(1)).cloned().unwrap();
//!
//! store.increment(&laptop);
//! store.increment(&laptop);
//!
//! // 2 × $500.00 reaches the $1000.00 threshold, so the free
//! // Wireless Mouse is added automatically.
//! assert_eq!(store.subtotal(), Money::from_cents(100_000));
//! assert!(store.has_gift());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod promotion;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quickcart_core::CartStore` instead of
// `use quickcart_core::store::CartStore`

pub use cart::{Cart, CartTotals, LineItem};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use promotion::{GiftPromotion, GiftStatus};
pub use store::{CartStore, CartView, LineView};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
/// and keeps price × quantity comfortably inside `i64`. Mutations clamp
/// to this cap rather than erroring, so cart operations stay total.
pub const MAX_ITEM_QUANTITY: i64 = 999;
