//! # Cart Engine
//!
//! The single owner and sole writer of the session's cart.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          CartEngine                                     │
//! │                                                                         │
//! │   presentation ──intent──► add_item / remove_item /                     │
//! │                            update_quantity / clear / checkout           │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                             ┌──────────────┐                            │
//! │                             │     Cart     │  assert_invariants()       │
//! │                             └──────┬───────┘                            │
//! │                                    │ changed?                           │
//! │                                    ▼                                    │
//! │                 listeners (subscription order, synchronous)             │
//! │                    └──► CartChange { kind, items, totals }              │
//! │                                                                         │
//! │   presentation ◄──read── snapshot() / compute_totals()                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notification Rules
//! - Listeners run after the mutation is applied and invariants hold
//! - Calls that leave the cart untouched notify nobody
//! - Checkout notifies with an empty snapshot
//!
//! The engine takes `&mut self` for every mutation, so one intent always
//! runs to completion before the next. Sharing it across threads is the
//! caller's job (wrap it in a mutex).

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, ChangeKind};
use crate::error::{CoreError, CoreResult};
use crate::types::{CartItem, CartTotals, OrderSummary, Product};

/// Notification delivered to listeners after each effective mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartChange {
    /// What happened.
    pub kind: ChangeKind,

    /// The cart after the change, in display order.
    pub items: Vec<CartItem>,

    /// Aggregates after the change.
    pub totals: CartTotals,
}

/// Handle returned by [`CartEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A registered change listener.
pub type Listener = Box<dyn FnMut(&CartChange) + Send>;

/// Owns the cart for one shopping session.
pub struct CartEngine {
    cart: Cart,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartEngine {
    /// Creates an engine holding an empty cart (session start).
    pub fn new() -> Self {
        CartEngine {
            cart: Cart::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product`; see [`Cart::add_item`].
    ///
    /// Always succeeds. Notifies unless the quantity is already at its
    /// ceiling and cannot grow.
    pub fn add_item(&mut self, product: &Product) -> &[CartItem] {
        let change = self.cart.add_item(product);
        debug!(product = %product.name(), added = change.is_some(), "Add to cart");
        self.commit(change);
        self.cart.items()
    }

    /// Removes a product from the cart. Unknown names are a no-op.
    pub fn remove_item(&mut self, product_name: &str) -> &[CartItem] {
        let change = self.cart.remove_item(product_name);
        debug!(product = %product_name, removed = change.is_some(), "Remove from cart");
        self.commit(change);
        self.cart.items()
    }

    /// Adjusts a quantity by `delta`, clamping at zero.
    ///
    /// Reaching zero removes the item. Products not in the cart are left
    /// alone: a name alone carries no product record to add.
    pub fn update_quantity(&mut self, product_name: &str, delta: i64) -> &[CartItem] {
        let change = self.cart.update_quantity(product_name, delta);
        debug!(
            product = %product_name,
            delta,
            quantity = self.cart.quantity_of(product_name),
            "Quantity updated"
        );
        self.commit(change);
        self.cart.items()
    }

    /// Empties the cart without placing an order.
    pub fn clear(&mut self) -> &[CartItem] {
        let change = if self.cart.is_empty() {
            None
        } else {
            self.cart.take_items();
            Some(ChangeKind::Cleared)
        };
        debug!(cleared = change.is_some(), "Cart cleared");
        self.commit(change);
        self.cart.items()
    }

    /// Finalizes the cart into an order summary and resets it to empty.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when there is nothing to check out. The cart
    /// is left as it was and listeners are not called.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: { Sourdough ×1 @ $9.50 }
    ///      │
    ///      ▼
    /// checkout() ← THIS FUNCTION
    ///      │
    ///      ├── summary { total_items: 1, total_price: $9.50 }
    ///      │
    ///      └── cart: (empty) ──► listeners see CheckedOut
    /// ```
    pub fn checkout(&mut self) -> CoreResult<OrderSummary> {
        if self.cart.is_empty() {
            debug!("Checkout rejected: cart is empty");
            return Err(CoreError::EmptyCart);
        }

        let totals = self.cart.totals();
        let items = self.cart.take_items();
        let summary = OrderSummary {
            order_id: Uuid::new_v4().to_string(),
            placed_at: Utc::now(),
            items,
            total_items: totals.total_items,
            total_price: totals.total_price,
        };

        info!(
            order_id = %summary.order_id,
            total_items = summary.total_items,
            total = %summary.total_price,
            "Order placed"
        );

        self.commit(Some(ChangeKind::CheckedOut {
            order_id: summary.order_id.clone(),
        }));
        Ok(summary)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Read-only view of the cart in display order.
    #[inline]
    pub fn snapshot(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Pure aggregate over the current cart.
    pub fn compute_totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn get(&self, product_name: &str) -> Option<&CartItem> {
        self.cart.get(product_name)
    }

    pub fn quantity_of(&self, product_name: &str) -> i64 {
        self.cart.quantity_of(product_name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers a listener called after every effective mutation.
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use bakehouse_core::{CartEngine, Money, Product};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let mut engine = CartEngine::new();
    /// engine.subscribe(move |change| sink.lock().unwrap().push(change.totals.total_items));
    ///
    /// let roll = Product::new("Roll", Money::from_cents(575), "roll.jpg", "").unwrap();
    /// engine.add_item(&roll);
    /// engine.add_item(&roll);
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    /// ```
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "Cart listener registered");
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn commit(&mut self, change: Option<ChangeKind>) {
        self.cart.assert_invariants();

        let Some(kind) = change else {
            return;
        };
        if self.listeners.is_empty() {
            return;
        }

        let event = CartChange {
            kind,
            items: self.cart.items().to_vec(),
            totals: self.cart.totals(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl Default for CartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartEngine")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
