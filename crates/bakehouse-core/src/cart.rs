//! # Cart
//!
//! The ordered, name-unique collection of cart items and the rules for
//! changing it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Intent                   Method                  State Change          │
//! │  ──────                   ──────                  ────────────          │
//! │                                                                         │
//! │  "Add to order" ─────────► add_item() ──────────► qty += 1, or push    │
//! │                                                                         │
//! │  ⊕ / ⊖ buttons ──────────► update_quantity() ───► qty = max(0, q + δ)  │
//! │                                                   (0 ⇒ item removed)    │
//! │                                                                         │
//! │  🗑 button ───────────────► remove_item() ──────► items.remove(i)      │
//! │                                                                         │
//! │  Checkout ───────────────► take_items() ────────► items emptied        │
//! │                                                                         │
//! │  Badge / sidebar ────────► items(), totals() ───► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating method reports what happened as a [`ChangeKind`], or
//! `None` when the call left the cart untouched (unknown name, zero delta,
//! quantity already at its ceiling).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CartItem, CartTotals, Product};

/// What a successful mutation did to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum ChangeKind {
    /// A product was added; `quantity` is its quantity afterwards.
    ItemAdded { name: String, quantity: i64 },

    /// A quantity adjustment left the item in the cart.
    QuantityChanged { name: String, quantity: i64 },

    /// An item left the cart, by removal or by adjusting to zero.
    ItemRemoved { name: String },

    /// The cart was emptied without placing an order.
    Cleared,

    /// The cart was finalized into an order and emptied.
    CheckedOut {
        #[serde(rename = "orderId")]
        order_id: String,
    },
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product name (adding the same product increments)
/// - Every quantity is ≥ 1 (adjusting to zero removes the item)
/// - Items keep the position at which they were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1, position unchanged
    /// - Not in cart: appended with quantity 1
    /// - Already at the largest representable quantity: no-op
    pub fn add_item(&mut self, product: &Product) -> Option<ChangeKind> {
        let quantity = match self.position(product.name()) {
            Some(idx) => {
                let item = &mut self.items[idx];
                let quantity = item.quantity().checked_add(1)?;
                item.set_quantity(quantity);
                quantity
            }
            None => {
                self.items.push(CartItem::new(product.clone()));
                1
            }
        };

        Some(ChangeKind::ItemAdded {
            name: product.name().to_string(),
            quantity,
        })
    }

    /// Removes an item by product name. Unknown names are a no-op.
    pub fn remove_item(&mut self, name: &str) -> Option<ChangeKind> {
        let idx = self.position(name)?;
        let removed = self.items.remove(idx);

        Some(ChangeKind::ItemRemoved {
            name: removed.name().to_string(),
        })
    }

    /// Adjusts an item's quantity by a signed delta.
    ///
    /// ## Behavior
    /// - New quantity is `max(0, current + delta)`; over-decrement clamps
    /// - New quantity 0: the item is removed
    /// - Product not in cart, or delta 0: no-op
    pub fn update_quantity(&mut self, name: &str, delta: i64) -> Option<ChangeKind> {
        let idx = self.position(name)?;
        let current = self.items[idx].quantity();
        let quantity = current.saturating_add(delta).max(0);

        if quantity == current {
            return None;
        }

        if quantity == 0 {
            return self.remove_item(name);
        }

        self.items[idx].set_quantity(quantity);
        Some(ChangeKind::QuantityChanged {
            name: name.to_string(),
            quantity,
        })
    }

    /// Removes every item, returning them in display order.
    pub fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }

    /// Read-only view of the items in display order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up an item by product name.
    pub fn get(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// Quantity held for a product name (0 when absent).
    pub fn quantity_of(&self, name: &str) -> i64 {
        self.get(name).map_or(0, CartItem::quantity)
    }

    /// Number of distinct products in the cart.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes `{total_items, total_price}` from the current items.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_items(&self.items)
    }

    /// Panics if a structural invariant is broken.
    ///
    /// A failure here is a bug in this module, never bad user input.
    pub fn assert_invariants(&self) {
        let mut seen = HashSet::with_capacity(self.items.len());

        for item in &self.items {
            assert!(
                item.quantity() >= 1,
                "cart item '{}' has quantity {}",
                item.name(),
                item.quantity()
            );
            assert!(
                seen.insert(item.name()),
                "cart holds '{}' more than once",
                item.name()
            );
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name() == name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
