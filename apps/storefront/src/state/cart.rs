//! # Cart State
//!
//! Holds the session's cart engine.
//!
//! ## Thread Safety
//! The engine is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read or modify the cart
//! 2. Each intent must run its read-modify-write as one unit
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Engine Call           │
//! │  ───────────              ───────                 ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► add_item(product)    │
//! │                                                                         │
//! │  + / - buttons ──────────► update_cart_item() ──► update_quantity(±n)  │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ──► remove_item(name)    │
//! │                                                                         │
//! │  Checkout ───────────────► checkout() ──────────► checkout()           │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► snapshot() (read)    │
//! │                                                                         │
//! │  NOTE: Listeners run while the lock is held, right after the change.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bakehouse_core::{CartChange, CartEngine, SubscriptionId};

/// Shared cart state.
///
/// Cloning shares the same engine; every clone sees the same cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    engine: Arc<Mutex<CartEngine>>,
}

impl CartState {
    /// Creates state around an empty cart (session start).
    pub fn new() -> Self {
        CartState {
            engine: Arc::new(Mutex::new(CartEngine::new())),
        }
    }

    /// Executes a function with read access to the engine.
    ///
    /// ## Usage
    /// ```rust
    /// use bakehouse_storefront::state::CartState;
    ///
    /// let cart = CartState::new();
    /// let totals = cart.with_cart(|engine| engine.compute_totals());
    /// assert_eq!(totals.total_items, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartEngine) -> R,
    {
        let engine = self.lock();
        f(&engine)
    }

    /// Executes a function with write access to the engine.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartEngine) -> R,
    {
        let mut engine = self.lock();
        f(&mut engine)
    }

    /// Registers a change listener on the engine.
    ///
    /// The listener runs with the cart lock held, so it must not call
    /// back into this state.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartChange) + Send + 'static,
    {
        self.with_cart_mut(|engine| engine.subscribe(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.with_cart_mut(|engine| engine.unsubscribe(id))
    }

    // A listener that panicked poisons the lock; the engine itself is still
    // consistent because invariants are checked before listeners run.
    fn lock(&self) -> MutexGuard<'_, CartEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_core::{ChangeKind, Money, Product};

    fn roll() -> Product {
        Product::new("Roll", Money::from_cents(575), "roll.jpg", "Warm").unwrap()
    }

    #[test]
    fn test_clones_share_engine() {
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|engine| {
            engine.add_item(&roll());
        });

        assert_eq!(other.with_cart(|engine| engine.quantity_of("Roll")), 1);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let state = CartState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let id = state.subscribe(move |change| sink.lock().unwrap().push(change.kind.clone()));
        state.with_cart_mut(|engine| {
            engine.add_item(&roll());
        });
        assert!(state.unsubscribe(id));
        state.with_cart_mut(|engine| {
            engine.add_item(&roll());
        });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ChangeKind::ItemAdded {
                name: "Roll".to_string(),
                quantity: 1
            }]
        );
        assert!(!state.unsubscribe(id));
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let state = CartState::new();
        state.subscribe(|_| panic!("listener failure"));

        let shared = state.clone();
        let result = std::thread::spawn(move || {
            shared.with_cart_mut(|engine| {
                engine.add_item(&roll());
            });
        })
        .join();
        assert!(result.is_err());

        // The add completed before the listener panicked
        assert_eq!(state.with_cart(|engine| engine.len()), 1);
    }
}
