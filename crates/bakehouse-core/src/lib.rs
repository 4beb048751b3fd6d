//! # bakehouse-core: Pure Business Logic for the Bakehouse Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! engine and the domain types it works with, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bakehouse Storefront Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation                                 │   │
//! │  │    Menu page ──► Cart badge ──► Cart sidebar ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents / change notifications         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront commands                          │   │
//! │  │    add_to_cart, update_cart_item, checkout, etc.                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bakehouse-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  engine   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │CartEngine │  │   │
//! │  │   │ CartItem  │  │  (cents)  │  │ChangeKind │  │ listeners │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • NO GLOBAL STATE             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, CartTotals, OrderSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart collection and its mutation rules
//! - [`engine`] - Session-scoped cart owner with change notifications
//! - [`error`] - Domain error types
//! - [`validation`] - Product record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bakehouse_core::{CartEngine, CoreError, Money, Product};
//!
//! let tiramisu = Product::new(
//!     "Classic Tiramisu Square Cake",
//!     Money::from_cents(875),
//!     "https://img.example/tiramisu.jpg",
//!     "Espresso-soaked ladyfingers and mascarpone",
//! )
//! .unwrap();
//!
//! let mut engine = CartEngine::new();
//! engine.add_item(&tiramisu);
//! engine.add_item(&tiramisu);
//! engine.update_quantity("Classic Tiramisu Square Cake", -5); // clamps, removes
//!
//! assert!(engine.snapshot().is_empty());
//! assert_eq!(engine.checkout(), Err(CoreError::EmptyCart));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod engine;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, ChangeKind};
pub use engine::{CartChange, CartEngine, Listener, SubscriptionId};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Property Tests
// =============================================================================

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// A presentation-layer intent.
    #[derive(Debug, Clone)]
    enum Intent {
        Add(usize),
        Remove(usize),
        Adjust(usize, i64),
        Clear,
        Checkout,
    }

    const MENU: &[(&str, i64)] = &[
        ("Sourdough", 950),
        ("Croissant", 650),
        ("Brownie", 850),
        ("Yule Log", 1400),
        ("Tasting Spoon", 0),
    ];

    fn menu() -> Vec<Product> {
        MENU.iter()
            .map(|(name, cents)| {
                Product::new(*name, Money::from_cents(*cents), "img.jpg", "").unwrap()
            })
            .collect()
    }

    fn intent() -> impl Strategy<Value = Intent> {
        let idx = 0..MENU.len();
        prop_oneof![
            4 => idx.clone().prop_map(Intent::Add),
            1 => idx.clone().prop_map(Intent::Remove),
            3 => (idx, -4i64..=4).prop_map(|(i, d)| Intent::Adjust(i, d)),
            1 => Just(Intent::Clear),
            1 => Just(Intent::Checkout),
        ]
    }

    /// Straightforward name → quantity model in first-insertion order.
    fn model_apply(model: &mut Vec<(String, i64)>, products: &[Product], intent: &Intent) {
        match intent {
            Intent::Add(i) => {
                let name = products[*i].name();
                match model.iter_mut().find(|(n, _)| n == name) {
                    Some((_, q)) => *q += 1,
                    None => model.push((name.to_string(), 1)),
                }
            }
            Intent::Remove(i) => model.retain(|(n, _)| n != products[*i].name()),
            Intent::Adjust(i, d) => {
                let name = products[*i].name();
                if let Some(pos) = model.iter().position(|(n, _)| n == name) {
                    let q = (model[pos].1 + d).max(0);
                    if q == 0 {
                        model.remove(pos);
                    } else {
                        model[pos].1 = q;
                    }
                }
            }
            Intent::Clear | Intent::Checkout => model.clear(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        /// Property: any intent sequence keeps names unique, quantities ≥ 1,
        /// order and totals matching a naive model.
        #[test]
        fn engine_matches_model(intents in prop::collection::vec(intent(), 0..60)) {
            let products = menu();
            let mut engine = CartEngine::new();
            let mut model: Vec<(String, i64)> = Vec::new();

            for intent in &intents {
                let was_empty = engine.is_empty();
                match intent {
                    Intent::Add(i) => { engine.add_item(&products[*i]); }
                    Intent::Remove(i) => { engine.remove_item(products[*i].name()); }
                    Intent::Adjust(i, d) => { engine.update_quantity(products[*i].name(), *d); }
                    Intent::Clear => { engine.clear(); }
                    Intent::Checkout => {
                        let result = engine.checkout();
                        prop_assert_eq!(result.is_err(), was_empty);
                    }
                }
                model_apply(&mut model, &products, intent);

                let snapshot: Vec<(String, i64)> = engine
                    .snapshot()
                    .iter()
                    .map(|i| (i.name().to_string(), i.quantity()))
                    .collect();
                prop_assert_eq!(&snapshot, &model);
                prop_assert!(engine.snapshot().iter().all(|i| i.quantity() >= 1));

                let expected_items: i64 = model.iter().map(|(_, q)| q).sum();
                let expected_price: Money = model
                    .iter()
                    .map(|(n, q)| {
                        let p = products.iter().find(|p| p.name() == n).unwrap();
                        p.price() * *q
                    })
                    .sum();
                let totals = engine.compute_totals();
                prop_assert_eq!(totals.total_items, expected_items);
                prop_assert_eq!(totals.total_price, expected_price);
            }
        }

        /// Property: checkout summary equals the totals right before it.
        #[test]
        fn checkout_captures_totals(adds in prop::collection::vec(0..MENU.len(), 1..30)) {
            let products = menu();
            let mut engine = CartEngine::new();
            for i in &adds {
                engine.add_item(&products[*i]);
            }

            let before = engine.compute_totals();
            let summary = engine.checkout().unwrap();

            prop_assert_eq!(summary.totals(), before);
            prop_assert_eq!(summary.total_items, adds.len() as i64);
            prop_assert!(engine.snapshot().is_empty());
        }
    }
}
