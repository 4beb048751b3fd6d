//! # Checkout Command
//!
//! Places the order. Nothing is charged or submitted: the summary is shown
//! on the confirmation screen and the cart starts over.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout()                                                             │
//! │     │                                                                   │
//! │     ├── cart empty ──► Err(EMPTY_CART "Your cart is empty!")            │
//! │     │                  (cart untouched)                                 │
//! │     │                                                                   │
//! │     └── cart has items ──► OrderSummary { orderId, totals, items }      │
//! │                            cart reset to empty, listeners notified      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bakehouse_core::OrderSummary;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::CartState;

/// Finalizes the cart into an order summary.
pub fn checkout(cart: &CartState) -> Result<OrderSummary, ApiError> {
    debug!("checkout command");

    cart.with_cart_mut(|engine| engine.checkout()).map_err(|e| {
        warn!(error = %e, "Checkout rejected");
        ApiError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::error::ErrorCode;
    use crate::state::CatalogState;
    use bakehouse_catalog::Catalog;

    #[test]
    fn test_checkout_empty_cart() {
        let cart = CartState::new();

        let err = checkout(&cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Your cart is empty!");
    }

    #[test]
    fn test_checkout_resets_cart() {
        let catalog = CatalogState::new(Catalog::default_menu().unwrap());
        let cart = CartState::new();
        add_to_cart(&catalog, &cart, "Rustic Heart-Shaped Sourdough").unwrap();

        let summary = checkout(&cart).unwrap();

        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_price.cents(), 950);
        assert_eq!(summary.items.len(), 1);
        assert!(!summary.order_id.is_empty());
        assert!(get_cart(&cart).items.is_empty());

        // A second checkout has nothing to place
        assert_eq!(checkout(&cart).unwrap_err().code, ErrorCode::EmptyCart);
    }
}
