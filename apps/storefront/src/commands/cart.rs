//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │                        │
//! │  │  Cart    │     │          │     │  Placed  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart        checkout                          │
//! │       │           update_cart_item   (checkout.rs)                     │
//! │       │           remove_from_cart       │                              │
//! │       │                │                 │                              │
//! │       │                ▼                 │                              │
//! │       └─────────── clear_cart ◄──────────┘ (cart reset to empty)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bakehouse_core::{CartEngine, CartItem, CartTotals, Money};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub name: String,
    pub quantity: i64,
    #[serde(rename = "unitPriceCents")]
    pub unit_price: Money,
    #[serde(rename = "lineTotalCents")]
    pub line_total: Money,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        CartLine {
            name: item.name().to_string(),
            quantity: item.quantity(),
            unit_price: item.unit_price(),
            line_total: item.line_total(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn from_items(items: &[CartItem]) -> Self {
        CartResponse {
            items: items.iter().map(CartLine::from).collect(),
            totals: CartTotals::from_items(items),
        }
    }
}

impl From<&CartEngine> for CartResponse {
    fn from(engine: &CartEngine) -> Self {
        CartResponse {
            items: engine.snapshot().iter().map(CartLine::from).collect(),
            totals: engine.compute_totals(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Sidebar                                                           │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  YOUR CART                                         3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Classic Tiramisu Square Cake   x2              $17.50         │    │
/// │  │  Pistachio Almond Croissant     x1               $6.50         │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  TOTAL                                          $24.00         │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|engine| CartResponse::from(engine))
}

/// Adds one unit of a menu product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity goes up by one, position unchanged
/// - Not in cart: appended with quantity 1
///
/// ## Errors
/// `NOT_FOUND` if the name is not on the menu.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    name: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product = %name, "add_to_cart command");

    let product = catalog.catalog().require(name)?;
    Ok(cart.with_cart_mut(|engine| CartResponse::from_items(engine.add_item(product))))
}

/// Changes an item's quantity by `delta`.
///
/// ## Behavior
/// - Result clamps at zero, and zero removes the item
/// - Products not in the cart are left alone
pub fn update_cart_item(cart: &CartState, name: &str, delta: i64) -> CartResponse {
    debug!(product = %name, delta, "update_cart_item command");
    cart.with_cart_mut(|engine| CartResponse::from_items(engine.update_quantity(name, delta)))
}

/// Removes an item from the cart. Unknown names are a no-op.
pub fn remove_from_cart(cart: &CartState, name: &str) -> CartResponse {
    debug!(product = %name, "remove_from_cart command");
    cart.with_cart_mut(|engine| CartResponse::from_items(engine.remove_item(name)))
}

/// Removes an item only if it is in the cart.
///
/// The presence check and the removal happen under one lock. Returns `None`
/// when the product was not in the cart.
pub fn remove_if_in_cart(cart: &CartState, name: &str) -> Option<CartResponse> {
    debug!(product = %name, "remove_if_in_cart command");
    cart.with_cart_mut(|engine| {
        engine.get(name)?;
        Some(CartResponse::from_items(engine.remove_item(name)))
    })
}

/// Adjusts an item's quantity only if it is in the cart.
///
/// Same single-lock contract as [`remove_if_in_cart`].
pub fn update_if_in_cart(cart: &CartState, name: &str, delta: i64) -> Option<CartResponse> {
    debug!(product = %name, delta, "update_if_in_cart command");
    cart.with_cart_mut(|engine| {
        engine.get(name)?;
        Some(CartResponse::from_items(engine.update_quantity(name, delta)))
    })
}

/// Clears all items from the cart without placing an order.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_cart_mut(|engine| CartResponse::from_items(engine.clear()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bakehouse_catalog::Catalog;

    const TIRAMISU: &str = "Classic Tiramisu Square Cake";
    const CROISSANT: &str = "Pistachio Almond Croissant";

    fn setup() -> (CatalogState, CartState) {
        (
            CatalogState::new(Catalog::default_menu().unwrap()),
            CartState::new(),
        )
    }

    #[test]
    fn test_add_to_cart() {
        let (catalog, cart) = setup();

        add_to_cart(&catalog, &cart, TIRAMISU).unwrap();
        add_to_cart(&catalog, &cart, CROISSANT).unwrap();
        let response = add_to_cart(&catalog, &cart, TIRAMISU).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].name, TIRAMISU);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.items[0].line_total.cents(), 1750);
        assert_eq!(response.totals.total_items, 3);
        assert_eq!(response.totals.total_price.cents(), 2400);
        assert_eq!(get_cart(&cart), response);
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, cart) = setup();

        let err = add_to_cart(&catalog, &cart, "Scone").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_update_cart_item_clamps() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, TIRAMISU).unwrap();

        let response = update_cart_item(&cart, TIRAMISU, 4);
        assert_eq!(response.items[0].quantity, 5);

        let response = update_cart_item(&cart, TIRAMISU, -10);
        assert!(response.items.is_empty());
        assert_eq!(response.totals, CartTotals::default());
    }

    #[test]
    fn test_update_absent_item_is_noop() {
        let (_, cart) = setup();
        let response = update_cart_item(&cart, TIRAMISU, 3);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, TIRAMISU).unwrap();
        add_to_cart(&catalog, &cart, CROISSANT).unwrap();

        let response = remove_from_cart(&cart, TIRAMISU);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, CROISSANT);

        // Unknown names are ignored
        assert_eq!(remove_from_cart(&cart, "Scone"), response);

        assert!(clear_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_cart_response_json_shape() {
        let (catalog, cart) = setup();
        let response = add_to_cart(&catalog, &cart, CROISSANT).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["name"], CROISSANT);
        assert_eq!(json["items"][0]["unitPriceCents"], 650);
        assert_eq!(json["items"][0]["lineTotalCents"], 650);
        assert_eq!(json["totals"]["totalItems"], 1);
        assert_eq!(json["totals"]["totalPriceCents"], 650);
    }

    #[test]
    fn test_remove_if_in_cart() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, TIRAMISU).unwrap();

        assert_eq!(remove_if_in_cart(&cart, CROISSANT), None);
        let response = remove_if_in_cart(&cart, TIRAMISU).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(remove_if_in_cart(&cart, TIRAMISU), None);
    }

    #[test]
    fn test_update_if_in_cart() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, TIRAMISU).unwrap();

        assert_eq!(update_if_in_cart(&cart, CROISSANT, 2), None);
        assert_eq!(get_cart(&cart).items.len(), 1);

        let response = update_if_in_cart(&cart, TIRAMISU, 2).unwrap();
        assert_eq!(response.items[0].quantity, 3);

        let response = update_if_in_cart(&cart, TIRAMISU, -3).unwrap();
        assert!(response.items.is_empty());
    }
}
