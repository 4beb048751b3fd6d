//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │  OrderSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (unique)  │◄──│  product        │   │  order_id       │       │
//! │  │  price          │   │  quantity ≥ 1   │──►│  items          │       │
//! │  │  image_url      │   └─────────────────┘   │  total_items    │       │
//! │  │  description    │                         │  total_price    │       │
//! │  └─────────────────┘   ┌─────────────────┐   └─────────────────┘       │
//! │                        │   CartTotals    │                              │
//! │                        │  total_items    │                              │
//! │                        │  total_price    │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product's `name` is its business identifier: the catalog never holds
//! two products with the same name, and the cart deduplicates by it.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_product;

// =============================================================================
// Product
// =============================================================================

/// A menu entry available for purchase.
///
/// Products are immutable once created: fields are private and only exposed
/// through getters. The catalog owns the canonical copies; the cart keeps
/// its own clone inside each [`CartItem`].
///
/// Deserializing runs the same validation as [`Product::new`], so a record
/// read from JSON cannot carry a blank name or a negative price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Display name, unique within the catalog.
    name: String,

    /// Unit price in cents.
    #[serde(rename = "priceCents")]
    price: Money,

    /// Opaque image reference (usually a URL).
    image_url: String,

    /// Short display text.
    description: String,
}

impl Product {
    /// Creates a validated product.
    ///
    /// The name is trimmed; leading/trailing whitespace never participates
    /// in identity.
    ///
    /// ```rust
    /// use bakehouse_core::{Money, Product};
    ///
    /// let roll = Product::new(
    ///     "  Gourmet Cinnamon cream Roll ",
    ///     Money::from_cents(575),
    ///     "https://example.com/roll.jpg",
    ///     "Warm cinnamon swirl",
    /// )
    /// .unwrap();
    /// assert_eq!(roll.name(), "Gourmet Cinnamon cream Roll");
    /// ```
    pub fn new(
        name: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> CoreResult<Self> {
        let product = Product::unchecked(name, price, image_url, description);
        validate_product(&product)?;
        Ok(product)
    }

    // Skips validation. Only for records that go through `Catalog::new`,
    // which validates the whole batch and reports the failing position.
    #[doc(hidden)]
    pub fn unchecked(
        name: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Product {
            name: name.into().trim().to_string(),
            price,
            image_url: image_url.into(),
            description: description.into(),
        }
    }

    /// Returns a copy with surrounding whitespace stripped from the name.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.name.trim();
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Wire shape of a product record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    name: String,
    #[serde(rename = "priceCents")]
    price: Money,
    image_url: String,
    description: String,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = ProductRecord::deserialize(deserializer)?;
        Product::new(record.name, record.price, record.image_url, record.description)
            .map_err(de::Error::custom)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product held in the cart together with its quantity.
///
/// ## Invariant
/// `quantity >= 1`. A quantity of zero is never stored; the owning
/// [`Cart`](crate::cart::Cart) removes the item instead. The constructor is
/// crate-private so only the cart can create or change items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    product: Product,
    quantity: i64,
}

impl CartItem {
    pub(crate) fn new(product: Product) -> Self {
        CartItem {
            product,
            quantity: 1,
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 1, "cart item quantity must stay positive");
        self.quantity = quantity;
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Shortcut for `self.product().name()`.
    #[inline]
    pub fn name(&self) -> &str {
        self.product.name()
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregates derived from the cart contents.
///
/// Never stored alongside the items: always recomputed from them, so the
/// two cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Sum of all quantities (the cart badge number).
    pub total_items: i64,

    /// Sum of price × quantity over all items.
    #[serde(rename = "totalPriceCents")]
    pub total_price: Money,
}

impl CartTotals {
    /// Computes totals over a sequence of items.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a CartItem>) -> Self {
        items
            .into_iter()
            .fold(CartTotals::default(), |acc, item| CartTotals {
                total_items: acc.total_items.saturating_add(item.quantity()),
                total_price: acc.total_price + item.line_total(),
            })
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The result of a successful checkout.
///
/// Captures what was in the cart at the moment it was finalized. Nothing is
/// submitted anywhere: the summary lives in memory for the confirmation
/// screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    /// Generated order identifier (UUID v4).
    pub order_id: String,

    /// When the order was placed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Purchased lines, in cart display order.
    pub items: Vec<CartItem>,

    pub total_items: i64,

    #[serde(rename = "totalPriceCents")]
    pub total_price: Money,
}

impl OrderSummary {
    /// Returns the totals captured at checkout.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_items: self.total_items,
            total_price: self.total_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
