//! # Validation Module
//!
//! Input validation for product records and catalog queries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load (bakehouse-catalog)                             │
//! │  ├── JSON shape (deserialization)                                      │
//! │  └── THIS MODULE: per-product rules + name uniqueness                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart Engine (bakehouse-core)                                 │
//! │  └── Structural invariants asserted after every mutation               │
//! │                                                                         │
//! │  Products reaching the cart were validated once, at catalog load.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bakehouse_core::validation::{validate_product_name, validate_search_query};
//!
//! validate_product_name("Classic Tiramisu Square Cake").unwrap();
//! assert_eq!(validate_search_query("  cheesecake ").unwrap(), "cheesecake");
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted.
pub const MAX_NAME_LEN: usize = 200;

/// Longest search query accepted.
pub const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ```rust
/// use bakehouse_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Chocolate Fudge Brownie Stack").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an image reference. Only presence is checked; the value is
/// opaque to the storefront.
pub fn validate_image_ref(image_url: &str) -> ValidationResult<()> {
    if image_url.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "imageUrl".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches the whole menu)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free samples)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(product.name())?;
    validate_price(product.price())?;
    validate_image_ref(product.image_url())?;
    Ok(())
}

/// Validates that no two products share a name.
///
/// ## Example
/// ```rust
/// use bakehouse_core::{Money, Product};
/// use bakehouse_core::validation::validate_unique_names;
///
/// let a = Product::new("Roll", Money::from_cents(575), "a.jpg", "").unwrap();
/// let b = Product::new(" Roll", Money::from_cents(600), "b.jpg", "").unwrap();
/// assert!(validate_unique_names(&[a, b]).is_err());
/// ```
pub fn validate_unique_names(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if !seen.insert(product.name()) {
            return Err(ValidationError::Duplicate {
                field: "name".to_string(),
                value: product.name().to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
