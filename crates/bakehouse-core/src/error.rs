//! # Error Types
//!
//! Domain-specific error types for bakehouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bakehouse-core errors (this file)                                     │
//! │  ├── CoreError        - Cart engine failures                           │
//! │  └── ValidationError  - Product record validation failures             │
//! │                                                                         │
//! │  bakehouse-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Menu file loading failures                     │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError/CoreError → ApiError → UI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Operations Are Total
//! Adding, removing and adjusting quantities never fail: a missing product
//! name is a no-op. The only failure the engine reports is checking out an
//! empty cart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Checkout was requested while the cart holds nothing.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: (empty)
    ///      │
    ///      ▼
    /// checkout() ──► EmptyCart
    ///      │
    ///      ▼
    /// UI shows: "Your cart is empty!"  (cart left untouched)
    /// ```
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for product records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Duplicate value (two menu entries sharing a name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_message() {
        assert_eq!(CoreError::EmptyCart.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "name".to_string(),
            value: "Classic Tiramisu Square Cake".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "name 'Classic Tiramisu Square Cake' already exists"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
