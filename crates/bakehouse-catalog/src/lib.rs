//! # bakehouse-catalog: The Menu
//!
//! This crate provides the read-only product catalog the storefront sells
//! from. The catalog is loaded once at startup and never changes during a
//! session; the cart engine only ever reads products out of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   menu.json ──► Catalog::from_path ──┐                                 │
//! │                                      ├──► Catalog ──get(name)──► Product│
//! │   house menu ─► Catalog::default_menu┘       │                  │       │
//! │                                              │                  ▼       │
//! │                                         search(q)        CartEngine     │
//! │                                                          .add_item()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Catalog error types
//! - [`menu`] - The built-in house menu
//!
//! ## Usage
//!
//! ```rust
//! use bakehouse_catalog::Catalog;
//!
//! let catalog = Catalog::default_menu().unwrap();
//! let croissant = catalog.get("Pistachio Almond Croissant").unwrap();
//! assert_eq!(croissant.price().cents(), 650);
//!
//! let cheesecakes = catalog.search("cheesecake").unwrap();
//! assert_eq!(cheesecakes.len(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};

use std::collections::HashMap;
use std::path::Path;

use bakehouse_core::validation::{validate_product, validate_search_query};
use bakehouse_core::Product;
use tracing::{debug, info};

/// An ordered, name-unique, read-only list of products.
///
/// ## Invariants
/// - Every product passed validation
/// - No two products share a (trimmed) name
/// - Order is the order the products were supplied in
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every record.
    ///
    /// Names are trimmed before validation and uniqueness checks.
    ///
    /// ## Errors
    /// - [`CatalogError::Invalid`] for the first record failing validation
    /// - [`CatalogError::DuplicateName`] for the first repeated name
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        let mut normalized = Vec::with_capacity(products.len());

        for (position, product) in products.into_iter().enumerate() {
            let product = product.normalized();

            validate_product(&product).map_err(|source| CatalogError::Invalid {
                index: position,
                source,
            })?;

            if index.insert(product.name().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateName(product.name().to_string()));
            }

            normalized.push(product);
        }

        Ok(Catalog {
            products: normalized,
            index,
        })
    }

    /// The built-in house menu.
    pub fn default_menu() -> CatalogResult<Self> {
        let catalog = Catalog::new(menu::house_menu())?;
        info!(products = catalog.len(), "Loaded built-in menu");
        Ok(catalog)
    }

    /// Parses a JSON array of products.
    ///
    /// ```rust
    /// use bakehouse_catalog::Catalog;
    ///
    /// let json = r#"[
    ///   {"name": "Roll", "priceCents": 575, "imageUrl": "roll.jpg", "description": "Warm"}
    /// ]"#;
    /// let catalog = Catalog::from_json_str(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// Reads and parses a menu file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading menu file");

        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Catalog::from_json_str(&json)?;

        info!(path = %path.display(), products = catalog.len(), "Loaded menu file");
        Ok(catalog)
    }

    /// Serializes the catalog back into the menu file format.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    /// Looks up a product by exact name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&i| &self.products[i])
    }

    /// Like [`get`](Self::get), failing with [`CatalogError::NotFound`].
    pub fn require(&self, name: &str) -> CatalogResult<&Product> {
        self.get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Returns the product at a 0-based menu position.
    pub fn nth(&self, position: usize) -> Option<&Product> {
        self.products.get(position)
    }

    /// All products in menu order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive substring search over names and descriptions.
    ///
    /// ## Behavior
    /// - Empty query: the whole menu
    /// - Results keep menu order
    /// - Queries over 100 characters fail with [`CatalogError::Query`]
    pub fn search(&self, query: &str) -> CatalogResult<Vec<&Product>> {
        let query = validate_search_query(query).map_err(CatalogError::Query)?;
        let needle = query.to_lowercase();

        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name().to_lowercase().contains(&needle)
                    || p.description().to_lowercase().contains(&needle)
            })
            .collect();

        debug!(query = %query, count = results.len(), "Menu search");
        Ok(results)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
