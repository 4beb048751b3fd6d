//! # Catalog Commands
//!
//! Read-only menu queries.

use bakehouse_core::Product;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Returns the whole menu in display order.
pub fn list_menu(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_menu command");
    catalog.catalog().products().to_vec()
}

/// Searches the menu by name or description.
///
/// ## Behavior
/// - Case-insensitive substring match
/// - Empty query returns the full menu
/// - Queries over 100 characters fail with `VALIDATION_ERROR`
pub fn search_menu(catalog: &CatalogState, query: &str) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_menu command");

    let results = catalog.catalog().search(query)?;
    Ok(results.into_iter().cloned().collect())
}
