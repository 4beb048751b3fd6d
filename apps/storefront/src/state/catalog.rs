//! # Catalog State
//!
//! The menu the storefront sells from. Loaded once at startup, read-only
//! afterwards, so it is shared through an `Arc` without a lock.
//!
//! ## Menu Source (Priority Order)
//! 1. `BAKEHOUSE_CATALOG_PATH`
//! 2. `menu.json` in the platform config directory, if present
//! 3. The built-in house menu

use std::path::PathBuf;
use std::sync::Arc;

use bakehouse_catalog::{Catalog, CatalogError, CatalogResult};
use bakehouse_core::Product;
use tracing::{debug, info};

use super::ConfigState;

/// Shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the menu according to the configuration.
    ///
    /// A configured path that cannot be loaded is an error; it is never
    /// silently replaced with the built-in menu.
    pub fn load(config: &ConfigState) -> CatalogResult<Self> {
        Self::load_with_fallback(config, ConfigState::default_catalog_path())
    }

    fn load_with_fallback(
        config: &ConfigState,
        fallback: Option<PathBuf>,
    ) -> CatalogResult<Self> {
        if let Some(path) = &config.catalog_path {
            info!(path = %path.display(), "Using configured menu file");
            return Catalog::from_path(path).map(Self::new);
        }

        match fallback.filter(|p| p.is_file()) {
            Some(path) => {
                info!(path = %path.display(), "Using menu file from config directory");
                Catalog::from_path(path).map(Self::new)
            }
            None => Catalog::default_menu().map(Self::new),
        }
    }

    /// Resolves a user reference to a product.
    ///
    /// A reference is either an exact product name or a 1-based menu
    /// position, optionally prefixed with `#` (`3` or `#3`).
    pub fn resolve(&self, reference: &str) -> CatalogResult<&Product> {
        let reference = reference.trim();
        let position = reference
            .strip_prefix('#')
            .unwrap_or(reference)
            .parse::<usize>()
            .ok();

        let product = match position {
            Some(n) if n >= 1 => self.catalog.nth(n - 1),
            Some(_) => None,
            None => self.catalog.get(reference),
        };

        debug!(reference, found = product.is_some(), "Resolved product reference");
        product.ok_or_else(|| CatalogError::NotFound(reference.to_string()))
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
