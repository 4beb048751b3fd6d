//! # Catalog Error Types
//!
//! Error types for loading and querying the menu catalog.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error ─────────► CatalogError::Io        (menu.json missing)  │
//! │  serde_json::Error ──────► CatalogError::Parse     (malformed JSON)     │
//! │  ValidationError ────────► CatalogError::Invalid   (bad record)         │
//! │                            CatalogError::DuplicateName                  │
//! │                            CatalogError::NotFound  (lookup by name)     │
//! │  ValidationError ────────► CatalogError::Query     (bad search text)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use bakehouse_core::ValidationError;
use thiserror::Error;

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The menu file could not be read.
    #[error("Failed to read menu file {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file is not a JSON array of products.
    #[error("Malformed menu: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product record failed validation.
    ///
    /// `index` is the record's 0-based position in the source list.
    #[error("Invalid product at position {index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Two products share a name.
    #[error("Duplicate product name: '{0}'")]
    DuplicateName(String),

    /// No product with this name is on the menu.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A search query was rejected.
    #[error("Invalid search: {0}")]
    Query(#[source] ValidationError),
}

impl CatalogError {
    /// Creates an Io error for a given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
