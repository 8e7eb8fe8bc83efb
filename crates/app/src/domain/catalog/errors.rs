//! Catalog service errors.

use posy::catalog::CatalogError;
use thiserror::Error;

/// Catalog service error variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogServiceError {
    /// No flower or bouquet has the id.
    #[error("product {0:?} not found")]
    ProductNotFound(String),

    /// No flower has the id.
    #[error("flower {0:?} not found")]
    FlowerNotFound(String),

    /// The category filter names no category.
    #[error("unknown category {0:?}")]
    InvalidCategory(String),
}

impl From<CatalogError> for CatalogServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound(id) => Self::ProductNotFound(id),
            CatalogError::UnknownCategory(category) => Self::InvalidCategory(category),
        }
    }
}
