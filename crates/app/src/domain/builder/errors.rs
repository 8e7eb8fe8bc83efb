//! Builder service errors.

use posy::{builder::BuilderError, checkout::CheckoutError};
use thiserror::Error;

use crate::domain::{catalog::CatalogServiceError, sessions::SessionNotFound};

/// Builder service error variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderServiceError {
    /// Session was not found.
    #[error(transparent)]
    SessionNotFound(#[from] SessionNotFound),

    /// The flower id is not in the catalog.
    #[error("flower {0:?} not found")]
    FlowerNotFound(String),

    /// The flower has not been selected.
    #[error("flower {0:?} is not in the bouquet")]
    SelectionNotFound(String),

    /// The builder rejected the change.
    #[error(transparent)]
    Builder(#[from] BuilderError),

    /// The checkout does not allow cart changes right now.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl From<CatalogServiceError> for BuilderServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::ProductNotFound(id)
            | CatalogServiceError::FlowerNotFound(id)
            | CatalogServiceError::InvalidCategory(id) => Self::FlowerNotFound(id),
        }
    }
}
