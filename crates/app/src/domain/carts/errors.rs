//! Carts service errors.

use posy::{cart::CartError, checkout::CheckoutError};
use thiserror::Error;

use crate::domain::{catalog::CatalogServiceError, sessions::SessionNotFound};

/// Carts service error variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    /// Session was not found.
    #[error(transparent)]
    SessionNotFound(#[from] SessionNotFound),

    /// The product id is not in the catalog.
    #[error("product {0:?} not found")]
    UnknownProduct(String),

    /// The cart rejected the change.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The checkout does not allow cart changes right now.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl From<CatalogServiceError> for CartsServiceError {
    fn from(error: CatalogServiceError) -> Self {
        match error {
            CatalogServiceError::ProductNotFound(id)
            | CatalogServiceError::FlowerNotFound(id)
            | CatalogServiceError::InvalidCategory(id) => Self::UnknownProduct(id),
        }
    }
}
