//! Session errors.

use thiserror::Error;

use crate::domain::{pickup::PickupStoreError, sessions::models::SessionUuid};

/// The session id names no live session.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("session {0} not found")]
pub struct SessionNotFound(pub SessionUuid);

/// Sessions service error variants.
#[derive(Debug, Error)]
pub enum SessionsServiceError {
    /// Session was not found.
    #[error(transparent)]
    NotFound(#[from] SessionNotFound),

    /// Pickup details could not be discarded.
    #[error(transparent)]
    Pickup(#[from] PickupStoreError),
}
