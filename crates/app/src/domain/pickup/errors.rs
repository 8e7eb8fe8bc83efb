//! Pickup store errors.

use thiserror::Error;

/// Pickup store error variants.
#[derive(Debug, Error)]
pub enum PickupStoreError {
    /// Details could not be serialised.
    #[error("failed to encode pickup details")]
    Encode(#[source] serde_json::Error),

    /// The stored blob is not valid pickup details.
    #[error("stored pickup details are unreadable")]
    Decode(#[source] serde_json::Error),
}
