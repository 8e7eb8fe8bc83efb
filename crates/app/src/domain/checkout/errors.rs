//! Checkout service errors.

use posy::checkout::CheckoutError;
use thiserror::Error;

use crate::domain::{payments::PaymentsError, pickup::PickupStoreError, sessions::SessionNotFound};

/// Message shown to shoppers when the cart cannot be priced for payment.
pub const CHECKOUT_UNAVAILABLE: &str = "We couldn't start checkout. Please try again.";

/// Message shown to shoppers when the payment provider fails.
pub const PAYMENT_UNAVAILABLE: &str = "Payment could not be started. Please try again.";

/// Checkout service error variants.
#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    /// Session was not found.
    #[error(transparent)]
    SessionNotFound(#[from] SessionNotFound),

    /// The checkout refused the transition.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The cart references a product the payment provider could not resolve.
    #[error("product {0:?} not found")]
    UnknownProduct(String),

    /// The payment provider failed to create a session.
    #[error("payment session could not be created")]
    PaymentSession(#[source] PaymentsError),

    /// Pickup details could not be stored or read.
    #[error(transparent)]
    Pickup(#[from] PickupStoreError),
}

impl From<PaymentsError> for CheckoutServiceError {
    fn from(error: PaymentsError) -> Self {
        match error {
            PaymentsError::UnknownProduct(id) => Self::UnknownProduct(id),
            other => Self::PaymentSession(other),
        }
    }
}
