//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use posy::{checkout::CheckoutError, pickup::ValidationError};
use posy_app::domain::checkout::{
    CheckoutServiceError,
    errors::{CHECKOUT_UNAVAILABLE, PAYMENT_UNAVAILABLE},
};

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::SessionNotFound(_) => {
            StatusError::not_found().brief("Session not found")
        }
        CheckoutServiceError::Checkout(CheckoutError::Validation(error)) => {
            validation_status_error(&error)
        }
        CheckoutServiceError::Checkout(CheckoutError::EmptyCart) => {
            StatusError::conflict().brief("Cart is empty")
        }
        CheckoutServiceError::Checkout(error @ CheckoutError::InvalidStage { .. }) => {
            StatusError::conflict()
                .brief("Checkout is not at that step")
                .detail(error.to_string())
        }
        CheckoutServiceError::Checkout(CheckoutError::PaymentInFlight) => {
            StatusError::conflict().brief("A payment is already being started")
        }
        CheckoutServiceError::Checkout(CheckoutError::StaleAttempt(_)) => {
            StatusError::conflict().brief("The payment attempt was cancelled")
        }
        CheckoutServiceError::Checkout(CheckoutError::NoPaymentSession) => {
            StatusError::conflict().brief("No payment session has been created")
        }
        CheckoutServiceError::Checkout(CheckoutError::SessionMismatch) => {
            StatusError::conflict().brief("Payment does not match this checkout")
        }
        CheckoutServiceError::UnknownProduct(_) => {
            StatusError::unprocessable_entity().brief(CHECKOUT_UNAVAILABLE)
        }
        CheckoutServiceError::PaymentSession(source) => {
            error!(%source, "payment provider failed to create a session");

            StatusError::bad_gateway().brief(PAYMENT_UNAVAILABLE)
        }
        CheckoutServiceError::Pickup(source) => {
            error!(%source, "failed to access pickup details");

            StatusError::internal_server_error()
        }
    }
}

fn validation_status_error(error: &ValidationError) -> StatusError {
    let brief = match error {
        ValidationError::MissingFields(_) => "Pickup details are incomplete",
        _ => "Pickup details are invalid",
    };

    StatusError::unprocessable_entity()
        .brief(brief)
        .detail(error.to_string())
}
