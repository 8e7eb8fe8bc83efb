//! Cart Errors

use salvo::http::StatusError;

use posy_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::SessionNotFound(_) => StatusError::not_found().brief("Session not found"),
        CartsServiceError::UnknownProduct(product) => StatusError::unprocessable_entity()
            .brief("Unknown product")
            .detail(format!("{product:?} is not in the catalog")),
        CartsServiceError::Cart(error) => StatusError::unprocessable_entity()
            .brief("Invalid quantity")
            .detail(error.to_string()),
        CartsServiceError::Checkout(error) => StatusError::conflict()
            .brief("Payment is in progress")
            .detail(error.to_string()),
    }
}
