//! Builder Errors

use salvo::http::StatusError;

use posy::builder::BuilderError;
use posy_app::domain::builder::BuilderServiceError;

pub(crate) fn into_status_error(error: BuilderServiceError) -> StatusError {
    match error {
        BuilderServiceError::SessionNotFound(_) => {
            StatusError::not_found().brief("Session not found")
        }
        BuilderServiceError::FlowerNotFound(flower) => StatusError::unprocessable_entity()
            .brief("Unknown flower")
            .detail(format!("{flower:?} is not in the catalog")),
        BuilderServiceError::SelectionNotFound(flower) => StatusError::not_found()
            .brief("Flower not selected")
            .detail(format!("{flower:?} is not in the bouquet")),
        BuilderServiceError::Builder(BuilderError::EmptyBouquet) => {
            StatusError::conflict().brief("Bouquet is empty")
        }
        BuilderServiceError::Builder(error @ BuilderError::OutOfStock(_)) => {
            StatusError::conflict()
                .brief("Flower is out of stock")
                .detail(error.to_string())
        }
        BuilderServiceError::Builder(BuilderError::Cart(error)) => {
            StatusError::unprocessable_entity()
                .brief("Invalid quantity")
                .detail(error.to_string())
        }
        BuilderServiceError::Checkout(error) => StatusError::conflict()
            .brief("Payment is in progress")
            .detail(error.to_string()),
    }
}
