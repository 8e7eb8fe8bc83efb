//! Catalog Errors

use salvo::http::StatusError;

use posy_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::ProductNotFound(_) => StatusError::not_found().brief("Product not found"),
        CatalogServiceError::FlowerNotFound(_) => StatusError::not_found().brief("Flower not found"),
        CatalogServiceError::InvalidCategory(category) => StatusError::bad_request()
            .brief("Unknown flower category")
            .detail(format!("{category:?} is not a flower category")),
    }
}
