//! Session Errors

use salvo::http::StatusError;
use tracing::error;

use posy_app::domain::sessions::SessionsServiceError;

pub(crate) fn into_status_error(error: SessionsServiceError) -> StatusError {
    match error {
        SessionsServiceError::NotFound(_) => StatusError::not_found().brief("Session not found"),
        SessionsServiceError::Pickup(source) => {
            error!(%source, "failed to discard pickup details");

            StatusError::internal_server_error()
        }
    }
}
