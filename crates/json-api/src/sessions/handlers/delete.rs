//! Delete Session Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, sessions::errors::into_status_error};

/// Delete Session Handler
///
/// Ends a session, discarding its cart, builder, checkout and pickup details.
#[endpoint(
    tags("sessions"),
    summary = "Delete Session",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Session ended"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
    ),
)]
#[tracing::instrument(name = "sessions.delete", skip(session, depot), fields(session = tracing::field::Empty), err)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    tracing::Span::current().record("session", tracing::field::display(session));

    state
        .app
        .sessions
        .end_session(session)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
