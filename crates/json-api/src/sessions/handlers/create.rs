//! Create Session Handler

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, sessions::errors::into_status_error};

/// Session Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionCreatedResponse {
    /// Session id to use in every shopper request
    pub uuid: Uuid,
}

/// Create Session Handler
///
/// Opens a shopper session with an empty cart, builder and checkout.
#[endpoint(
    tags("sessions"),
    summary = "Create Session",
    responses(
        (status_code = StatusCode::CREATED, description = "Session created"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "sessions.create", skip(depot, res), fields(session = tracing::field::Empty), err)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionCreatedResponse>, StatusError> {
    let state = depot.state()?;

    let session = state
        .app
        .sessions
        .create_session()
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("session", tracing::field::display(session));

    res.add_header(LOCATION, format!("/sessions/{session}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(SessionCreatedResponse {
        uuid: session.into_uuid(),
    }))
}
