//! Remove Builder Flower Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{builder::errors::into_status_error, extensions::*};

/// Remove Builder Flower Handler
#[endpoint(
    tags("builder"),
    summary = "Remove Flower from Bouquet",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Flower removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found or flower not selected"),
    ),
)]
#[tracing::instrument(
    name = "builder.flowers.delete",
    skip(session, flower, depot),
    fields(session = tracing::field::Empty, flower_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    flower: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let flower = flower.into_inner();

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));
    span.record("flower_id", tracing::field::display(&flower));

    state
        .app
        .builder
        .remove_flower(session, flower)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
