//! Add Builder Flower Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    builder::{errors::into_status_error, get::SelectionResponse},
    extensions::*,
};

/// Add Builder Flower Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddFlowerRequest {
    /// Catalog flower id
    pub flower_id: String,
}

/// Add Builder Flower Handler
///
/// Adds one stem of a flower to the bouquet being built.
#[endpoint(
    tags("builder"),
    summary = "Add Flower to Bouquet",
    responses(
        (status_code = StatusCode::OK, description = "Stem added"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Flower is out of stock"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Unknown flower"),
    ),
)]
#[tracing::instrument(
    name = "builder.flowers.create",
    skip(session, json, depot),
    fields(session = tracing::field::Empty, flower_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    json: JsonBody<AddFlowerRequest>,
    depot: &mut Depot,
) -> Result<Json<SelectionResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let flower = json.into_inner().flower_id;

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));
    span.record("flower_id", tracing::field::display(&flower));

    let selection = state
        .app
        .builder
        .add_flower(session, flower)
        .await
        .map_err(into_status_error)?;

    Ok(Json(selection.into()))
}
