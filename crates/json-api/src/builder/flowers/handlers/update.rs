//! Update Builder Flower Handler

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
    builder::errors::into_status_error, carts::items::update::LineChangeResponse, extensions::*,
};

/// Update Builder Flower Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateFlowerRequest {
    /// Stems to add (positive) or take away (negative)
    pub delta: i64,
}

/// Update Builder Flower Handler
///
/// Changes a selected flower's stem count by a signed delta; reaching zero drops the flower.
#[endpoint(
    tags("builder"),
    summary = "Change Stem Count",
    responses(
        (status_code = StatusCode::OK, description = "Stem count changed"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found or flower not selected"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Stem count over the limit"),
    ),
)]
#[tracing::instrument(
    name = "builder.flowers.update",
    skip(session, flower, json, depot),
    fields(
        session = tracing::field::Empty,
        flower_id = tracing::field::Empty,
        delta = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    flower: PathParam<String>,
    json: JsonBody<UpdateFlowerRequest>,
    depot: &mut Depot,
) -> Result<Json<LineChangeResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let flower = flower.into_inner();
    let delta = json.into_inner().delta;

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));
    span.record("flower_id", tracing::field::display(&flower));
    span.record("delta", delta);

    let change = state
        .app
        .builder
        .update_quantity(session, flower.clone(), delta)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LineChangeResponse::new(flower, change)))
}
