//! Update Cart Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use posy::cart::LineChange;

use crate::{carts::errors::into_status_error, extensions::*};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; zero or less removes the line
    pub quantity: i64,
}

/// Line Change Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineChangeResponse {
    /// Line that was addressed
    pub id: String,

    /// `updated`, `removed` or `untouched`
    pub change: String,

    /// Quantity after an update
    pub quantity: Option<u32>,
}

impl LineChangeResponse {
    pub(crate) fn new(id: String, change: LineChange) -> Self {
        let (change, quantity) = match change {
            LineChange::Updated(quantity) => ("updated", Some(quantity)),
            LineChange::Removed => ("removed", None),
            LineChange::Untouched => ("untouched", None),
        };

        Self {
            id,
            change: change.to_string(),
            quantity,
        }
    }
}

/// Update Cart Item Handler
///
/// Sets a line's quantity. Unknown lines are left alone and reported as `untouched`.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity applied"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Payment is in progress"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Quantity over the per-line limit"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.update",
    skip(session, item, json, depot),
    fields(
        session = tracing::field::Empty,
        item = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    item: PathParam<String>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<LineChangeResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let item = item.into_inner();
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));
    span.record("item", tracing::field::display(&item));
    span.record("quantity", quantity);

    let change = state
        .app
        .carts
        .update_quantity(session, item.clone(), quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LineChangeResponse::new(item, change)))
}
