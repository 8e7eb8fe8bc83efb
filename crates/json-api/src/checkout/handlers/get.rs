//! Get Checkout Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
};

/// Get Checkout Handler
#[endpoint(
    tags("checkout"),
    summary = "Get Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Checkout found"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
    ),
)]
#[tracing::instrument(
    name = "checkout.get",
    skip(session, depot),
    fields(session = tracing::field::Empty, stage = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));

    let view = state
        .app
        .checkout
        .get_checkout(session)
        .await
        .map_err(into_status_error)?;

    span.record("stage", view.stage.as_str());

    Ok(Json(view.into()))
}
