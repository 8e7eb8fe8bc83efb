//! Begin Checkout Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
};

/// Begin Checkout Handler
///
/// Moves a non-empty cart into the pickup details step. Calling it again while details are being
/// captured is harmless.
#[endpoint(
    tags("checkout"),
    summary = "Begin Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Checkout is collecting pickup details"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Cart is empty or payment is in progress"),
    ),
)]
#[tracing::instrument(
    name = "checkout.begin",
    skip(session, depot),
    fields(session = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    tracing::Span::current().record("session", tracing::field::display(session));

    let view = state
        .app
        .checkout
        .begin(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}
