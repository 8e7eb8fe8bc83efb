//! Cancel Payment Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
};

/// Cancel Payment Handler
///
/// Abandons the pending payment and returns to the details step. A session the provider issues
/// after this point is discarded.
#[endpoint(
    tags("checkout"),
    summary = "Cancel Payment",
    responses(
        (status_code = StatusCode::OK, description = "Payment cancelled"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "No payment is pending"),
    ),
)]
#[tracing::instrument(
    name = "checkout.payment.delete",
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
        .cancel_payment(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}
