//! Save Pickup Details Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use posy::pickup::PickupDetails;

use crate::{
    checkout::{
        errors::into_status_error,
        models::{CheckoutResponse, PickupDetailsBody},
    },
    extensions::*,
};

/// Save Pickup Details Handler
///
/// Stores the pickup form as typed. Blank fields are accepted here and only block payment.
#[endpoint(
    tags("checkout"),
    summary = "Save Pickup Details",
    responses(
        (status_code = StatusCode::OK, description = "Pickup details saved"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Checkout has not begun"),
    ),
)]
#[tracing::instrument(
    name = "checkout.details.update",
    skip(session, json, depot),
    fields(session = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    json: JsonBody<PickupDetailsBody>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let details = PickupDetails::from(json.into_inner());

    tracing::Span::current().record("session", tracing::field::display(session));

    let view = state
        .app
        .checkout
        .save_details(session, details)
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}
