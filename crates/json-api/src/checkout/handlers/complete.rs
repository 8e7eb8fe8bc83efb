//! Complete Checkout Handler

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
    checkout::{errors::into_status_error, models::CompletedCheckoutResponse},
    extensions::*,
    observability::{CheckoutEvent, record_checkout_event},
};

/// Complete Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompleteCheckoutRequest {
    /// Token of the payment session the provider confirmed
    pub token: String,
}

/// Complete Checkout Handler
///
/// Records the provider's payment confirmation, places the order and clears the cart. The order
/// confirmation is sent afterwards and its failure does not undo the order.
#[endpoint(
    tags("checkout"),
    summary = "Complete Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "No matching payment session is pending"),
    ),
)]
#[tracing::instrument(
    name = "checkout.complete",
    skip(session, json, depot),
    fields(
        session = tracing::field::Empty,
        order_number = tracing::field::Empty,
        confirmation_sent = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    json: JsonBody<CompleteCheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<CompletedCheckoutResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));

    let completed = state
        .app
        .checkout
        .complete(session, json.into_inner().token)
        .await
        .map_err(into_status_error)?;

    span.record(
        "order_number",
        tracing::field::display(&completed.order.order_number),
    );
    span.record("confirmation_sent", completed.confirmation_sent);

    record_checkout_event(CheckoutEvent::OrderCompleted);

    if !completed.confirmation_sent {
        record_checkout_event(CheckoutEvent::ConfirmationFailed);
    }

    Ok(Json(completed.into()))
}

#[cfg(test)]
mod tests {
    use posy::checkout::CheckoutError;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use posy_app::domain::{
        checkout::{CheckoutServiceError, models::CompletedCheckout},
        sessions::models::SessionUuid,
    };

    use crate::{checkout::models::fixtures, test_helpers::MockServices};

    use super::*;

    fn make_service(mocks: MockServices) -> Service {
        mocks.service(Router::with_path("sessions/{session}/checkout/complete").post(handler))
    }

    #[tokio::test]
    async fn test_completion_returns_the_order() -> TestResult {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();
        let order = fixtures::order()?;
        let total = order.total;

        mocks
            .checkout
            .expect_complete()
            .once()
            .withf(move |s, token| *s == session && token == "pi_123_secret_456")
            .return_once(move |_, _| {
                Ok(CompletedCheckout {
                    order,
                    confirmation_sent: false,
                })
            });

        let mut res = TestClient::post(format!(
            "http://example.com/sessions/{session}/checkout/complete"
        ))
        .json(&json!({ "token": "pi_123_secret_456" }))
        .send(&make_service(mocks))
        .await;

        let body: CompletedCheckoutResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.order.order_number, "LF-K3X9Q2ZT");
        assert_eq!(body.order.item_count, 2);
        assert_eq!(body.order.total, total);
        assert_eq!(body.order.pickup.pickup_time, "10:30");
        assert!(!body.confirmation_sent);

        Ok(())
    }

    #[tokio::test]
    async fn test_mismatched_token_returns_409() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .checkout
            .expect_complete()
            .once()
            .return_once(|_, _| Err(CheckoutServiceError::Checkout(CheckoutError::SessionMismatch)));

        let res = TestClient::post(format!(
            "http://example.com/sessions/{session}/checkout/complete"
        ))
        .json(&json!({ "token": "pi_other_secret" }))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
