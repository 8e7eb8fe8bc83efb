//! Create Payment Session Handler

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use posy_app::domain::checkout::CheckoutServiceError;

use crate::{
    checkout::{errors::into_status_error, models::PaymentSessionResponse},
    extensions::*,
    observability::{CheckoutEvent, record_checkout_event},
};

/// Create Payment Session Handler
///
/// Validates the saved pickup details and asks the payment provider for a session covering the
/// cart. On failure the checkout returns to the details step with the reason recorded.
#[endpoint(
    tags("checkout"),
    summary = "Start Payment",
    responses(
        (status_code = StatusCode::CREATED, description = "Payment session created"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Checkout is not collecting details"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Pickup details are incomplete or invalid"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment provider unavailable"),
    ),
)]
#[tracing::instrument(
    name = "checkout.payment.create",
    skip(session, depot, res),
    fields(session = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentSessionResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    tracing::Span::current().record("session", tracing::field::display(session));

    let payment = match state.app.checkout.start_payment(session).await {
        Ok(payment) => payment,
        Err(error) => {
            if matches!(
                error,
                CheckoutServiceError::UnknownProduct(_) | CheckoutServiceError::PaymentSession(_)
            ) {
                record_checkout_event(CheckoutEvent::PaymentSessionFailed);
            }

            return Err(into_status_error(error));
        }
    };

    record_checkout_event(CheckoutEvent::PaymentSessionCreated);

    res.add_header(LOCATION, format!("/sessions/{session}/checkout"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(payment.into()))
}

#[cfg(test)]
mod tests {
    use posy::{
        checkout::{CheckoutError, PaymentSession},
        pickup::{MissingFields, RequiredField, ValidationError},
    };
    use salvo::test::{ResponseExt, TestClient};
    use smallvec::smallvec;
    use testresult::TestResult;

    use posy_app::domain::{payments::PaymentsError, sessions::models::SessionUuid};

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_service(mocks: MockServices) -> Service {
        mocks.service(Router::with_path("sessions/{session}/checkout/payment").post(handler))
    }

    #[tokio::test]
    async fn test_payment_session_is_returned() -> TestResult {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .checkout
            .expect_start_payment()
            .once()
            .withf(move |s| *s == session)
            .return_once(|_| {
                Ok(PaymentSession {
                    token: "pi_123_secret_456".to_string(),
                })
            });

        let mut res = TestClient::post(format!(
            "http://example.com/sessions/{session}/checkout/payment"
        ))
        .send(&make_service(mocks))
        .await;

        let body: PaymentSessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.token, "pi_123_secret_456");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_fields_return_422() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks.checkout.expect_start_payment().once().return_once(|_| {
            Err(CheckoutServiceError::Checkout(CheckoutError::Validation(
                ValidationError::MissingFields(MissingFields(smallvec![
                    RequiredField::Phone,
                    RequiredField::PickupTime,
                ])),
            )))
        });

        let res = TestClient::post(format!(
            "http://example.com/sessions/{session}/checkout/payment"
        ))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_provider_failure_returns_502() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks.checkout.expect_start_payment().once().return_once(|_| {
            Err(CheckoutServiceError::PaymentSession(
                PaymentsError::MissingClientSecret,
            ))
        });

        let res = TestClient::post(format!(
            "http://example.com/sessions/{session}/checkout/payment"
        ))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));
    }
}
