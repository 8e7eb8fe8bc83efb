//! Commit Bouquet Handler

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{builder::errors::into_status_error, carts::get::CartItemResponse, extensions::*};

/// Commit Bouquet Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CommitBouquetRequest {
    /// Bouquet name; blank names fall back to "Custom Bouquet"
    #[serde(default)]
    pub name: Option<String>,
}

/// Commit Bouquet Handler
///
/// Adds the builder's selection to the cart as one custom bouquet and clears the builder.
#[endpoint(
    tags("builder"),
    summary = "Commit Custom Bouquet",
    responses(
        (status_code = StatusCode::CREATED, description = "Bouquet added to the cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Bouquet is empty or payment is in progress"),
    ),
)]
#[tracing::instrument(
    name = "builder.commit",
    skip(session, json, depot, res),
    fields(session = tracing::field::Empty, item = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    json: JsonBody<CommitBouquetRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));

    let line = state
        .app
        .builder
        .commit(session, json.into_inner().name)
        .await
        .map_err(into_status_error)?;

    span.record("item", tracing::field::display(&line.id));

    res.add_header(
        LOCATION,
        format!("/sessions/{session}/cart/items/{}", line.id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    tracing::info!(%session, item = %line.id, price = line.unit_price, "committed custom bouquet");

    Ok(Json(line.into()))
}

#[cfg(test)]
mod tests {
    use posy::{
        builder::{BouquetBuilder, BuilderError},
        cart::Cart,
        catalog::Catalog,
        checkout::CheckoutError,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use posy_app::domain::{builder::BuilderServiceError, sessions::models::SessionUuid};

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_service(mocks: MockServices) -> Service {
        mocks.service(Router::with_path("sessions/{session}/builder/commit").post(handler))
    }

    #[tokio::test]
    async fn test_commit_returns_the_custom_line() -> TestResult {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();
        let mut builder = BouquetBuilder::new();
        let mut cart = Cart::new();

        if let Some(rose) = Catalog::florist().flower("rose-pink") {
            builder.add_flower(rose)?;
        }

        let line = builder.commit(&mut cart, Some("For Mum"))?;
        let id = line.id.clone();

        mocks
            .builder
            .expect_commit()
            .once()
            .withf(move |s, name| *s == session && name.as_deref() == Some("For Mum"))
            .return_once(move |_, _| Ok(line));

        let mut res = TestClient::post(format!(
            "http://example.com/sessions/{session}/builder/commit"
        ))
        .json(&json!({ "name": "For Mum" }))
        .send(&make_service(mocks))
        .await;

        let body: CartItemResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            Some(format!("/sessions/{session}/cart/items/{id}").as_str())
        );
        assert_eq!(body.kind, "custom");
        assert_eq!(body.name, "For Mum");
        assert_eq!(body.composition.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_committing_an_empty_bouquet_returns_409() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .builder
            .expect_commit()
            .once()
            .withf(|_, name| name.is_none())
            .return_once(|_, _| Err(BuilderServiceError::Builder(BuilderError::EmptyBouquet)));

        let res = TestClient::post(format!(
            "http://example.com/sessions/{session}/builder/commit"
        ))
        .json(&json!({}))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_committing_during_payment_returns_409() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks.builder.expect_commit().once().return_once(|_, _| {
            Err(BuilderServiceError::Checkout(CheckoutError::PaymentInFlight))
        });

        let res = TestClient::post(format!(
            "http://example.com/sessions/{session}/builder/commit"
        ))
        .json(&json!({ "name": "For Mum" }))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
