//! Create Cart Item Handler

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

use posy_app::domain::carts::models::AddCartItem;

use crate::{
    carts::{errors::into_status_error, get::CartItemResponse},
    extensions::*,
};

/// Create Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    /// Flower or bouquet id
    pub product_id: String,

    /// Units to add; defaults to one
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl From<CreateCartItemRequest> for AddCartItem {
    fn from(request: CreateCartItemRequest) -> Self {
        AddCartItem {
            product_id: request.product_id,
            quantity: request.quantity.unwrap_or(1),
        }
    }
}

/// Create Cart Item Handler
///
/// Adds a catalog product to the cart, merging with an existing line for the same product.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created or merged"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Payment is in progress"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Unknown product or invalid quantity"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(session, json, depot, res),
    fields(
        session = tracing::field::Empty,
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let request = AddCartItem::from(json.into_inner());

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));
    span.record("product_id", tracing::field::display(&request.product_id));
    span.record("quantity", request.quantity);

    let line = state
        .app
        .carts
        .add_item(session, request)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/sessions/{session}/cart/items/{}", line.id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    tracing::info!(%session, item = %line.id, quantity = line.quantity, "added cart item");

    Ok(Json(line.into()))
}

#[cfg(test)]
mod tests {
    use posy::{
        cart::{Cart, CartError, NewCartItem},
        catalog::Catalog,
        checkout::CheckoutError,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use posy_app::domain::{carts::CartsServiceError, sessions::models::SessionUuid};

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_service(mocks: MockServices) -> Service {
        mocks.service(Router::with_path("sessions/{session}/cart/items").post(handler))
    }

    #[tokio::test]
    async fn test_add_item_returns_201_with_location() -> TestResult {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();
        let mut cart = Cart::new();
        let line =
            cart.add_item(NewCartItem::from_product(Catalog::florist().resolve("tulip-red")?))?;

        mocks
            .carts
            .expect_add_item()
            .once()
            .withf(move |s, item| {
                *s == session
                    && *item
                        == AddCartItem {
                            product_id: "tulip-red".to_string(),
                            quantity: 1,
                        }
            })
            .return_once(move |_, _| Ok(line));

        let mut res = TestClient::post(format!("http://example.com/sessions/{session}/cart/items"))
            .json(&json!({ "product_id": "tulip-red" }))
            .send(&make_service(mocks))
            .await;

        let body: CartItemResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            location,
            Some(format!("/sessions/{session}/cart/items/tulip-red").as_str())
        );
        assert_eq!(body.kind, "flower");
        assert_eq!(body.quantity, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_422() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .carts
            .expect_add_item()
            .once()
            .return_once(|_, item| Err(CartsServiceError::UnknownProduct(item.product_id)));

        let res = TestClient::post(format!("http://example.com/sessions/{session}/cart/items"))
            .json(&json!({ "product_id": "orchid", "quantity": 2 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_add_zero_quantity_returns_422() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .carts
            .expect_add_item()
            .once()
            .withf(|_, item| item.quantity == 0)
            .return_once(|_, _| Err(CartsServiceError::Cart(CartError::InvalidQuantity)));

        let res = TestClient::post(format!("http://example.com/sessions/{session}/cart/items"))
            .json(&json!({ "product_id": "rose-red", "quantity": 0 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[tokio::test]
    async fn test_add_during_payment_returns_409() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .carts
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Checkout(CheckoutError::PaymentInFlight)));

        let res = TestClient::post(format!("http://example.com/sessions/{session}/cart/items"))
            .json(&json!({ "product_id": "lily-white" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_missing_product_id_returns_400() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks.carts.expect_add_item().never();

        let res = TestClient::post(format!("http://example.com/sessions/{session}/cart/items"))
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
