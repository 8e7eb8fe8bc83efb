//! Delete Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*};

/// Delete Cart Item Handler
///
/// Removes a line. Removing a line that is not in the cart succeeds without changes.
#[endpoint(
    tags("carts"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
        (status_code = StatusCode::CONFLICT, description = "Payment is in progress"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.delete",
    skip(session, item, depot),
    fields(session = tracing::field::Empty, item = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    item: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();
    let item = item.into_inner();

    let span = tracing::Span::current();

    span.record("session", tracing::field::display(session));
    span.record("item", tracing::field::display(&item));

    let removed = state
        .app
        .carts
        .remove_item(session, item)
        .await
        .map_err(into_status_error)?;

    tracing::debug!(%session, removed, "cart item removal applied");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use posy_app::domain::{
        carts::CartsServiceError,
        sessions::{SessionNotFound, models::SessionUuid},
    };

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_service(mocks: MockServices) -> Service {
        mocks.service(Router::with_path("sessions/{session}/cart/items/{item}").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_item_returns_204() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .carts
            .expect_remove_item()
            .once()
            .withf(move |s, item| *s == session && item == "sunflower")
            .return_once(|_, _| Ok(true));

        let res = TestClient::delete(format!(
            "http://example.com/sessions/{session}/cart/items/sunflower"
        ))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_remove_absent_item_is_a_no_op() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Ok(false));

        let res = TestClient::delete(format!(
            "http://example.com/sessions/{session}/cart/items/sunflower"
        ))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_remove_from_missing_session_returns_404() {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();

        mocks
            .carts
            .expect_remove_item()
            .once()
            .return_once(|s, _| Err(CartsServiceError::SessionNotFound(SessionNotFound(s))));

        let res = TestClient::delete(format!(
            "http://example.com/sessions/{session}/cart/items/sunflower"
        ))
        .send(&make_service(mocks))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
