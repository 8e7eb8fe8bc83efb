//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use posy::cart::{CartLineItem, LineChange, NewCartItem};
use tracing::debug;

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::{AddCartItem, CartSummary},
    },
    catalog::CatalogService,
    sessions::{SessionRegistry, models::SessionUuid},
};

/// Carts service over the session registry.
#[derive(Clone)]
pub struct SessionCartsService {
    sessions: Arc<SessionRegistry>,
    catalog: Arc<dyn CatalogService>,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(sessions: Arc<SessionRegistry>, catalog: Arc<dyn CatalogService>) -> Self {
        Self { sessions, catalog }
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn get_cart(&self, session: SessionUuid) -> Result<CartSummary, CartsServiceError> {
        let handle = self.sessions.get(session).await?;
        let shopper = handle.lock().await;

        Ok(CartSummary::from(&shopper.cart))
    }

    async fn add_item(
        &self,
        session: SessionUuid,
        item: AddCartItem,
    ) -> Result<CartLineItem, CartsServiceError> {
        let handle = self.sessions.get(session).await?;
        let product = self.catalog.resolve(item.product_id).await?;

        let mut shopper = handle.lock().await;

        shopper.checkout.ensure_cart_editable()?;

        let line = shopper
            .cart
            .add_item(NewCartItem::from_product(product).with_quantity(item.quantity))?;

        debug!(%session, item = %line.id, quantity = line.quantity, "cart line added");

        Ok(line)
    }

    async fn update_quantity(
        &self,
        session: SessionUuid,
        item: String,
        quantity: i64,
    ) -> Result<LineChange, CartsServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut shopper = handle.lock().await;

        shopper.checkout.ensure_cart_editable()?;

        let change = shopper.cart.update_quantity(&item, quantity)?;

        let shopper = &mut *shopper;

        if shopper.checkout.sync_with_cart(&shopper.cart) {
            debug!(%session, "cart emptied during checkout; returned to cart stage");
        }

        Ok(change)
    }

    async fn remove_item(&self, session: SessionUuid, item: String) -> Result<bool, CartsServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut shopper = handle.lock().await;

        shopper.checkout.ensure_cart_editable()?;

        let removed = shopper.cart.remove_item(&item);

        let shopper = &mut *shopper;

        if shopper.checkout.sync_with_cart(&shopper.cart) {
            debug!(%session, "cart emptied during checkout; returned to cart stage");
        }

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves the session's cart with its item count and subtotal.
    async fn get_cart(&self, session: SessionUuid) -> Result<CartSummary, CartsServiceError>;

    /// Adds a catalog product, merging into an existing line for the same product.
    async fn add_item(
        &self,
        session: SessionUuid,
        item: AddCartItem,
    ) -> Result<CartLineItem, CartsServiceError>;

    /// Sets a line's quantity; zero or less removes it. Unknown lines are left alone.
    async fn update_quantity(
        &self,
        session: SessionUuid,
        item: String,
        quantity: i64,
    ) -> Result<LineChange, CartsServiceError>;

    /// Removes a line. Returns whether a line was removed.
    async fn remove_item(&self, session: SessionUuid, item: String) -> Result<bool, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use posy::{cart::CartError, checkout::CheckoutStage};
    use testresult::TestResult;

    use crate::{
        domain::{
            catalog::{CatalogServiceError, MockCatalogService},
            checkout::CheckoutService,
        },
        test::TestContext,
    };

    use super::*;

    fn add(product_id: &str, quantity: u32) -> AddCartItem {
        AddCartItem {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn adding_the_same_product_merges_lines() -> TestResult {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        ctx.carts.add_item(session, add("rose-red", 1)).await?;
        let line = ctx.carts.add_item(session, add("rose-red", 1)).await?;

        assert_eq!(line.quantity, 2);

        let cart = ctx.carts.get_cart(session).await?;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.subtotal, 9_98);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_copies_catalog_details() -> TestResult {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        let line = ctx.carts.add_item(session, add("romantic-red", 3)).await?;

        assert_eq!(line.name, "Romantic Red");
        assert_eq!(line.unit_price, 79_99);
        assert_eq!(line.quantity, 3);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_products_are_rejected_without_touching_the_cart() -> TestResult {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        let result = ctx.carts.add_item(session, add("orchid", 1)).await;

        assert_eq!(result, Err(CartsServiceError::UnknownProduct("orchid".to_string())));
        assert!(ctx.carts.get_cart(session).await?.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_sessions_are_not_found() {
        let ctx = TestContext::new();

        let result = ctx.carts.get_cart(SessionUuid::new()).await;

        assert!(
            matches!(result, Err(CartsServiceError::SessionNotFound(_))),
            "expected SessionNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_item_does_not_consult_the_catalog_for_missing_sessions() {
        let mut catalog = MockCatalogService::new();

        catalog.expect_resolve().never();

        let service = SessionCartsService::new(Arc::new(SessionRegistry::new()), Arc::new(catalog));

        let result = service.add_item(SessionUuid::new(), add("rose-red", 1)).await;

        assert!(matches!(result, Err(CartsServiceError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn catalog_failures_surface_as_unknown_product() {
        let registry = Arc::new(SessionRegistry::new());
        let session = registry.create().await;
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_resolve()
            .once()
            .withf(|id| id == "tulip-red")
            .return_once(|id| Err(CatalogServiceError::ProductNotFound(id)));

        let service = SessionCartsService::new(registry, Arc::new(catalog));

        let result = service.add_item(session, add("tulip-red", 1)).await;

        assert_eq!(result, Err(CartsServiceError::UnknownProduct("tulip-red".to_string())));
    }

    #[tokio::test]
    async fn zero_quantity_adds_are_rejected() {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        let result = ctx.carts.add_item(session, add("rose-red", 0)).await;

        assert_eq!(result, Err(CartsServiceError::Cart(CartError::InvalidQuantity)));
    }

    #[tokio::test]
    async fn non_positive_quantities_remove_the_line() -> TestResult {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        ctx.carts.add_item(session, add("rose-red", 2)).await?;
        ctx.carts.add_item(session, add("tulip-red", 1)).await?;

        let zero = ctx.carts.update_quantity(session, "rose-red".to_string(), 0).await?;
        let negative = ctx.carts.update_quantity(session, "tulip-red".to_string(), -1).await?;
        let unknown = ctx.carts.update_quantity(session, "lavender".to_string(), 4).await?;

        assert_eq!(zero, LineChange::Removed);
        assert_eq!(negative, LineChange::Removed);
        assert_eq!(unknown, LineChange::Untouched);
        assert!(ctx.carts.get_cart(session).await?.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn removing_an_absent_line_is_a_no_op() -> TestResult {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        assert!(!ctx.carts.remove_item(session, "rose-red".to_string()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn emptying_the_cart_during_details_returns_to_cart_stage() -> TestResult {
        let ctx = TestContext::new();
        let session = ctx.sessions.create().await;

        ctx.carts.add_item(session, add("rose-red", 1)).await?;
        ctx.checkout.begin(session).await?;

        assert!(ctx.carts.remove_item(session, "rose-red".to_string()).await?);
        assert_eq!(ctx.checkout.get_checkout(session).await?.stage, CheckoutStage::Cart);

        Ok(())
    }
}
