//! Bouquet builder service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use posy::{
    builder::Selection,
    cart::{CartLineItem, LineChange},
};
use tracing::debug;

use crate::domain::{
    builder::{errors::BuilderServiceError, models::BuilderSummary},
    catalog::CatalogService,
    sessions::{SessionRegistry, models::SessionUuid},
};

/// Builder service over the session registry.
#[derive(Clone)]
pub struct SessionBuilderService {
    sessions: Arc<SessionRegistry>,
    catalog: Arc<dyn CatalogService>,
}

impl SessionBuilderService {
    #[must_use]
    pub fn new(sessions: Arc<SessionRegistry>, catalog: Arc<dyn CatalogService>) -> Self {
        Self { sessions, catalog }
    }
}

#[async_trait]
impl BuilderService for SessionBuilderService {
    async fn get_builder(&self, session: SessionUuid) -> Result<BuilderSummary, BuilderServiceError> {
        let handle = self.sessions.get(session).await?;
        let shopper = handle.lock().await;

        Ok(BuilderSummary::from(&shopper.builder))
    }

    async fn add_flower(
        &self,
        session: SessionUuid,
        flower: String,
    ) -> Result<Selection, BuilderServiceError> {
        let handle = self.sessions.get(session).await?;
        let flower = self.catalog.get_flower(flower).await?;

        let mut shopper = handle.lock().await;

        Ok(*shopper.builder.add_flower(&flower)?)
    }

    async fn update_quantity(
        &self,
        session: SessionUuid,
        flower: String,
        delta: i64,
    ) -> Result<LineChange, BuilderServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut shopper = handle.lock().await;

        match shopper.builder.update_quantity(&flower, delta)? {
            LineChange::Untouched => Err(BuilderServiceError::SelectionNotFound(flower)),
            change => Ok(change),
        }
    }

    async fn remove_flower(
        &self,
        session: SessionUuid,
        flower: String,
    ) -> Result<(), BuilderServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut shopper = handle.lock().await;

        if !shopper.builder.remove_flower(&flower) {
            return Err(BuilderServiceError::SelectionNotFound(flower));
        }

        Ok(())
    }

    async fn commit(
        &self,
        session: SessionUuid,
        name: Option<String>,
    ) -> Result<CartLineItem, BuilderServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut guard = handle.lock().await;
        let shopper = &mut *guard;

        shopper.checkout.ensure_cart_editable()?;

        let line = shopper.builder.commit(&mut shopper.cart, name.as_deref())?;

        debug!(%session, item = %line.id, price = line.unit_price, "custom bouquet committed");

        Ok(line)
    }
}

#[automock]
#[async_trait]
pub trait BuilderService: Send + Sync {
    /// Retrieves the current selection with its total.
    async fn get_builder(&self, session: SessionUuid) -> Result<BuilderSummary, BuilderServiceError>;

    /// Adds one stem of a flower to the selection.
    async fn add_flower(
        &self,
        session: SessionUuid,
        flower: String,
    ) -> Result<Selection, BuilderServiceError>;

    /// Applies a signed change to a selected flower's stem count.
    async fn update_quantity(
        &self,
        session: SessionUuid,
        flower: String,
        delta: i64,
    ) -> Result<LineChange, BuilderServiceError>;

    /// Drops a flower from the selection.
    async fn remove_flower(
        &self,
        session: SessionUuid,
        flower: String,
    ) -> Result<(), BuilderServiceError>;

    /// Commits the selection to the cart as one custom bouquet.
    async fn commit(
        &self,
        session: SessionUuid,
        name: Option<String>,
    ) -> Result<CartLineItem, BuilderServiceError>;
}
