//! Pickup store.

use async_trait::async_trait;
use mockall::automock;
use posy::pickup::PickupDetails;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::domain::{pickup::errors::PickupStoreError, sessions::models::SessionUuid};

/// Key the details blob is stored under.
pub const PICKUP_KEY: &str = "posy-pickup";

/// Pickup store holding JSON blobs in process memory.
#[derive(Debug, Default)]
pub struct InMemoryPickupStore {
    blobs: RwLock<FxHashMap<(SessionUuid, &'static str), String>>,
}

impl InMemoryPickupStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PickupStore for InMemoryPickupStore {
    async fn read(&self, session: SessionUuid) -> Result<Option<PickupDetails>, PickupStoreError> {
        let blobs = self.blobs.read().await;

        blobs
            .get(&(session, PICKUP_KEY))
            .map(|blob| serde_json::from_str(blob).map_err(PickupStoreError::Decode))
            .transpose()
    }

    async fn write(
        &self,
        session: SessionUuid,
        details: PickupDetails,
    ) -> Result<(), PickupStoreError> {
        let blob = serde_json::to_string(&details).map_err(PickupStoreError::Encode)?;

        self.blobs.write().await.insert((session, PICKUP_KEY), blob);

        Ok(())
    }

    async fn delete(&self, session: SessionUuid) -> Result<(), PickupStoreError> {
        self.blobs.write().await.remove(&(session, PICKUP_KEY));

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PickupStore: Send + Sync {
    /// Reads the session's pickup details, if any were written.
    async fn read(&self, session: SessionUuid) -> Result<Option<PickupDetails>, PickupStoreError>;

    /// Replaces the session's pickup details.
    async fn write(
        &self,
        session: SessionUuid,
        details: PickupDetails,
    ) -> Result<(), PickupStoreError>;

    /// Discards the session's pickup details. Deleting absent details is not an error.
    async fn delete(&self, session: SessionUuid) -> Result<(), PickupStoreError>;
}
