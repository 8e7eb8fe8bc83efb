//! Sessions service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, warn};

use crate::domain::{
    pickup::PickupStore,
    sessions::{
        errors::{SessionNotFound, SessionsServiceError},
        models::SessionUuid,
        registry::SessionRegistry,
    },
};

/// Sessions service over the in-process registry.
#[derive(Clone)]
pub struct InMemorySessionsService {
    registry: Arc<SessionRegistry>,
    pickup: Arc<dyn PickupStore>,
}

impl InMemorySessionsService {
    #[must_use]
    pub fn new(registry: Arc<SessionRegistry>, pickup: Arc<dyn PickupStore>) -> Self {
        Self { registry, pickup }
    }
}

#[async_trait]
impl SessionsService for InMemorySessionsService {
    async fn create_session(&self) -> Result<SessionUuid, SessionsServiceError> {
        let session = self.registry.create().await;

        debug!(%session, "shopper session created");

        Ok(session)
    }

    async fn end_session(&self, session: SessionUuid) -> Result<(), SessionsServiceError> {
        if !self.registry.remove(session).await {
            return Err(SessionNotFound(session).into());
        }

        self.pickup.delete(session).await?;

        debug!(%session, "shopper session ended");

        Ok(())
    }

    async fn expire_idle(&self, now: Timestamp) -> usize {
        let expired = self.registry.remove_idle(now).await;

        for session in &expired {
            if let Err(error) = self.pickup.delete(*session).await {
                warn!(%session, %error, "failed to discard pickup details of expired session");
            }
        }

        expired.len()
    }
}

#[automock]
#[async_trait]
pub trait SessionsService: Send + Sync {
    /// Opens a new shopper session with an empty cart.
    async fn create_session(&self) -> Result<SessionUuid, SessionsServiceError>;

    /// Ends a session, discarding its cart, builder, checkout and pickup details.
    async fn end_session(&self, session: SessionUuid) -> Result<(), SessionsServiceError>;

    /// Ends every session left idle past the TTL at `now`, discarding their pickup details.
    /// Returns how many sessions expired.
    async fn expire_idle(&self, now: Timestamp) -> usize;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use jiff::SignedDuration;
    use testresult::TestResult;

    use crate::{
        domain::pickup::{InMemoryPickupStore, MockPickupStore, PickupStoreError},
        test::pickup_details,
    };

    use super::*;

    #[tokio::test]
    async fn end_session_discards_pickup_details() -> TestResult {
        let registry = Arc::new(SessionRegistry::new());
        let mut pickup = MockPickupStore::new();

        pickup.expect_delete().once().returning(|_| Ok(()));

        let service = InMemorySessionsService::new(registry.clone(), Arc::new(pickup));
        let session = service.create_session().await?;

        service.end_session(session).await?;

        assert!(registry.get(session).await.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn ending_an_unknown_session_is_not_found() {
        let mut pickup = MockPickupStore::new();

        pickup.expect_delete().never();

        let service = InMemorySessionsService::new(Arc::new(SessionRegistry::new()), Arc::new(pickup));
        let session = SessionUuid::new();

        let result = service.end_session(session).await;

        assert!(
            matches!(result, Err(SessionsServiceError::NotFound(SessionNotFound(uuid))) if uuid == session),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn idle_sessions_expire_with_their_pickup_details() -> TestResult {
        let registry = Arc::new(SessionRegistry::with_idle_ttl(Duration::from_secs(60)));
        let pickup = Arc::new(InMemoryPickupStore::new());
        let service = InMemorySessionsService::new(registry.clone(), pickup.clone());

        let opened = Timestamp::UNIX_EPOCH;
        let idle = registry.create_at(opened).await;
        let active = registry.create_at(opened).await;

        pickup.write(idle, pickup_details()).await?;
        pickup.write(active, pickup_details()).await?;

        let later = opened.checked_add(SignedDuration::from_mins(5))?;

        registry.get_at(active, later).await?;

        assert_eq!(service.expire_idle(later).await, 1);
        assert_eq!(registry.get(idle).await.err(), Some(SessionNotFound(idle)));
        assert_eq!(pickup.read(idle).await?, None);
        assert_eq!(pickup.read(active).await?, Some(pickup_details()));

        Ok(())
    }

    #[tokio::test]
    async fn expiry_continues_past_pickup_failures() -> TestResult {
        let registry = Arc::new(SessionRegistry::with_idle_ttl(Duration::from_secs(60)));
        let mut pickup = MockPickupStore::new();

        pickup
            .expect_delete()
            .times(2)
            .returning(|_| Err(PickupStoreError::Decode(serde_json::from_str::<u8>("").unwrap_err())));

        let service = InMemorySessionsService::new(registry.clone(), Arc::new(pickup));
        let opened = Timestamp::UNIX_EPOCH;

        registry.create_at(opened).await;
        registry.create_at(opened).await;

        let later = opened.checked_add(SignedDuration::from_hours(1))?;

        assert_eq!(service.expire_idle(later).await, 2);
        assert!(registry.is_empty().await);

        Ok(())
    }
}
