//! Session registry.

use std::{sync::Arc, time::Duration};

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use tokio::sync::{Mutex, RwLock};

use crate::domain::sessions::{
    errors::SessionNotFound,
    models::{SessionUuid, ShopperSession},
};

/// Shared handle to one session's state.
pub type SessionHandle = Arc<Mutex<ShopperSession>>;

/// How long a session may sit untouched before it expires.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Debug)]
struct Entry {
    handle: SessionHandle,
    touched: Timestamp,
}

/// Live shopper sessions.
///
/// Every lookup refreshes the session's last-touched time. A session left alone for longer than
/// the idle TTL is no longer found and is dropped by the next [`SessionRegistry::remove_idle`].
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<SessionUuid, Entry>>,
    idle_ttl: SignedDuration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose sessions expire after `idle_ttl` without use.
    #[must_use]
    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::default(),
            idle_ttl: SignedDuration::try_from(idle_ttl).unwrap_or(SignedDuration::MAX),
        }
    }

    /// Opens a new, empty session.
    pub async fn create(&self) -> SessionUuid {
        self.create_at(Timestamp::now()).await
    }

    pub(crate) async fn create_at(&self, now: Timestamp) -> SessionUuid {
        let uuid = SessionUuid::new();

        self.sessions.write().await.insert(
            uuid,
            Entry {
                handle: Arc::new(Mutex::new(ShopperSession::default())),
                touched: now,
            },
        );

        uuid
    }

    /// Looks up a live session and marks it as used.
    ///
    /// # Errors
    ///
    /// Returns [`SessionNotFound`] when the session was never opened, has ended or has been idle
    /// past the TTL.
    pub async fn get(&self, uuid: SessionUuid) -> Result<SessionHandle, SessionNotFound> {
        self.get_at(uuid, Timestamp::now()).await
    }

    pub(crate) async fn get_at(
        &self,
        uuid: SessionUuid,
        now: Timestamp,
    ) -> Result<SessionHandle, SessionNotFound> {
        let mut sessions = self.sessions.write().await;

        let entry = sessions
            .get_mut(&uuid)
            .filter(|entry| !self.is_idle(entry, now))
            .ok_or(SessionNotFound(uuid))?;

        entry.touched = entry.touched.max(now);

        Ok(entry.handle.clone())
    }

    /// Ends a session. Returns whether it existed.
    pub async fn remove(&self, uuid: SessionUuid) -> bool {
        self.sessions.write().await.remove(&uuid).is_some()
    }

    /// Drops every session idle past the TTL at `now` and returns their ids.
    pub async fn remove_idle(&self, now: Timestamp) -> Vec<SessionUuid> {
        let mut sessions = self.sessions.write().await;

        let expired: Vec<SessionUuid> = sessions
            .iter()
            .filter(|(_, entry)| self.is_idle(entry, now))
            .map(|(uuid, _)| *uuid)
            .collect();

        for uuid in &expired {
            sessions.remove(uuid);
        }

        expired
    }

    /// Number of sessions held, including idle ones not yet removed.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no sessions are held.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn is_idle(&self, entry: &Entry, now: Timestamp) -> bool {
        now.duration_since(entry.touched) > self.idle_ttl
    }
}
