//! Idle session reaper.

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::info;

use crate::domain::sessions::SessionsService;

/// How often the reaper looks for idle sessions unless told otherwise.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Background task that periodically ends idle sessions.
pub struct SessionReaper {
    sessions: Arc<dyn SessionsService>,
    interval: Duration,
}

impl SessionReaper {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionsService>) -> Self {
        Self {
            sessions,
            interval: DEFAULT_SWEEP_INTERVAL,
        }
    }

    /// Sweep every `interval` instead of the default.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Runs one sweep and returns how many sessions expired.
    pub async fn run_once(&self) -> usize {
        let expired = self.sessions.expire_idle(Timestamp::now()).await;

        if expired > 0 {
            info!(expired, "expired idle shopper sessions");
        }

        expired
    }

    /// Spawns the reaper onto the current runtime. Abort the handle to stop it.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.interval);

            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                self.run_once().await;
            }
        })
    }
}
