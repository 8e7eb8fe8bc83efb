//! Sessions Config

use std::time::Duration;

use clap::Args;

/// Shopper session lifetime settings.
#[derive(Debug, Args)]
pub struct SessionsConfig {
    /// Seconds a session may sit untouched before it expires
    #[arg(
        long,
        env = "SESSION_IDLE_TTL_SECS",
        default_value_t = 7_200_u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub session_idle_ttl_secs: u64,

    /// Seconds between sweeps for expired sessions
    #[arg(
        long,
        env = "SESSION_SWEEP_INTERVAL_SECS",
        default_value_t = 60_u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub session_sweep_interval_secs: u64,
}

impl SessionsConfig {
    /// How long an untouched session lives.
    #[must_use]
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// How often idle sessions are swept.
    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_interval_secs)
    }
}
