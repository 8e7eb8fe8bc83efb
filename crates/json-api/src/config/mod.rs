//! Server configuration module

use std::time::Duration;

use clap::Parser;

use posy_app::context::PaymentsBackend;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    payments::PaymentsConfig,
    server::ServerRuntimeConfig,
    sessions::SessionsConfig,
};

pub(crate) mod observability;
pub(crate) mod payments;
pub(crate) mod server;
pub(crate) mod sessions;

/// Posy JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "posy-json", about = "Posy JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Payment provider settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,

    /// Shopper session lifetime settings.
    #[command(flatten)]
    pub sessions: SessionsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Payment provider the app context should use.
    #[must_use]
    pub fn payments_backend(&self) -> PaymentsBackend {
        self.payments.backend()
    }

    /// How long an untouched shopper session lives.
    #[must_use]
    pub fn session_idle_ttl(&self) -> Duration {
        self.sessions.idle_ttl()
    }

    /// How often expired shopper sessions are swept.
    #[must_use]
    pub fn session_sweep_interval(&self) -> Duration {
        self.sessions.sweep_interval()
    }
}
