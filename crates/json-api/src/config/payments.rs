//! Payments Config

use std::time::Duration;

use clap::Args;

use posy_app::{
    context::PaymentsBackend,
    domain::payments::{HostedPaymentConfig, PaymentsSecretKey},
};

/// Payment provider settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Hosted payment provider API base address
    #[arg(long, env = "PAYMENTS_API_BASE", default_value = "https://api.stripe.com")]
    pub payments_api_base: String,

    /// Hosted payment provider secret key; sandbox payments are used when unset
    #[arg(long, env = "PAYMENTS_SECRET_KEY", hide_env_values = true)]
    pub payments_secret_key: Option<String>,

    /// Where the provider sends shoppers after paying
    #[arg(long, env = "PAYMENTS_RETURN_URL")]
    pub payments_return_url: Option<String>,

    /// Seconds before a hosted payment request is abandoned
    #[arg(
        long,
        env = "PAYMENTS_TIMEOUT_SECS",
        default_value_t = 10_u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub payments_timeout_secs: u64,
}

impl PaymentsConfig {
    /// Hosted payments when a secret key is configured, otherwise the sandbox.
    #[must_use]
    pub fn backend(&self) -> PaymentsBackend {
        match self
            .payments_secret_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            Some(key) => PaymentsBackend::Hosted(HostedPaymentConfig {
                api_base: self.payments_api_base.trim_end_matches('/').to_string(),
                secret_key: PaymentsSecretKey::new(key),
                return_url: self.payments_return_url.clone(),
                timeout: Duration::from_secs(self.payments_timeout_secs),
            }),
            None => PaymentsBackend::Sandbox,
        }
    }
}
