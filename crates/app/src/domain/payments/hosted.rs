//! Hosted checkout client.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use posy::checkout::{PaymentLine, PaymentSession};
use reqwest::Client;
use tracing::debug;

use crate::domain::{
    catalog::CatalogService,
    payments::{
        errors::PaymentsError,
        models::{CreateSessionRequest, CreateSessionResponse},
        secret::PaymentsSecretKey,
        service::{PaymentProvider, resolve_lines},
    },
};

/// Configuration for connecting to the hosted payment provider.
#[derive(Debug, Clone)]
pub struct HostedPaymentConfig {
    /// Provider API base address, e.g. `"https://api.stripe.com"`.
    pub api_base: String,

    /// Secret API key.
    pub secret_key: PaymentsSecretKey,

    /// Where the provider sends the shopper after paying. Without one the embedded form never
    /// redirects and completion is reported by the client.
    pub return_url: Option<String>,

    /// Upper bound on one provider request, connect to last byte.
    pub timeout: Duration,
}

/// HTTP client creating hosted checkout sessions.
#[derive(Clone)]
pub struct HostedPaymentProvider {
    config: HostedPaymentConfig,
    catalog: Arc<dyn CatalogService>,
    http: Client,
}

impl HostedPaymentProvider {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsError::Http`] if the HTTP client cannot be built.
    pub fn new(
        config: HostedPaymentConfig,
        catalog: Arc<dyn CatalogService>,
    ) -> Result<Self, PaymentsError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            catalog,
            http,
        })
    }
}

#[async_trait]
impl PaymentProvider for HostedPaymentProvider {
    async fn create_payment_session(
        &self,
        lines: Vec<PaymentLine>,
    ) -> Result<PaymentSession, PaymentsError> {
        let priced = resolve_lines(self.catalog.as_ref(), lines).await?;

        let url = format!(
            "{}/v1/checkout/sessions",
            self.config.api_base.trim_end_matches('/')
        );

        let fields = CreateSessionRequest::embedded(&priced, self.config.return_url.as_deref())
            .form_fields();

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.config.secret_key.expose())
            .form(&fields)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentsError::UnexpectedResponse(format!(
                "session request failed with status {status}: {text}"
            )));
        }

        let parsed: CreateSessionResponse = response.json().await?;

        debug!(provider_session = %parsed.id, lines = priced.len(), "hosted payment session created");

        let token = parsed
            .client_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(PaymentsError::MissingClientSecret)?;

        Ok(PaymentSession { token })
    }
}
