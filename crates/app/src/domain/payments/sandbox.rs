//! Sandbox payment provider.

use std::sync::Arc;

use async_trait::async_trait;
use posy::checkout::{PaymentLine, PaymentSession};
use rand::{RngCore, rngs::OsRng};
use tracing::info;

use crate::domain::{
    catalog::CatalogService,
    payments::{
        errors::PaymentsError,
        service::{PaymentProvider, resolve_lines},
    },
};

/// Prefix of sandbox session tokens.
pub const SANDBOX_TOKEN_PREFIX: &str = "cs_test_";

const TOKEN_BYTES: usize = 16;

/// Payment provider that prices lines against the catalog and issues local test tokens.
///
/// Used when no provider secret key is configured.
#[derive(Clone)]
pub struct SandboxPaymentProvider {
    catalog: Arc<dyn CatalogService>,
}

impl SandboxPaymentProvider {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl PaymentProvider for SandboxPaymentProvider {
    async fn create_payment_session(
        &self,
        lines: Vec<PaymentLine>,
    ) -> Result<PaymentSession, PaymentsError> {
        let priced = resolve_lines(self.catalog.as_ref(), lines).await?;

        let total = priced
            .iter()
            .map(|line| line.total())
            .fold(0, u64::saturating_add);

        let token = sandbox_token();

        info!(lines = priced.len(), total, "sandbox payment session created");

        Ok(PaymentSession { token })
    }
}

fn sandbox_token() -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut bytes = [0_u8; TOKEN_BYTES];

    OsRng.fill_bytes(&mut bytes);

    let mut token = String::with_capacity(SANDBOX_TOKEN_PREFIX.len() + TOKEN_BYTES * 2);

    token.push_str(SANDBOX_TOKEN_PREFIX);

    for byte in bytes {
        for nibble in [byte >> 4, byte & 0x0f] {
            if let Some(digit) = HEX.get(usize::from(nibble)) {
                token.push(char::from(*digit));
            }
        }
    }

    token
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::catalog::{CatalogServiceError, MockCatalogService, StaticCatalogService};

    use super::*;

    fn line(product_id: &str, quantity: u32) -> PaymentLine {
        PaymentLine {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn sessions_get_fresh_test_tokens() -> TestResult {
        let provider = SandboxPaymentProvider::new(Arc::new(StaticCatalogService::default()));

        let first = provider.create_payment_session(vec![line("rose-red", 2)]).await?;
        let second = provider.create_payment_session(vec![line("rose-red", 2)]).await?;

        assert!(first.token.starts_with(SANDBOX_TOKEN_PREFIX));
        assert_eq!(first.token.len(), SANDBOX_TOKEN_PREFIX.len() + 32);
        assert_ne!(first.token, second.token);

        Ok(())
    }

    #[tokio::test]
    async fn any_unknown_product_fails_the_whole_session() {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_resolve()
            .once()
            .withf(|id| id == "ghost-orchid")
            .return_once(|id| Err(CatalogServiceError::ProductNotFound(id)));

        let provider = SandboxPaymentProvider::new(Arc::new(catalog));

        let result = provider
            .create_payment_session(vec![line("ghost-orchid", 1), line("rose-red", 1)])
            .await;

        assert!(
            matches!(&result, Err(PaymentsError::UnknownProduct(id)) if id == "ghost-orchid"),
            "expected UnknownProduct, got {result:?}"
        );
    }
}
