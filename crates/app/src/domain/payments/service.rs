//! Payment provider.

use async_trait::async_trait;
use mockall::automock;
use posy::checkout::{PaymentLine, PaymentSession};

use crate::domain::{
    catalog::CatalogService,
    payments::{errors::PaymentsError, models::PricedLine},
};

#[automock]
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Creates a hosted payment session charging for `lines`.
    ///
    /// Fails with [`PaymentsError::UnknownProduct`] if any line is not in the catalog, in which
    /// case no session is created.
    async fn create_payment_session(
        &self,
        lines: Vec<PaymentLine>,
    ) -> Result<PaymentSession, PaymentsError>;
}

/// Resolves every line against the catalog, failing on the first unknown product.
pub(crate) async fn resolve_lines(
    catalog: &dyn CatalogService,
    lines: Vec<PaymentLine>,
) -> Result<Vec<PricedLine>, PaymentsError> {
    if lines.is_empty() {
        return Err(PaymentsError::NoLines);
    }

    let mut priced = Vec::with_capacity(lines.len());

    for line in lines {
        let product = catalog
            .resolve(line.product_id.clone())
            .await
            .map_err(|_source| PaymentsError::UnknownProduct(line.product_id))?;

        priced.push(PricedLine {
            product,
            quantity: line.quantity,
        });
    }

    Ok(priced)
}
