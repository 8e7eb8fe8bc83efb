//! App Context

use std::{sync::Arc, time::Duration};

use tracing::info;

use crate::domain::{
    builder::{BuilderService, SessionBuilderService},
    carts::{CartsService, SessionCartsService},
    catalog::{CatalogService, StaticCatalogService},
    checkout::{CheckoutService, SessionCheckoutService},
    contact::{ContactService, NotifyingContactService},
    notifications::{LogNotificationSender, NotificationSender},
    payments::{
        HostedPaymentConfig, HostedPaymentProvider, PaymentProvider, PaymentsError,
        SandboxPaymentProvider,
    },
    pickup::{InMemoryPickupStore, PickupStore},
    sessions::{InMemorySessionsService, SessionRegistry, SessionsService},
};

/// Which payment provider checkouts use.
#[derive(Debug, Clone)]
pub enum PaymentsBackend {
    /// The hosted checkout provider.
    Hosted(HostedPaymentConfig),

    /// Local test tokens; nothing is charged.
    Sandbox,
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub sessions: Arc<dyn SessionsService>,
    pub carts: Arc<dyn CartsService>,
    pub builder: Arc<dyn BuilderService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub contact: Arc<dyn ContactService>,
}

impl AppContext {
    /// Build the application context over the built-in catalog and in-process session state.
    ///
    /// Sessions untouched for `session_idle_ttl` expire.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsError`] if the hosted provider's HTTP client cannot be built.
    pub fn new(payments: PaymentsBackend, session_idle_ttl: Duration) -> Result<Self, PaymentsError> {
        let catalog: Arc<dyn CatalogService> = Arc::new(StaticCatalogService::default());
        let registry = Arc::new(SessionRegistry::with_idle_ttl(session_idle_ttl));
        let pickup: Arc<dyn PickupStore> = Arc::new(InMemoryPickupStore::new());
        let notifications: Arc<dyn NotificationSender> = Arc::new(LogNotificationSender::default());

        let payments: Arc<dyn PaymentProvider> = match payments {
            PaymentsBackend::Hosted(config) => {
                info!(api_base = %config.api_base, timeout = ?config.timeout, "using hosted payment provider");
                Arc::new(HostedPaymentProvider::new(config, catalog.clone())?)
            }
            PaymentsBackend::Sandbox => {
                info!("no payment secret key configured; using sandbox payment provider");
                Arc::new(SandboxPaymentProvider::new(catalog.clone()))
            }
        };

        Ok(Self {
            sessions: Arc::new(InMemorySessionsService::new(registry.clone(), pickup.clone())),
            carts: Arc::new(SessionCartsService::new(registry.clone(), catalog.clone())),
            builder: Arc::new(SessionBuilderService::new(registry.clone(), catalog.clone())),
            checkout: Arc::new(SessionCheckoutService::new(
                registry,
                payments,
                notifications.clone(),
                pickup,
            )),
            contact: Arc::new(NotifyingContactService::new(notifications)),
            catalog,
        })
    }
}
