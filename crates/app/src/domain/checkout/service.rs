//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, Zoned};
use mockall::automock;
use posy::{
    checkout::{CheckoutError, PaymentSession},
    orders::OrderNumber,
    pickup::PickupDetails,
};
use tracing::{debug, info, warn};

use crate::domain::{
    checkout::{
        errors::{CHECKOUT_UNAVAILABLE, CheckoutServiceError, PAYMENT_UNAVAILABLE},
        models::{CheckoutView, CompletedCheckout},
    },
    notifications::{NotificationSender, models::OrderConfirmation},
    payments::{PaymentProvider, PaymentsError},
    pickup::PickupStore,
    sessions::{
        SessionRegistry,
        models::{SessionUuid, ShopperSession},
    },
};

/// Checkout orchestrator over the session registry and the external collaborators.
#[derive(Clone)]
pub struct SessionCheckoutService {
    sessions: Arc<SessionRegistry>,
    payments: Arc<dyn PaymentProvider>,
    notifications: Arc<dyn NotificationSender>,
    pickup: Arc<dyn PickupStore>,
}

impl SessionCheckoutService {
    #[must_use]
    pub fn new(
        sessions: Arc<SessionRegistry>,
        payments: Arc<dyn PaymentProvider>,
        notifications: Arc<dyn NotificationSender>,
        pickup: Arc<dyn PickupStore>,
    ) -> Self {
        Self {
            sessions,
            payments,
            notifications,
            pickup,
        }
    }

    async fn view(
        &self,
        session: SessionUuid,
        shopper: &ShopperSession,
    ) -> Result<CheckoutView, CheckoutServiceError> {
        let details = self.pickup.read(session).await?;

        Ok(CheckoutView {
            stage: shopper.checkout.stage(),
            details,
            payment_session: shopper.checkout.payment_session().cloned(),
            last_error: shopper.checkout.last_error().map(ToString::to_string),
            order: shopper.checkout.order().cloned(),
            confirmation_sent: shopper.checkout.confirmation_sent(),
            item_count: shopper.cart.item_count(),
            subtotal: shopper.cart.total(),
        })
    }

    async fn send_confirmation(&self, confirmation: OrderConfirmation) -> bool {
        let order_number = confirmation.order_number.clone();

        match self.notifications.send_order_confirmation(confirmation).await {
            Ok(delivery) if delivery.delivered => true,
            Ok(_) => {
                warn!(%order_number, "order confirmation was not delivered");
                false
            }
            Err(error) => {
                warn!(%order_number, %error, "failed to send order confirmation");
                false
            }
        }
    }
}

#[async_trait]
impl CheckoutService for SessionCheckoutService {
    async fn get_checkout(&self, session: SessionUuid) -> Result<CheckoutView, CheckoutServiceError> {
        let handle = self.sessions.get(session).await?;
        let shopper = handle.lock().await;

        self.view(session, &shopper).await
    }

    async fn begin(&self, session: SessionUuid) -> Result<CheckoutView, CheckoutServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut guard = handle.lock().await;
        let shopper = &mut *guard;

        shopper.checkout.begin(&shopper.cart)?;

        debug!(%session, "checkout started");

        self.view(session, shopper).await
    }

    async fn save_details(
        &self,
        session: SessionUuid,
        details: PickupDetails,
    ) -> Result<CheckoutView, CheckoutServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut shopper = handle.lock().await;

        if let Some(attempt) = shopper.checkout.accept_details()? {
            info!(%session, %attempt, "new pickup details abandoned the pending payment attempt");
        }

        self.pickup.write(session, details).await?;

        self.view(session, &shopper).await
    }

    async fn start_payment(&self, session: SessionUuid) -> Result<PaymentSession, CheckoutServiceError> {
        let handle = self.sessions.get(session).await?;

        let request = {
            let mut guard = handle.lock().await;
            let shopper = &mut *guard;

            let details = self.pickup.read(session).await?;
            let today = Zoned::now().date();

            shopper
                .checkout
                .start_payment(&shopper.cart, details.as_ref(), today)?
        };

        info!(
            %session,
            attempt = %request.attempt,
            lines = request.lines.len(),
            total = request.total,
            "creating payment session"
        );

        // The session lock is released while the provider works so the shopper can still cancel.
        let result = self
            .payments
            .create_payment_session(request.lines.into_vec())
            .await;

        let mut shopper = handle.lock().await;

        match result {
            Ok(payment) => {
                shopper
                    .checkout
                    .attach_session(request.attempt, payment.clone())?;

                info!(%session, attempt = %request.attempt, "payment session created");

                Ok(payment)
            }
            Err(error) => {
                let reason = match &error {
                    PaymentsError::UnknownProduct(_) => CHECKOUT_UNAVAILABLE.to_string(),
                    _ => PAYMENT_UNAVAILABLE.to_string(),
                };

                warn!(%session, attempt = %request.attempt, %error, "payment session failed");

                if !shopper.checkout.payment_failed(request.attempt, reason) {
                    return Err(CheckoutError::StaleAttempt(request.attempt).into());
                }

                Err(error.into())
            }
        }
    }

    async fn cancel_payment(&self, session: SessionUuid) -> Result<CheckoutView, CheckoutServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut shopper = handle.lock().await;

        let attempt = shopper.checkout.cancel_payment()?;

        info!(%session, %attempt, "payment attempt cancelled");

        self.view(session, &shopper).await
    }

    async fn complete(
        &self,
        session: SessionUuid,
        token: String,
    ) -> Result<CompletedCheckout, CheckoutServiceError> {
        let handle = self.sessions.get(session).await?;
        let mut guard = handle.lock().await;
        let shopper = &mut *guard;

        let order = shopper
            .checkout
            .complete(&token, OrderNumber::generate(), Timestamp::now())?;

        shopper.cart.clear();

        if let Err(error) = self.pickup.delete(session).await {
            warn!(%session, %error, "failed to discard pickup details");
        }

        info!(
            %session,
            order_number = %order.order_number,
            total = order.total,
            "order completed"
        );

        let confirmation_sent = self.send_confirmation(OrderConfirmation::from(&order)).await;

        shopper.checkout.record_confirmation(confirmation_sent);

        Ok(CompletedCheckout {
            order,
            confirmation_sent,
        })
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Retrieves the session's checkout stage, details, payment session and order.
    async fn get_checkout(&self, session: SessionUuid) -> Result<CheckoutView, CheckoutServiceError>;

    /// Starts checkout for a non-empty cart.
    async fn begin(&self, session: SessionUuid) -> Result<CheckoutView, CheckoutServiceError>;

    /// Stores pickup details, superseding earlier details and any pending payment attempt.
    async fn save_details(
        &self,
        session: SessionUuid,
        details: PickupDetails,
    ) -> Result<CheckoutView, CheckoutServiceError>;

    /// Validates the stored details and asks the payment provider for a session.
    async fn start_payment(&self, session: SessionUuid) -> Result<PaymentSession, CheckoutServiceError>;

    /// Abandons the pending payment attempt, keeping the cart.
    async fn cancel_payment(&self, session: SessionUuid) -> Result<CheckoutView, CheckoutServiceError>;

    /// Applies the payment provider's completion signal for `token`.
    async fn complete(
        &self,
        session: SessionUuid,
        token: String,
    ) -> Result<CompletedCheckout, CheckoutServiceError>;
}
