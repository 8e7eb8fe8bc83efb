//! Logging notification sender.

use async_trait::async_trait;
use tracing::info;

use crate::domain::notifications::{
    errors::NotificationError,
    models::{ContactMessage, Delivery, Email, OrderConfirmation, StoreDetails},
    render,
    service::NotificationSender,
};

/// Sender that renders each email and writes it to the log instead of a mail transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSender {
    store: StoreDetails,
}

impl LogNotificationSender {
    #[must_use]
    pub const fn new(store: StoreDetails) -> Self {
        Self { store }
    }

    fn emit(kind: &'static str, email: &Email) {
        info!(
            target: "posy::notifications",
            kind,
            to = %email.to,
            reply_to = email.reply_to.as_deref(),
            subject = %email.subject,
            body = %email.body,
            "email sent"
        );
    }
}

#[async_trait]
impl NotificationSender for LogNotificationSender {
    async fn send_order_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<Delivery, NotificationError> {
        let email = render::order_confirmation(&confirmation, &self.store)?;

        Self::emit("order_confirmation", &email);

        Ok(Delivery::DELIVERED)
    }

    async fn send_contact_message(
        &self,
        message: ContactMessage,
    ) -> Result<Delivery, NotificationError> {
        let email = render::contact_message(&message, &self.store)?;

        Self::emit("contact_message", &email);

        Ok(Delivery::DELIVERED)
    }
}
