//! Notification sender.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::notifications::{
    errors::NotificationError,
    models::{ContactMessage, Delivery, OrderConfirmation},
};

#[automock]
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Sends the order confirmation to the shopper.
    async fn send_order_confirmation(
        &self,
        confirmation: OrderConfirmation,
    ) -> Result<Delivery, NotificationError>;

    /// Forwards a contact form message to the shop.
    async fn send_contact_message(
        &self,
        message: ContactMessage,
    ) -> Result<Delivery, NotificationError>;
}
