//! Contact service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use smallvec::SmallVec;
use tracing::warn;

use crate::domain::{
    contact::errors::ContactServiceError,
    notifications::{
        NotificationSender,
        models::{ContactMessage, Delivery},
    },
};

/// Contact service forwarding messages through the notification sender.
#[derive(Clone)]
pub struct NotifyingContactService {
    notifications: Arc<dyn NotificationSender>,
}

impl NotifyingContactService {
    #[must_use]
    pub fn new(notifications: Arc<dyn NotificationSender>) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl ContactService for NotifyingContactService {
    async fn send_message(&self, message: ContactMessage) -> Result<Delivery, ContactServiceError> {
        validate(&message)?;

        let delivery = self.notifications.send_contact_message(message).await?;

        if !delivery.delivered {
            warn!("contact message was not delivered");
        }

        Ok(delivery)
    }
}

#[automock]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validates and forwards a contact form message.
    async fn send_message(&self, message: ContactMessage) -> Result<Delivery, ContactServiceError>;
}

fn validate(message: &ContactMessage) -> Result<(), ContactServiceError> {
    let missing: SmallVec<[&'static str; 4]> = [
        ("name", &message.name),
        ("email", &message.email),
        ("subject", &message.subject),
        ("message", &message.message),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(ContactServiceError::MissingFields(missing));
    }

    if !message.email.contains('@') {
        return Err(ContactServiceError::InvalidEmail(message.email.clone()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::MockNotificationSender;

    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: None,
            subject: "Opening hours".to_string(),
            message: "Are you open on Sundays?".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_messages_are_forwarded() -> TestResult {
        let mut notifications = MockNotificationSender::new();

        notifications
            .expect_send_contact_message()
            .once()
            .withf(|message| message.subject == "Opening hours")
            .return_once(|_| Ok(Delivery::DELIVERED));

        let service = NotifyingContactService::new(Arc::new(notifications));

        assert_eq!(service.send_message(message()).await?, Delivery::DELIVERED);

        Ok(())
    }

    #[tokio::test]
    async fn blank_fields_are_reported_without_sending() {
        let mut notifications = MockNotificationSender::new();

        notifications.expect_send_contact_message().never();

        let service = NotifyingContactService::new(Arc::new(notifications));

        let result = service
            .send_message(ContactMessage {
                subject: String::new(),
                message: " ".to_string(),
                ..message()
            })
            .await;

        assert!(
            matches!(&result, Err(ContactServiceError::MissingFields(fields)) if fields.as_slice() == ["subject", "message"]),
            "expected subject and message to be missing, got {result:?}"
        );
    }

    #[tokio::test]
    async fn reply_address_must_look_like_email() {
        let mut notifications = MockNotificationSender::new();

        notifications.expect_send_contact_message().never();

        let service = NotifyingContactService::new(Arc::new(notifications));

        let result = service
            .send_message(ContactMessage {
                email: "grace".to_string(),
                ..message()
            })
            .await;

        assert!(matches!(result, Err(ContactServiceError::InvalidEmail(_))));
    }
}
