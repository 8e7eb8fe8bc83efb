//! Send Contact Message Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use posy_app::domain::notifications::models::{ContactMessage, Delivery};

use crate::{contact::errors::into_status_error, extensions::*};

/// Contact Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ContactRequest {
    /// Sender's name
    pub name: String,

    /// Reply address
    pub email: String,

    /// Optional phone number
    pub phone: Option<String>,

    /// Message subject
    pub subject: String,

    /// Message body
    pub message: String,
}

impl From<ContactRequest> for ContactMessage {
    fn from(request: ContactRequest) -> Self {
        ContactMessage {
            name: request.name,
            email: request.email,
            phone: request.phone.filter(|phone| !phone.trim().is_empty()),
            subject: request.subject,
            message: request.message,
        }
    }
}

/// Contact Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ContactResponse {
    /// Whether the message reached the shop
    pub delivered: bool,
}

impl From<Delivery> for ContactResponse {
    fn from(delivery: Delivery) -> Self {
        Self {
            delivered: delivery.delivered,
        }
    }
}

/// Send Contact Message Handler
#[endpoint(
    tags("contact"),
    summary = "Send Contact Message",
    responses(
        (status_code = StatusCode::ACCEPTED, description = "Message accepted"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Missing fields or invalid email"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Message could not be forwarded"),
    ),
)]
#[tracing::instrument(
    name = "contact.create",
    skip(json, depot, res),
    fields(subject = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ContactRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ContactResponse>, StatusError> {
    let state = depot.state()?;
    let message = ContactMessage::from(json.into_inner());

    tracing::Span::current().record("subject", tracing::field::display(&message.subject));

    let delivery = state
        .app
        .contact
        .send_message(message)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::ACCEPTED);

    Ok(Json(delivery.into()))
}
