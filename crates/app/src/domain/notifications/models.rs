//! Notification Models

use jiff::civil::{Date, Time};
use posy::{money::MinorUnits, orders::Order};
use serde::{Deserialize, Serialize};

/// Outcome reported by a notification sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub delivered: bool,
}

impl Delivery {
    pub const DELIVERED: Self = Self { delivered: true };
    pub const UNDELIVERED: Self = Self { delivered: false };
}

/// The shop's contact details, quoted in outgoing mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreDetails {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl StoreDetails {
    pub const FLORIST: Self = Self {
        name: "Lily's Flowers",
        address: "123 Flower Street, Garden City",
        phone: "(555) 123-4567",
        email: "hello@lilysflowers.com",
    };
}

impl Default for StoreDetails {
    fn default() -> Self {
        Self::FLORIST
    }
}

/// One line of an order confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationLine {
    pub name: String,
    pub unit_price: MinorUnits,
    pub quantity: u32,
}

/// Everything an order confirmation email needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub pickup_date: Date,
    pub pickup_time: Time,
    pub items: Vec<ConfirmationLine>,
    pub total: MinorUnits,
}

impl From<&Order> for OrderConfirmation {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.to_string(),
            customer_name: order.pickup.details.name.clone(),
            customer_email: order.pickup.details.email.clone(),
            pickup_date: order.pickup.date,
            pickup_time: order.pickup.time,
            items: order
                .items
                .iter()
                .map(|line| ConfirmationLine {
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                })
                .collect(),
            total: order.total,
        }
    }
}

/// A message sent through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// A rendered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}
