//! Checkout request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use posy::{
    checkout::PaymentSession,
    money::format_price,
    orders::Order,
    pickup::PickupDetails,
};
use posy_app::domain::checkout::models::{CheckoutView, CompletedCheckout};

use crate::carts::get::CartItemResponse;

/// Pickup details as the shopper typed them
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct PickupDetailsBody {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Pickup date, `YYYY-MM-DD`
    pub pickup_date: String,

    /// Pickup time, `HH:MM`
    pub pickup_time: String,

    /// Notes for the florist
    pub special_instructions: Option<String>,
}

impl From<PickupDetailsBody> for PickupDetails {
    fn from(body: PickupDetailsBody) -> Self {
        PickupDetails {
            name: body.name,
            email: body.email,
            phone: body.phone,
            pickup_date: body.pickup_date,
            pickup_time: body.pickup_time,
            special_instructions: body
                .special_instructions
                .filter(|notes| !notes.trim().is_empty()),
        }
    }
}

impl From<PickupDetails> for PickupDetailsBody {
    fn from(details: PickupDetails) -> Self {
        Self {
            name: details.name,
            email: details.email,
            phone: details.phone,
            pickup_date: details.pickup_date,
            pickup_time: details.pickup_time,
            special_instructions: details.special_instructions,
        }
    }
}

/// Payment Session Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentSessionResponse {
    /// Client token the browser hands to the payment form
    pub token: String,
}

impl From<PaymentSession> for PaymentSessionResponse {
    fn from(session: PaymentSession) -> Self {
        Self {
            token: session.token,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Order reference, `LF-…`
    pub order_number: String,

    /// Who collects the order and when
    pub pickup: PickupDetailsBody,

    /// Lines as they were when payment started
    pub items: Vec<CartItemResponse>,

    /// Units across all lines
    pub item_count: u64,

    /// Amount charged in cents
    pub total: u64,

    /// Formatted amount charged
    pub total_display: String,

    /// When the payment was confirmed
    pub placed_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            item_count: order.item_count(),
            order_number: order.order_number.to_string(),
            pickup: order.pickup.details.into(),
            items: order.items.into_iter().map(CartItemResponse::from).collect(),
            total_display: format_price(order.total),
            total: order.total,
            placed_at: order.placed_at.to_string(),
        }
    }
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// `cart`, `details`, `payment_pending` or `completed`
    pub stage: String,

    /// Saved pickup details
    pub details: Option<PickupDetailsBody>,

    /// Payment session awaiting the shopper
    pub payment_session: Option<PaymentSessionResponse>,

    /// Why the last payment attempt failed
    pub last_error: Option<String>,

    /// The confirmed order once paid
    pub order: Option<OrderResponse>,

    /// Whether the order confirmation was delivered
    pub confirmation_sent: bool,

    /// Units in the cart
    pub item_count: u64,

    /// Cart subtotal in cents
    pub subtotal: u64,

    /// Formatted cart subtotal
    pub subtotal_display: String,
}

impl From<CheckoutView> for CheckoutResponse {
    fn from(view: CheckoutView) -> Self {
        Self {
            stage: view.stage.to_string(),
            details: view.details.map(Into::into),
            payment_session: view.payment_session.map(Into::into),
            last_error: view.last_error,
            order: view.order.map(Into::into),
            confirmation_sent: view.confirmation_sent,
            item_count: view.item_count,
            subtotal_display: format_price(view.subtotal),
            subtotal: view.subtotal,
        }
    }
}

/// Completed Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompletedCheckoutResponse {
    /// The confirmed order
    pub order: OrderResponse,

    /// Whether the order confirmation was delivered
    pub confirmation_sent: bool,
}

impl From<CompletedCheckout> for CompletedCheckoutResponse {
    fn from(completed: CompletedCheckout) -> Self {
        Self {
            order: completed.order.into(),
            confirmation_sent: completed.confirmation_sent,
        }
    }
}
