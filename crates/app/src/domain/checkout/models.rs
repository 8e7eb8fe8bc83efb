//! Checkout Models

use posy::{
    checkout::{CheckoutStage, PaymentSession},
    money::MinorUnits,
    orders::Order,
    pickup::PickupDetails,
};

/// What the shopper sees of their checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub stage: CheckoutStage,
    pub details: Option<PickupDetails>,
    pub payment_session: Option<PaymentSession>,
    pub last_error: Option<String>,
    pub order: Option<Order>,
    pub confirmation_sent: bool,
    pub item_count: u64,
    pub subtotal: MinorUnits,
}

/// A checkout the payment provider confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCheckout {
    pub order: Order,
    pub confirmation_sent: bool,
}
