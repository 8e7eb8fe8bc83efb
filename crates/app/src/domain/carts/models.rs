//! Cart Models

use posy::{
    cart::{Cart, CartLineItem},
    money::MinorUnits,
};
use serde::Deserialize;

/// Cart contents with derived totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub item_count: u64,
    pub subtotal: MinorUnits,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            subtotal: cart.total(),
        }
    }
}

/// Request to add a catalog product to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddCartItem {
    pub product_id: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}
