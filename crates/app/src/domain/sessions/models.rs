//! Session Models

use posy::{builder::BouquetBuilder, cart::Cart, checkout::Checkout};

use crate::uuids::TypedUuid;

/// Shopper session id.
pub type SessionUuid = TypedUuid<ShopperSession>;

/// Everything one shopper is working on.
#[derive(Debug, Default)]
pub struct ShopperSession {
    pub cart: Cart,
    pub builder: BouquetBuilder,
    pub checkout: Checkout,
}
