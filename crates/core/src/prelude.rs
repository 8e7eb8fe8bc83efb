//! Posy prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    builder::{BouquetBuilder, BuilderError, Selection},
    cart::{Cart, CartError, CartLineItem, ItemKind, LineChange, NewCartItem, Stem},
    catalog::{Bouquet, Catalog, CatalogError, Category, Flower, Product, ProductKind},
    checkout::{
        AttemptId, Checkout, CheckoutError, CheckoutStage, PaymentLine, PaymentLines,
        PaymentRequest, PaymentSession, payment_lines,
    },
    money::{MinorUnits, format_price},
    orders::{Order, OrderNumber},
    pickup::{ConfirmedPickup, MissingFields, PickupDetails, RequiredField, ValidationError},
};
