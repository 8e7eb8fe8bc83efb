//! Posy
//!
//! Posy is the storefront domain for a pickup-only florist: the flower and bouquet catalog, the
//! shopper's cart, the custom bouquet builder and the checkout state machine that carries a cart
//! through pickup details, a hosted payment session and order confirmation.
//!
//! Everything in this crate is synchronous and free of I/O. Payment providers, notification
//! delivery and persistence are collaborators supplied by the application layer.

pub mod builder;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod money;
pub mod orders;
pub mod pickup;
pub mod prelude;
