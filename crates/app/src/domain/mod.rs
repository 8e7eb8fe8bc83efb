//! Storefront domain services.

pub mod builder;
pub mod carts;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod notifications;
pub mod payments;
pub mod pickup;
pub mod sessions;
