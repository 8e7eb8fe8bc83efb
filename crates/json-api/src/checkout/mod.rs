//! Checkout

mod errors;
mod handlers;
mod models;
pub(crate) mod payment;

pub(crate) use handlers::*;
