//! Checkout Payment

mod handlers;

pub(crate) use handlers::*;
