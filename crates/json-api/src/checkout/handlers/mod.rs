//! Checkout Handlers

pub(crate) mod begin;
pub(crate) mod complete;
pub(crate) mod details;
pub(crate) mod get;
