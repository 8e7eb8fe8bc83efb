//! Bouquet Builder

mod errors;
pub(crate) mod flowers;
mod handlers;

pub(crate) use handlers::*;
