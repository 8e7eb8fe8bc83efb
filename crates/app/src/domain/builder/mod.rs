//! Bouquet Builder

pub mod errors;
pub mod models;
pub mod service;

pub use errors::BuilderServiceError;
pub use service::*;
