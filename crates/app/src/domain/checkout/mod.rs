//! Checkout
//!
//! Orchestrates a session's checkout: pickup details capture, payment session creation through
//! the payment provider, the provider's completion signal and the best-effort order
//! confirmation.

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CheckoutServiceError;
pub use service::*;
