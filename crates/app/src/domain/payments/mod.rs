//! Payments
//!
//! The payment provider collaborator. A provider turns `{productId, quantity}` lines into a
//! hosted payment session and hands back the opaque token the shopper's browser uses to render
//! the payment form. Card data never passes through this service.

pub mod errors;
pub mod hosted;
pub mod models;
pub mod sandbox;
pub mod secret;
pub mod service;

pub use errors::PaymentsError;
pub use hosted::{HostedPaymentConfig, HostedPaymentProvider};
pub use sandbox::SandboxPaymentProvider;
pub use secret::PaymentsSecretKey;
pub use service::*;
