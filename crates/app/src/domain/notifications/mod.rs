//! Notifications
//!
//! The notification sender collaborator: order confirmations to shoppers and contact form
//! messages to the shop. Delivery is best-effort; callers log failures and carry on.

pub mod errors;
pub mod log;
pub mod models;
pub mod render;
pub mod service;

pub use errors::NotificationError;
pub use log::LogNotificationSender;
pub use service::*;
