//! Pickup Details Store
//!
//! A per-session key-value side channel holding the shopper's pickup details as JSON text while a
//! checkout is under way. Writes are last-writer-wins and nothing leaves the process.

pub mod errors;
pub mod service;

pub use errors::PickupStoreError;
pub use service::*;
