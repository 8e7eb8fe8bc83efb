//! Sessions
//!
//! Each shopper owns one session holding their cart, bouquet builder and checkout. Sessions share
//! nothing; all operations on one session are serialised by its lock. Sessions left idle past the
//! registry's TTL expire and are swept by the [`SessionReaper`].

pub mod errors;
pub mod models;
pub mod reaper;
pub mod registry;
pub mod service;

pub use errors::{SessionNotFound, SessionsServiceError};
pub use reaper::SessionReaper;
pub use registry::SessionRegistry;
pub use service::*;
