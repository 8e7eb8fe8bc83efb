//! Posy application services.
//!
//! Async services over the storefront domain: per-shopper sessions, cart and builder editing, the
//! checkout orchestrator and the external collaborators it talks to (catalog lookup, payment
//! provider, notification sender and the pickup details side channel).

pub mod context;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
