//! Notification errors.

use std::fmt;

use thiserror::Error;

/// Notification sender error variants.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The message body could not be rendered.
    #[error("failed to render notification")]
    Render(#[from] fmt::Error),

    /// The message could not be handed to the transport.
    #[error("notification transport failed: {0}")]
    Transport(String),
}
