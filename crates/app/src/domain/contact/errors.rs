//! Contact service errors.

use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::notifications::NotificationError;

/// Contact service error variants.
#[derive(Debug, Error)]
pub enum ContactServiceError {
    /// Required fields were left blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(SmallVec<[&'static str; 4]>),

    /// The reply address is not plausible.
    #[error("email address {0:?} is invalid")]
    InvalidEmail(String),

    /// The message could not be sent.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
