//! Payment provider errors.

use thiserror::Error;

/// Payment provider error variants.
#[derive(Debug, Error)]
pub enum PaymentsError {
    /// A line names a product the catalog does not have.
    #[error("product {0:?} not found")]
    UnknownProduct(String),

    /// The provider was asked to charge nothing.
    #[error("payment session has no lines")]
    NoLines,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response or unexpected body.
    #[error("unexpected response from payment provider: {0}")]
    UnexpectedResponse(String),

    /// The provider created a session without a client secret.
    #[error("payment provider returned no client secret")]
    MissingClientSecret,
}
