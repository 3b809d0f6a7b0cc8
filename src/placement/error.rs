//! Error types exposed by the placement API client.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the placement
/// API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// No API base URL was configured.
    #[error("placement API base URL is required")]
    MissingApiBase,

    /// No job identifier was configured.
    #[error("job identifier is required")]
    MissingJobId,

    /// The job identifier contains characters that are unsafe in a URL
    /// segment or file name.
    #[error("job identifier is invalid: {0}")]
    InvalidJobId(String),

    /// The authentication token was missing.
    #[error("auth token is required")]
    MissingToken,

    /// A URL could not be parsed or joined.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// Page numbers are 1-based.
    #[error("page number must be a positive integer")]
    InvalidPage,

    /// The server rejected the credential.
    #[error("placement API rejected the token: {message}")]
    Authentication {
        /// Detail from the 401/403 response.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("placement API error: {message}")]
    Api {
        /// Operation, status, and response body summary.
        message: String,
    },

    /// The server answered with a success status other than the one the
    /// operation requires.
    #[error("{operation} returned unexpected status {status}")]
    UnexpectedStatus {
        /// Operation that received the response.
        operation: String,
        /// HTTP status code.
        status: u16,
    },

    /// Networking failed before a response arrived.
    #[error("network error talking to the placement API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("malformed response: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
