//! Error types for the REST client.

use reqwest::StatusCode;

/// Errors that can occur while constructing the client or sending a request.
///
/// HTTP-level error statuses (4xx/5xx) are not errors at this layer; they
/// come back to the caller as ordinary responses. Interpreting the status
/// code is the embedding application's concern.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload could not be serialized to JSON. No request was sent.
    #[error("failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The method/target/body combination was rejected before sending.
    #[error("failed to build request: {0}")]
    BuildRequest(#[source] reqwest::Error),

    /// The request could not be completed (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its body could not be fully read.
    #[error("failed to read response body (status {status}): {source}")]
    ReadBody {
        /// Status code of the response whose body failed to read.
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
