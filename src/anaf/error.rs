use thiserror::Error;

/// Errors returned by [`AnafClient`](crate::anaf::AnafClient).
///
/// Argument errors are raised before any network activity and are never
/// retried. `RegistryUnavailable` is only returned after the configured
/// number of attempts has been exhausted and wraps the last failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnafError {
    /// A CUI failed validation before the request was built.
    #[error("invalid CUI '{input}': {reason}")]
    InvalidCui {
        /// The caller's literal input.
        input: String,
        /// The validator's failure message.
        reason: String,
    },

    /// The batch was empty.
    #[error("CUI list cannot be empty")]
    EmptyBatch,

    /// The batch exceeded the configured size limit.
    #[error("batch size {size} exceeds maximum allowed {max}")]
    BatchTooLarge {
        /// Number of CUIs in the rejected batch.
        size: usize,
        /// The configured maximum.
        max: usize,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Configuration(String),

    /// All attempts against the registry failed.
    #[error("failed to query ANAF registry after {attempts} attempts")]
    RegistryUnavailable {
        /// Total attempts made (retries + 1).
        attempts: u32,
        /// The failure from the last attempt.
        #[source]
        source: TransportError,
    },
}

/// A single failed request/response exchange with the registry.
///
/// Every variant is considered transient and retried until the attempt
/// budget runs out.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Connection, timeout, or body-read failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The registry answered with a non-success status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("failed to decode ANAF response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The registry answered 2xx with an empty body.
    #[error("empty response from ANAF")]
    EmptyResponse,
}
