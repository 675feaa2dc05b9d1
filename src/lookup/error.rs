//! Error types for external lookup operations.

use thiserror::Error;

/// Error type for the lookup fetch collaborator.
///
/// Describes what went wrong without dictating recovery strategy. The
/// cache never retries internally; retry cadence is governed entirely
/// by the refresh-interval policy on subsequent calls.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network connection failed.
    ///
    /// Includes DNS resolution failures, connection refused, and other
    /// network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request did not complete within the configured timeouts.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status code.
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// The endpoint host/path does not form a valid URL.
    ///
    /// This is a configuration error rather than a transient failure.
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),
}
