//! Adapter enumeration trait and error types.

use super::AdapterRecord;
use thiserror::Error;

/// Error type for adapter enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// Resolution callers typically degrade an enumeration failure to
/// "no local address" rather than propagating it.
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating the host's network adapters.
///
/// # Design
///
/// - Implementations return ALL adapters in one pass as an ordered,
///   finite list; filtering and selection happen in the caller
/// - Address order within each adapter should be stable across calls,
///   since tied-priority selection depends on enumeration order
/// - Enables dependency injection for testing with scripted records
pub trait AdapterEnumerator: Send + Sync {
    /// Enumerates the current state of all network adapters.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError`] when the platform API fails.
    fn enumerate(&self) -> Result<Vec<AdapterRecord>, EnumerationError>;
}

impl<E: AdapterEnumerator + ?Sized> AdapterEnumerator for std::sync::Arc<E> {
    fn enumerate(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        (**self).enumerate()
    }
}
