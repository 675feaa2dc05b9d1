//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default separator between the local and external display parts.
pub const SEPARATOR: &str = " | ";

/// Default placeholder for unresolvable addresses.
pub const FALLBACK: &str = "N/A";

/// Default display tick interval in seconds.
pub const POLL_INTERVAL_SECS: u64 = 60;

/// Default standard refresh interval in seconds (5 minutes).
pub const REFRESH_SECS: u64 = 5 * 60;

/// Default fast refresh interval in seconds.
pub const FAST_REFRESH_SECS: u64 = 30;

/// Default maximum refresh interval in seconds (15 minutes).
pub const MAX_REFRESH_SECS: u64 = 15 * 60;

/// Default number of fast-mode cycles after a network change.
pub const ADAPTIVE_CYCLES: u32 = 6;

/// Default display tick interval as Duration.
#[must_use]
pub const fn poll_interval() -> Duration {
    Duration::from_secs(POLL_INTERVAL_SECS)
}
