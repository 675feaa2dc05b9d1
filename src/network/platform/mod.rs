//! Platform-specific adapter enumerator implementations.
//!
//! # Platform Support
//!
//! - **Windows**: `GetAdaptersAddresses` via the `windows` crate, which
//!   reports operational status, friendly names, and adapter GUIDs.
//! - **Other platforms**: `if_addrs`, which reports interface name and
//!   addresses; operational status is approximated (an interface that
//!   shows up with an address is treated as up).

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsEnumerator;

#[cfg(not(windows))]
mod if_addrs;

#[cfg(not(windows))]
pub use if_addrs::IfAddrsEnumerator;

// Re-export the native implementation as PlatformEnumerator for convenience
#[cfg(windows)]
pub use windows::WindowsEnumerator as PlatformEnumerator;

#[cfg(not(windows))]
pub use if_addrs::IfAddrsEnumerator as PlatformEnumerator;
