//! External address lookup with adaptive caching.
//!
//! This module provides:
//! - The lookup result value type ([`LookupResult`])
//! - Flat JSON string-field extraction ([`json`])
//! - AS-organization display-name shortening ([`orgname`])
//! - The fetch collaborator trait ([`LookupFetcher`]) and its reqwest
//!   implementation ([`ReqwestFetcher`])
//! - The refresh-strategy cache ([`ExternalIpCache`])

mod cache;
mod error;
mod fetch;
pub mod json;
pub mod orgname;
mod result;

pub use cache::{CacheStrategy, ExternalIpCache, RefreshOptions};
pub use error::LookupError;
pub use fetch::{LookupEndpoint, LookupFetcher, ReqwestFetcher};
pub use result::LookupResult;
