//! ipglance: local and external IPv4 resolution.
//!
//! A library for selecting the best local IPv4 address among the
//! host's network adapters and for fetching the external address
//! (with geolocation) through an adaptively refreshed cache.

pub mod config;
pub mod display;
pub mod lookup;
pub mod network;
pub mod resolve;
pub mod time;
