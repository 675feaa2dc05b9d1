//! Network layer for enumerating and representing adapter state.
//!
//! This module provides:
//! - Value-type adapter records ([`AdapterRecord`])
//! - The enumeration collaborator trait ([`AdapterEnumerator`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod enumerator;
pub mod platform;

pub use adapter::AdapterRecord;
pub use enumerator::{AdapterEnumerator, EnumerationError};
