//! Portable adapter enumeration using the `if_addrs` crate.

use crate::network::{AdapterEnumerator, AdapterRecord, EnumerationError};
use if_addrs::IfAddr;

/// Cross-platform implementation of [`AdapterEnumerator`] backed by
/// `getifaddrs`.
///
/// `if_addrs` reports one entry per (interface, address) pair; entries
/// are grouped back into per-adapter records preserving OS order. The
/// interface name serves as both friendly name and stable id, and an
/// interface that reports an address is treated as operationally up —
/// `getifaddrs` does not expose oper status directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct IfAddrsEnumerator {
    _private: (),
}

impl IfAddrsEnumerator {
    /// Creates a new portable adapter enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterEnumerator for IfAddrsEnumerator {
    fn enumerate(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
        let interfaces =
            if_addrs::get_if_addrs().map_err(|e| EnumerationError::Platform {
                message: format!("getifaddrs failed: {e}"),
            })?;

        let mut records: Vec<AdapterRecord> = Vec::new();

        for interface in interfaces {
            let is_loopback = interface.is_loopback();

            // IPv4 unicast addresses only
            let IfAddr::V4(ref v4) = interface.addr else {
                continue;
            };
            let address = v4.ip;

            match records
                .iter_mut()
                .find(|r| r.friendly_name == interface.name)
            {
                Some(record) => record.addresses.push(address),
                None => records.push(AdapterRecord::new(
                    interface.name.clone(),
                    interface.name.clone(),
                    true,
                    is_loopback,
                    vec![address],
                )),
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn enumerator_new_creates_instance() {
        let _enumerator = IfAddrsEnumerator::new();
    }

    // Integration test: actually enumerates interfaces from the system
    #[test]
    fn enumerate_returns_loopback_interface() {
        let enumerator = IfAddrsEnumerator::new();
        let records = enumerator.enumerate().expect("enumerate() failed");

        let has_loopback = records
            .iter()
            .any(|r| r.is_loopback && r.addresses.contains(&Ipv4Addr::LOCALHOST));

        assert!(
            has_loopback,
            "Expected the loopback interface, got: {records:?}"
        );
    }

    #[test]
    fn enumerate_groups_addresses_per_interface() {
        let enumerator = IfAddrsEnumerator::new();
        let records = enumerator.enumerate().expect("enumerate() failed");

        // Interface names appear at most once after grouping
        for record in &records {
            let occurrences = records
                .iter()
                .filter(|r| r.friendly_name == record.friendly_name)
                .count();
            assert_eq!(occurrences, 1, "duplicate record for {}", record.friendly_name);
        }
    }
}
