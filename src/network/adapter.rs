//! Core value types for adapter representation.

use std::net::Ipv4Addr;

/// A snapshot of one network adapter at a single enumeration call.
///
/// Records are ephemeral: the enumerator builds a fresh ordered list on
/// every call and nothing is persisted between calls. Address order
/// within a record follows the operating system's reporting order and
/// is significant — resolution tie-breaking is "first reaches the
/// maximum score wins".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterRecord {
    /// Human-facing name (e.g. "Ethernet", "Wi-Fi", "eth0").
    pub friendly_name: String,
    /// Stable identifier (adapter GUID on Windows, interface name elsewhere).
    pub adapter_id: String,
    /// Whether the adapter is operationally up.
    pub is_up: bool,
    /// Whether this is a loopback-type interface.
    pub is_loopback: bool,
    /// IPv4 unicast addresses assigned to this adapter, in OS order.
    pub addresses: Vec<Ipv4Addr>,
}

impl AdapterRecord {
    /// Creates a new adapter record.
    #[must_use]
    pub fn new(
        friendly_name: impl Into<String>,
        adapter_id: impl Into<String>,
        is_up: bool,
        is_loopback: bool,
        addresses: Vec<Ipv4Addr>,
    ) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            adapter_id: adapter_id.into(),
            is_up,
            is_loopback,
            addresses,
        }
    }

    /// Returns true if the adapter is up and not a loopback interface.
    ///
    /// Only eligible adapters participate in local address resolution.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.is_up && !self.is_loopback
    }

    /// Returns true if the given name matches the friendly name or the
    /// stable adapter id.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.friendly_name == name || self.adapter_id == name
    }
}
