//! Address priority scoring.

use std::net::Ipv4Addr;

/// Returns the selection priority of a candidate address.
///
/// Higher is better; `0` means "reject". Rules are evaluated in order,
/// first match wins:
///
/// 1. Loopback or all-zeros address → `0`
/// 2. `192.168.0.0/16` → `100` (home router range, most likely the LAN address)
/// 3. `10.0.0.0/8` → `50`
/// 4. `172.16.0.0/12` → `30`
/// 5. Any other address → `10`
///
/// Link-local `169.254.0.0/16` addresses intentionally score `10` like
/// any other non-private address rather than being rejected.
///
/// Pure, total, deterministic.
#[must_use]
pub fn score_address(addr: Ipv4Addr) -> u32 {
    if addr.is_loopback() || addr.is_unspecified() {
        return 0;
    }

    let octets = addr.octets();
    if octets[0] == 192 && octets[1] == 168 {
        return 100;
    }
    if octets[0] == 10 {
        return 50;
    }
    if octets[0] == 172 && (octets[1] & 0xF0) == 16 {
        return 30;
    }

    10
}
