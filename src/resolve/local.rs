//! Best local address selection.

use std::net::Ipv4Addr;

use crate::network::{AdapterEnumerator, AdapterRecord};

use super::score_address;

/// Picks the best address among the given adapters.
///
/// Adapters that are down or loopback interfaces never participate.
///
/// When `preferred` names an eligible adapter (by friendly name or
/// stable id), its addresses are scanned first and a non-empty result
/// is returned without considering anything else. Otherwise — hint
/// missing, unmatched, or matched but without a scoring address — the
/// scan falls back to all eligible adapters' addresses globally.
///
/// Selection keeps the address with the strictly highest score seen so
/// far, so among tied candidates the first one in enumeration order
/// wins. `None` means no valid candidate exists anywhere; absence is a
/// normal outcome, not an error.
#[must_use]
pub fn best_address(adapters: &[AdapterRecord], preferred: Option<&str>) -> Option<Ipv4Addr> {
    if let Some(name) = preferred.filter(|n| !n.is_empty()) {
        let preferred_candidates = adapters
            .iter()
            .filter(|a| a.is_eligible() && a.matches_name(name))
            .flat_map(|a| a.addresses.iter().copied());

        if let Some(addr) = pick_highest(preferred_candidates) {
            return Some(addr);
        }
    }

    pick_highest(
        adapters
            .iter()
            .filter(|a| a.is_eligible())
            .flat_map(|a| a.addresses.iter().copied()),
    )
}

/// Max-score scan with strict-greater-than replacement.
fn pick_highest(candidates: impl Iterator<Item = Ipv4Addr>) -> Option<Ipv4Addr> {
    let mut best: Option<Ipv4Addr> = None;
    let mut best_score = 0;

    for addr in candidates {
        let score = score_address(addr);
        if score > best_score {
            best = Some(addr);
            best_score = score;
        }
    }

    best
}

/// Resolver that enumerates adapters and picks the best local address.
///
/// Wraps an [`AdapterEnumerator`] so callers get a one-call resolution.
/// Enumeration failures degrade to "no local address" with a warning
/// log, matching the error model where absence is not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResolver<E> {
    enumerator: E,
}

impl<E: AdapterEnumerator> LocalResolver<E> {
    /// Creates a resolver over the given enumerator.
    pub const fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    /// Enumerates the current adapters and returns the best address.
    pub fn resolve(&self, preferred: Option<&str>) -> Option<Ipv4Addr> {
        match self.enumerator.enumerate() {
            Ok(adapters) => best_address(&adapters, preferred),
            Err(e) => {
                tracing::warn!("Adapter enumeration failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
