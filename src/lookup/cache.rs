//! External address cache with adaptive refresh strategies.

use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::network::AdapterEnumerator;
use crate::resolve::LocalResolver;
use crate::time::Clock;

use super::json::extract_string_field;
use super::{LookupEndpoint, LookupFetcher, LookupResult};

/// Stable time after which adaptive strategies stretch the refresh
/// interval to its maximum.
const STABLE_PERIOD: Duration = Duration::from_secs(60 * 60);

/// Policy governing how long a cached lookup result stays fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    /// Refresh on a fixed interval (`min_refresh`).
    Fixed,
    /// Shorten the interval after a network change, stretch it once the
    /// network has been stable for a long period.
    Adaptive,
    /// Refresh only on detected network changes, with `max_refresh` as
    /// a periodic safety net.
    NetworkEvent,
    /// Adaptive refresh plus event-driven refresh; shares the refresh
    /// logic with [`CacheStrategy::Adaptive`].
    Hybrid,
}

/// Refresh configuration passed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOptions {
    /// Active cache strategy.
    pub strategy: CacheStrategy,
    /// Standard refresh interval.
    pub min_refresh: Duration,
    /// Shortened interval used while fast mode is active.
    pub fast_refresh: Duration,
    /// Longest interval, used once the network is stable (or always,
    /// for [`CacheStrategy::NetworkEvent`]).
    pub max_refresh: Duration,
    /// Number of calls served on the fast interval after a detected
    /// network change.
    pub adaptive_cycles: u32,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            strategy: CacheStrategy::Hybrid,
            min_refresh: Duration::from_secs(5 * 60),
            fast_refresh: Duration::from_secs(30),
            max_refresh: Duration::from_secs(15 * 60),
            adaptive_cycles: 6,
        }
    }
}

/// Mutable cache state, only ever touched under the cache's mutex.
#[derive(Debug, Default)]
struct CacheState {
    /// Last known-good result; invalid until the first successful fetch.
    cached: LookupResult,
    /// Set only after a successful fetch.
    last_fetch: Option<SystemTime>,
    /// Set when a network change was detected; `None` counts as
    /// "stable forever" for the interval stretch.
    last_change: Option<SystemTime>,
    /// Remaining calls served on the fast interval.
    fast_cycles_left: u32,
    /// Local-address snapshot from the previous call, used for change
    /// detection. Empty until the baseline is established.
    last_local: String,
}

/// What the decision phase concluded.
enum Decision {
    /// Serve the cached value, no fetch.
    Hit(LookupResult),
    /// Perform a fetch.
    Fetch,
}

/// Stateful cache around the external lookup.
///
/// Owns the only shared mutable state in the crate. The decision phase
/// runs under an internal mutex; the network fetch deliberately runs
/// without holding it, so one slow fetch cannot block other callers
/// from reading a still-valid cached value. Two concurrent callers can
/// both observe a miss and both fetch — this is a best-effort cache,
/// not single-flight, and the last successful write wins.
///
/// A fresh local-address snapshot is taken on every call to detect
/// adapter topology changes: any change flips the cache into fast mode
/// for `adaptive_cycles` calls and forces an immediate refresh.
#[derive(Debug)]
pub struct ExternalIpCache<E, C> {
    local: LocalResolver<E>,
    clock: C,
    endpoint: LookupEndpoint,
    state: Mutex<CacheState>,
}

impl<E, C> ExternalIpCache<E, C>
where
    E: AdapterEnumerator,
    C: Clock,
{
    /// Creates a cache resolving through the given enumerator and clock.
    pub fn new(enumerator: E, clock: C, endpoint: LookupEndpoint) -> Self {
        Self {
            local: LocalResolver::new(enumerator),
            clock,
            endpoint,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Resolves the external address, fetching only when the refresh
    /// policy demands it.
    ///
    /// Returns the newly fetched result when a fetch happened (invalid
    /// on failure — callers must treat that as "no change from the
    /// last known cache", not as a cleared cache), or the cached value
    /// on a hit. A failed fetch never clobbers a previously valid
    /// cache entry.
    pub async fn resolve<F: LookupFetcher>(
        &self,
        options: &RefreshOptions,
        fetcher: &F,
        force_refresh: bool,
    ) -> LookupResult {
        let now = self.clock.now();

        match self.decide(options, now, force_refresh) {
            Decision::Hit(cached) => cached,
            Decision::Fetch => self.fetch_and_store(fetcher, now).await,
        }
    }

    /// Decision phase, executed under the state mutex.
    fn decide(&self, options: &RefreshOptions, now: SystemTime, force_refresh: bool) -> Decision {
        let mut state = self.state.lock().expect("cache mutex poisoned");

        // Fresh local snapshot as the change indicator, default
        // enumeration with no preferred-adapter hint
        let snapshot = self
            .local
            .resolve(None)
            .map(|addr| addr.to_string())
            .unwrap_or_default();

        let network_changed = !state.last_local.is_empty() && snapshot != state.last_local;
        if network_changed {
            tracing::debug!(
                "Local address changed ({} -> {snapshot}), entering fast mode",
                state.last_local
            );
            state.last_change = Some(now);
            state.fast_cycles_left = options.adaptive_cycles;
        }
        // First call establishes the baseline without flagging a change
        state.last_local = snapshot;

        if force_refresh || network_changed {
            return Decision::Fetch;
        }

        let Some(last_fetch) = state.last_fetch else {
            return Decision::Fetch;
        };
        if !state.cached.is_valid() {
            return Decision::Fetch;
        }

        let interval = refresh_interval(options, &mut state, now);
        let elapsed = now.duration_since(last_fetch).unwrap_or(Duration::ZERO);
        if elapsed < interval {
            Decision::Hit(state.cached.clone())
        } else {
            Decision::Fetch
        }
    }

    /// Fetch phase, executed without holding the lock.
    async fn fetch_and_store<F: LookupFetcher>(&self, fetcher: &F, now: SystemTime) -> LookupResult {
        let result = match fetcher.fetch(&self.endpoint).await {
            Ok(body) => parse_lookup_response(&body),
            Err(e) => {
                tracing::warn!("External lookup failed: {e}");
                LookupResult::invalid()
            }
        };

        if result.is_valid() {
            let mut state = self.state.lock().expect("cache mutex poisoned");
            state.cached = result.clone();
            state.last_fetch = Some(now);
        }

        result
    }
}

/// Computes the refresh interval for the current call.
///
/// Adaptive strategies consume one fast cycle per qualifying call.
fn refresh_interval(options: &RefreshOptions, state: &mut CacheState, now: SystemTime) -> Duration {
    match options.strategy {
        CacheStrategy::Fixed => options.min_refresh,
        CacheStrategy::Adaptive | CacheStrategy::Hybrid => {
            if state.fast_cycles_left > 0 {
                state.fast_cycles_left -= 1;
                options.fast_refresh
            } else if stable_for(state, now) > STABLE_PERIOD {
                options.max_refresh
            } else {
                options.min_refresh
            }
        }
        CacheStrategy::NetworkEvent => options.max_refresh,
    }
}

/// Elapsed time since the last detected network change.
///
/// A cache that never saw a change counts as stable forever.
fn stable_for(state: &CacheState, now: SystemTime) -> Duration {
    state.last_change.map_or(Duration::MAX, |change| {
        now.duration_since(change).unwrap_or(Duration::ZERO)
    })
}

/// Parses one raw response body into a [`LookupResult`].
///
/// Fields degrade independently: a missing `country` or `org` leaves
/// that field empty while the address may still be populated. The
/// address falls back from `ip` (ipinfo.io) to `origin` (httpbin.org).
fn parse_lookup_response(body: &str) -> LookupResult {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return LookupResult::invalid();
    }

    let ip = extract_string_field(trimmed, "ip")
        .or_else(|| extract_string_field(trimmed, "origin"))
        .unwrap_or_default();
    let country = extract_string_field(trimmed, "country").unwrap_or_default();
    let organization = extract_string_field(trimmed, "org").unwrap_or_default();

    LookupResult::new(ip, country, organization)
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
