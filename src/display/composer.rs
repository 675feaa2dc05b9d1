//! Combines local and external results into display strings.

use crate::lookup::{ExternalIpCache, LookupFetcher, LookupResult, RefreshOptions};
use crate::network::AdapterEnumerator;
use crate::resolve::LocalResolver;
use crate::time::Clock;

/// Default placeholder shown when an address cannot be resolved.
pub const DEFAULT_FALLBACK: &str = "N/A";

/// Default separator between the local and external parts.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Hint shown when both displays are disabled.
const NOTHING_ENABLED_HINT: &str = "enable local or external display";

/// Display configuration consumed by the composer.
///
/// The fallback placeholder is policy here rather than scattered
/// across call sites: every unresolvable part renders as `fallback`.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Show the best local address.
    pub show_local: bool,
    /// Show the external address (with country code when known).
    pub show_external: bool,
    /// Preferred adapter hint, by friendly name or stable id.
    pub preferred_adapter: Option<String>,
    /// Separator between the local and external parts.
    pub separator: String,
    /// Placeholder for unresolvable parts.
    pub fallback: String,
    /// Refresh policy for the external lookup.
    pub refresh: RefreshOptions,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_local: true,
            show_external: true,
            preferred_adapter: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            fallback: DEFAULT_FALLBACK.to_string(),
            refresh: RefreshOptions::default(),
        }
    }
}

/// Two-line display layout.
///
/// Mirrors a vertically stacked widget: local address above, external
/// address below. When the local display is disabled the upper line
/// opportunistically carries the organization name of the external
/// result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPair {
    /// Local address, organization name, or empty.
    pub upper: String,
    /// External display string, or empty.
    pub lower: String,
}

/// Composes final user-facing strings on each refresh tick.
///
/// Holds its own local resolver for the preferred-adapter display and
/// shares the external cache, whose internal change detection performs
/// its own (unhinted) local resolution.
pub struct DisplayComposer<'a, E, C> {
    local: LocalResolver<E>,
    cache: &'a ExternalIpCache<E, C>,
    options: DisplayOptions,
}

impl<'a, E, C> DisplayComposer<'a, E, C>
where
    E: AdapterEnumerator,
    C: Clock,
{
    /// Creates a composer over the given enumerator and shared cache.
    pub const fn new(
        enumerator: E,
        cache: &'a ExternalIpCache<E, C>,
        options: DisplayOptions,
    ) -> Self {
        Self {
            local: LocalResolver::new(enumerator),
            cache,
            options,
        }
    }

    /// Returns the display options.
    #[must_use]
    pub const fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Composes the single-line display.
    ///
    /// Local and external parts are joined by the configured separator;
    /// each part falls back to the placeholder when unresolvable. With
    /// both displays disabled a fixed hint is returned.
    pub async fn compose_line<F: LookupFetcher>(&self, fetcher: &F, force_refresh: bool) -> String {
        let opts = &self.options;

        let local = opts.show_local.then(|| self.local_part());
        let external = if opts.show_external {
            let result = self.external_result(fetcher, force_refresh).await;
            Some(self.external_part(&result))
        } else {
            None
        };

        match (local, external) {
            (Some(l), Some(e)) => format!("{l}{}{e}", opts.separator),
            (Some(part), None) | (None, Some(part)) => part,
            (None, None) => NOTHING_ENABLED_HINT.to_string(),
        }
    }

    /// Composes the two-line display.
    pub async fn compose_pair<F: LookupFetcher>(
        &self,
        fetcher: &F,
        force_refresh: bool,
    ) -> DisplayPair {
        let opts = &self.options;

        let external = if opts.show_external {
            Some(self.external_result(fetcher, force_refresh).await)
        } else {
            None
        };

        let upper = if opts.show_local {
            self.local_part()
        } else {
            // Local display off: surface the organization name when the
            // external result carries one
            external
                .as_ref()
                .filter(|r| r.is_valid())
                .map(LookupResult::organization_display_name)
                .unwrap_or_default()
        };

        let lower = external.map(|r| self.external_part(&r)).unwrap_or_default();

        DisplayPair { upper, lower }
    }

    fn local_part(&self) -> String {
        self.local
            .resolve(self.options.preferred_adapter.as_deref())
            .map_or_else(|| self.options.fallback.clone(), |addr| addr.to_string())
    }

    async fn external_result<F: LookupFetcher>(
        &self,
        fetcher: &F,
        force_refresh: bool,
    ) -> LookupResult {
        self.cache
            .resolve(&self.options.refresh, fetcher, force_refresh)
            .await
    }

    fn external_part(&self, result: &LookupResult) -> String {
        if result.is_valid() {
            result.display_string()
        } else {
            self.options.fallback.clone()
        }
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
