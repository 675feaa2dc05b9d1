//! Validated, merged runtime configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::lookup::{CacheStrategy, LookupEndpoint, RefreshOptions};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::{TomlConfig, default_config_template};

/// Fully resolved runtime configuration.
///
/// Produced by [`ValidatedConfig::load`], which merges CLI arguments
/// over an optional TOML file over built-in defaults and validates
/// the result.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Show the local address part
    pub show_local: bool,
    /// Show the external address part
    pub show_external: bool,
    /// Preferred adapter, by friendly name or stable id
    pub preferred_adapter: Option<String>,
    /// Separator between the local and external parts
    pub separator: String,
    /// Placeholder for unresolvable addresses
    pub fallback: String,
    /// External lookup endpoint
    pub endpoint: LookupEndpoint,
    /// External cache refresh options
    pub refresh: RefreshOptions,
    /// Display tick interval
    pub poll_interval: Duration,
    /// Print one line and exit
    pub once: bool,
    /// Verbose logging
    pub verbose: bool,
}

impl ValidatedConfig {
    /// Builds the runtime configuration from CLI arguments and the
    /// configuration file, if one is present.
    ///
    /// A path given with `--config` must exist; the default location
    /// (`ipglance.toml` under the platform config directory) is loaded
    /// only when present.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be loaded or any merged
    /// value fails validation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => TomlConfig::load(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => TomlConfig::load(&path)?,
                _ => TomlConfig::default(),
            },
        };
        Self::merge(cli, &file)
    }

    pub(super) fn merge(cli: &Cli, file: &TomlConfig) -> Result<Self, ConfigError> {
        let show_local = !cli.hide_local && file.display.show_local.unwrap_or(true);
        let show_external = !cli.hide_external && file.display.show_external.unwrap_or(true);

        let preferred_adapter = cli
            .adapter
            .clone()
            .or_else(|| file.display.preferred_adapter.clone())
            .filter(|name| !name.is_empty());
        let separator = cli
            .separator
            .clone()
            .or_else(|| file.display.separator.clone())
            .unwrap_or_else(|| defaults::SEPARATOR.to_owned());
        let fallback = cli
            .fallback
            .clone()
            .or_else(|| file.display.fallback.clone())
            .unwrap_or_else(|| defaults::FALLBACK.to_owned());

        let endpoint = resolve_endpoint(cli, file)?;
        let refresh = resolve_refresh(cli, file)?;

        let poll_interval = interval_secs(
            "monitor.poll_interval",
            cli.poll_interval
                .or(file.monitor.poll_interval)
                .unwrap_or(defaults::POLL_INTERVAL_SECS),
        )?;

        Ok(Self {
            show_local,
            show_external,
            preferred_adapter,
            separator,
            fallback,
            endpoint,
            refresh,
            poll_interval,
            once: cli.once,
            verbose: cli.verbose,
        })
    }
}

fn resolve_endpoint(cli: &Cli, file: &TomlConfig) -> Result<LookupEndpoint, ConfigError> {
    let mut endpoint = LookupEndpoint::default();

    if let Some(host) = cli.host.clone().or_else(|| file.lookup.host.clone()) {
        if host.trim().is_empty() || host.contains('/') {
            return Err(ConfigError::InvalidHost { host });
        }
        endpoint.host = host;
    }
    if let Some(path) = &file.lookup.path {
        endpoint.path = if path.starts_with('/') {
            path.clone()
        } else {
            format!("/{path}")
        };
    }
    if let Some(ms) = file.lookup.connect_timeout_ms {
        endpoint.connect_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = file.lookup.send_timeout_ms {
        endpoint.send_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = file.lookup.receive_timeout_ms {
        endpoint.receive_timeout = Duration::from_millis(ms);
    }

    Ok(endpoint)
}

fn resolve_refresh(cli: &Cli, file: &TomlConfig) -> Result<RefreshOptions, ConfigError> {
    let strategy = match (cli.strategy, &file.lookup.strategy) {
        (Some(arg), _) => CacheStrategy::from(arg),
        (None, Some(name)) => parse_strategy(name)?,
        (None, None) => CacheStrategy::Hybrid,
    };

    let min_refresh = interval_secs(
        "lookup.refresh_secs",
        cli.refresh_secs
            .or(file.lookup.refresh_secs)
            .unwrap_or(defaults::REFRESH_SECS),
    )?;
    let fast_refresh = interval_secs(
        "lookup.fast_refresh_secs",
        cli.fast_refresh_secs
            .or(file.lookup.fast_refresh_secs)
            .unwrap_or(defaults::FAST_REFRESH_SECS),
    )?;
    let max_refresh = interval_secs(
        "lookup.max_refresh_secs",
        cli.max_refresh_secs
            .or(file.lookup.max_refresh_secs)
            .unwrap_or(defaults::MAX_REFRESH_SECS),
    )?;

    if max_refresh < min_refresh {
        return Err(ConfigError::InvalidInterval {
            field: "lookup.max_refresh_secs",
            reason: "must not be shorter than lookup.refresh_secs".to_owned(),
        });
    }

    Ok(RefreshOptions {
        strategy,
        min_refresh,
        fast_refresh,
        max_refresh,
        adaptive_cycles: cli
            .adaptive_cycles
            .or(file.lookup.adaptive_cycles)
            .unwrap_or(defaults::ADAPTIVE_CYCLES),
    })
}

fn parse_strategy(name: &str) -> Result<CacheStrategy, ConfigError> {
    match name {
        "fixed" => Ok(CacheStrategy::Fixed),
        "adaptive" => Ok(CacheStrategy::Adaptive),
        "network-event" => Ok(CacheStrategy::NetworkEvent),
        "hybrid" => Ok(CacheStrategy::Hybrid),
        other => Err(ConfigError::InvalidStrategy {
            value: other.to_owned(),
        }),
    }
}

fn interval_secs(field: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidInterval {
            field,
            reason: "must be greater than zero".to_owned(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Default configuration file location, if the platform has one.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ipglance.toml"))
}

/// Writes the default configuration template to `path`.
///
/// # Errors
///
/// Returns an error when the file already exists or cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "refusing to overwrite an existing file",
            ),
        });
    }
    std::fs::write(path, default_config_template()).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "local={} external={} adapter={} strategy={:?} refresh={}s/{}s/{}s poll={}s host={}",
            self.show_local,
            self.show_external,
            self.preferred_adapter.as_deref().unwrap_or("auto"),
            self.refresh.strategy,
            self.refresh.fast_refresh.as_secs(),
            self.refresh.min_refresh.as_secs(),
            self.refresh.max_refresh.as_secs(),
            self.poll_interval.as_secs(),
            self.endpoint.host,
        )
    }
}
