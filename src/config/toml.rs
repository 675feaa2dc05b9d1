//! TOML configuration file support.

use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;

/// Raw configuration as read from a TOML file.
///
/// All fields are optional; missing values fall back to CLI arguments
/// and then to built-in defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Display composition options
    #[serde(default)]
    pub display: DisplaySection,
    /// External lookup options
    #[serde(default)]
    pub lookup: LookupSection,
    /// Display loop options
    #[serde(default)]
    pub monitor: MonitorSection,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    /// Show the local address part
    pub show_local: Option<bool>,
    /// Show the external address part
    pub show_external: Option<bool>,
    /// Preferred adapter, by friendly name or stable id
    pub preferred_adapter: Option<String>,
    /// Separator between the local and external parts
    pub separator: Option<String>,
    /// Placeholder for unresolvable addresses
    pub fallback: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSection {
    /// Lookup service host
    pub host: Option<String>,
    /// Lookup request path
    pub path: Option<String>,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: Option<u64>,
    /// Send timeout in milliseconds
    pub send_timeout_ms: Option<u64>,
    /// Receive timeout in milliseconds
    pub receive_timeout_ms: Option<u64>,
    /// Cache refresh strategy: fixed, adaptive, network-event or hybrid
    pub strategy: Option<String>,
    /// Standard refresh interval in seconds
    pub refresh_secs: Option<u64>,
    /// Fast refresh interval after a network change, in seconds
    pub fast_refresh_secs: Option<u64>,
    /// Maximum refresh interval on a stable network, in seconds
    pub max_refresh_secs: Option<u64>,
    /// Number of fast-mode cycles after a network change
    pub adaptive_cycles: Option<u32>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Display tick interval in seconds
    pub poll_interval: Option<u64>,
}

impl TomlConfig {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(::toml::from_str(&text)?)
    }
}

/// Returns the default configuration file contents, fully commented out.
#[must_use]
pub fn default_config_template() -> &'static str {
    r#"# ipglance configuration.
# All values shown here are the built-in defaults.

[display]
# show_local = true
# show_external = true
# preferred_adapter = "Ethernet"
# separator = " | "
# fallback = "N/A"

[lookup]
# host = "ipinfo.io"
# path = "/json"
# connect_timeout_ms = 3000
# send_timeout_ms = 3000
# receive_timeout_ms = 5000
# strategy = "hybrid"   # fixed | adaptive | network-event | hybrid
# refresh_secs = 300
# fast_refresh_secs = 30
# max_refresh_secs = 900
# adaptive_cycles = 6

[monitor]
# poll_interval = 60
"#
}
