//! Configuration layer for ipglance.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! Hide flags (`--hide-local`, `--hide-external`) use enable-only
//! semantics: they can disable a part that the TOML left enabled, but
//! cannot re-enable one the TOML disabled.
//!
//! # CLI-Only vs TOML-Only Options
//!
//! The lookup timeout triple (`connect_timeout_ms`, `send_timeout_ms`,
//! `receive_timeout_ms`) is TOML-only; the CLI exposes only the
//! commonly tuned options. For full configurability, use a config file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, StrategyArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
