use std::time::Duration;

use clap::Parser;

use crate::lookup::CacheStrategy;

use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use super::{Cli, defaults};

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["ipglance"];
    full.extend_from_slice(args);
    Cli::try_parse_from(full).expect("arguments should parse")
}

fn file(text: &str) -> TomlConfig {
    ::toml::from_str(text).expect("document should parse")
}

mod defaults_only {
    use super::*;

    #[test]
    fn bare_invocation_yields_builtin_defaults() {
        let config =
            ValidatedConfig::merge(&cli(&[]), &TomlConfig::default()).expect("defaults are valid");

        assert!(config.show_local);
        assert!(config.show_external);
        assert!(config.preferred_adapter.is_none());
        assert_eq!(config.separator, defaults::SEPARATOR);
        assert_eq!(config.fallback, defaults::FALLBACK);
        assert_eq!(config.endpoint.host, "ipinfo.io");
        assert_eq!(config.endpoint.path, "/json");
        assert_eq!(config.refresh.strategy, CacheStrategy::Hybrid);
        assert_eq!(config.refresh.min_refresh, Duration::from_secs(300));
        assert_eq!(config.refresh.fast_refresh, Duration::from_secs(30));
        assert_eq!(config.refresh.max_refresh, Duration::from_secs(900));
        assert_eq!(config.refresh.adaptive_cycles, 6);
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert!(!config.once);
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_overrides_file() {
        let file = file("[lookup]\nrefresh_secs = 120\nstrategy = \"fixed\"");
        let config = ValidatedConfig::merge(&cli(&["--refresh", "60", "--strategy", "hybrid"]), &file)
            .expect("config is valid");

        assert_eq!(config.refresh.min_refresh, Duration::from_secs(60));
        assert_eq!(config.refresh.strategy, CacheStrategy::Hybrid);
    }

    #[test]
    fn file_overrides_builtin_defaults() {
        let file = file("[display]\nseparator = \" / \"\n[monitor]\npoll_interval = 10");
        let config = ValidatedConfig::merge(&cli(&[]), &file).expect("config is valid");

        assert_eq!(config.separator, " / ");
        assert_eq!(config.poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn hide_flags_override_file_enables() {
        let file = file("[display]\nshow_local = true\nshow_external = true");
        let config =
            ValidatedConfig::merge(&cli(&["--hide-local"]), &file).expect("config is valid");

        assert!(!config.show_local);
        assert!(config.show_external);
    }

    #[test]
    fn absent_hide_flag_cannot_reenable_file_disable() {
        let file = file("[display]\nshow_external = false");
        let config = ValidatedConfig::merge(&cli(&[]), &file).expect("config is valid");

        assert!(!config.show_external);
    }

    #[test]
    fn adapter_from_cli_wins() {
        let file = file("[display]\npreferred_adapter = \"Ethernet\"");
        let config =
            ValidatedConfig::merge(&cli(&["--adapter", "Wi-Fi"]), &file).expect("config is valid");

        assert_eq!(config.preferred_adapter.as_deref(), Some("Wi-Fi"));
    }

    #[test]
    fn empty_adapter_name_means_none() {
        let file = file("[display]\npreferred_adapter = \"\"");
        let config = ValidatedConfig::merge(&cli(&[]), &file).expect("config is valid");

        assert!(config.preferred_adapter.is_none());
    }
}

mod endpoint {
    use super::*;

    #[test]
    fn timeouts_come_from_the_file() {
        let file = file(
            "[lookup]\nconnect_timeout_ms = 1000\nsend_timeout_ms = 2000\nreceive_timeout_ms = 4000",
        );
        let config = ValidatedConfig::merge(&cli(&[]), &file).expect("config is valid");

        assert_eq!(config.endpoint.connect_timeout, Duration::from_millis(1000));
        assert_eq!(config.endpoint.send_timeout, Duration::from_millis(2000));
        assert_eq!(config.endpoint.receive_timeout, Duration::from_millis(4000));
    }

    #[test]
    fn path_gains_a_leading_slash() {
        let file = file("[lookup]\npath = \"all.json\"");
        let config = ValidatedConfig::merge(&cli(&[]), &file).expect("config is valid");

        assert_eq!(config.endpoint.path, "/all.json");
    }

    #[test]
    fn host_with_a_slash_is_rejected() {
        let file = file("[lookup]\nhost = \"ipinfo.io/json\"");

        assert!(ValidatedConfig::merge(&cli(&[]), &file).is_err());
    }

    #[test]
    fn blank_host_is_rejected() {
        assert!(ValidatedConfig::merge(&cli(&["--host", "  "]), &TomlConfig::default()).is_err());
    }
}

mod validation {
    use super::*;

    #[test]
    fn zero_refresh_is_rejected() {
        let result = ValidatedConfig::merge(&cli(&["--refresh", "0"]), &TomlConfig::default());

        assert!(result.is_err());
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let result =
            ValidatedConfig::merge(&cli(&["--poll-interval", "0"]), &TomlConfig::default());

        assert!(result.is_err());
    }

    #[test]
    fn max_refresh_below_min_is_rejected() {
        let result = ValidatedConfig::merge(
            &cli(&["--refresh", "600", "--max-refresh", "300"]),
            &TomlConfig::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_file_strategy_is_rejected() {
        let file = file("[lookup]\nstrategy = \"bogus\"");

        assert!(ValidatedConfig::merge(&cli(&[]), &file).is_err());
    }

    #[test]
    fn file_strategy_names_parse() {
        for (name, expected) in [
            ("fixed", CacheStrategy::Fixed),
            ("adaptive", CacheStrategy::Adaptive),
            ("network-event", CacheStrategy::NetworkEvent),
            ("hybrid", CacheStrategy::Hybrid),
        ] {
            let file = file(&format!("[lookup]\nstrategy = \"{name}\""));
            let config = ValidatedConfig::merge(&cli(&[]), &file).expect("config is valid");

            assert_eq!(config.refresh.strategy, expected);
        }
    }
}

mod init {
    use super::*;

    #[test]
    fn writes_a_loadable_template() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("ipglance.toml");

        write_default_config(&path).expect("file should be written");

        let config = TomlConfig::load(&path).expect("template should load");
        assert!(config.lookup.host.is_none());
    }

    #[test]
    fn refuses_to_overwrite() {
        let file = tempfile::NamedTempFile::new().expect("temp file");

        assert!(write_default_config(file.path()).is_err());
    }
}
