use std::io::Write;

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn empty_document_yields_all_defaults() {
        let config: TomlConfig = ::toml::from_str("").expect("empty document should parse");

        assert!(config.display.show_local.is_none());
        assert!(config.lookup.host.is_none());
        assert!(config.monitor.poll_interval.is_none());
    }

    #[test]
    fn full_document_parses() {
        let text = r#"
            [display]
            show_local = false
            show_external = true
            preferred_adapter = "Ethernet"
            separator = " / "
            fallback = "?"

            [lookup]
            host = "ifconfig.me"
            path = "all.json"
            connect_timeout_ms = 1000
            send_timeout_ms = 2000
            receive_timeout_ms = 4000
            strategy = "adaptive"
            refresh_secs = 120
            fast_refresh_secs = 10
            max_refresh_secs = 600
            adaptive_cycles = 4

            [monitor]
            poll_interval = 30
        "#;
        let config: TomlConfig = ::toml::from_str(text).expect("document should parse");

        assert_eq!(config.display.show_local, Some(false));
        assert_eq!(config.display.preferred_adapter.as_deref(), Some("Ethernet"));
        assert_eq!(config.lookup.host.as_deref(), Some("ifconfig.me"));
        assert_eq!(config.lookup.strategy.as_deref(), Some("adaptive"));
        assert_eq!(config.lookup.refresh_secs, Some(120));
        assert_eq!(config.lookup.adaptive_cycles, Some(4));
        assert_eq!(config.monitor.poll_interval, Some(30));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = ::toml::from_str::<TomlConfig>("[display]\nshow_loacl = true\n");

        assert!(result.is_err());
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let result = ::toml::from_str::<TomlConfig>("[webhooks]\nurl = \"x\"\n");

        assert!(result.is_err());
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[monitor]\npoll_interval = 15").expect("write");

        let config = TomlConfig::load(file.path()).expect("file should load");

        assert_eq!(config.monitor.poll_interval, Some(15));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/ipglance.toml"));

        assert!(result.is_err());
    }

    #[test]
    fn template_parses_and_is_all_comments() {
        let config: TomlConfig =
            ::toml::from_str(default_config_template()).expect("template should parse");

        // Every value line is commented out, so nothing is set.
        assert!(config.display.separator.is_none());
        assert!(config.lookup.strategy.is_none());
        assert!(config.monitor.poll_interval.is_none());
    }
}
