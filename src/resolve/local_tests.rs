//! Tests for best local address selection.

use super::*;
use crate::network::EnumerationError;

fn adapter(name: &str, addrs: Vec<&str>) -> AdapterRecord {
    AdapterRecord::new(
        name,
        name,
        true,
        false,
        addrs.into_iter().map(|s| s.parse().unwrap()).collect(),
    )
}

fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

mod fallback_pass {
    use super::*;

    #[test]
    fn picks_highest_priority_across_adapters() {
        let adapters = vec![
            adapter("eth0", vec!["10.0.0.9"]),
            adapter("wlan0", vec!["192.168.1.5"]),
        ];

        assert_eq!(best_address(&adapters, None), Some(ip("192.168.1.5")));
    }

    #[test]
    fn first_reaching_max_score_wins_ties() {
        let adapters = vec![
            adapter("eth0", vec!["192.168.0.10"]),
            adapter("wlan0", vec!["192.168.1.5"]),
        ];

        // Both score 100; enumeration order decides
        assert_eq!(best_address(&adapters, None), Some(ip("192.168.0.10")));
    }

    #[test]
    fn skips_down_adapters() {
        let mut down = adapter("eth0", vec!["192.168.1.5"]);
        down.is_up = false;
        let adapters = vec![down, adapter("wlan0", vec!["10.0.0.9"])];

        assert_eq!(best_address(&adapters, None), Some(ip("10.0.0.9")));
    }

    #[test]
    fn skips_loopback_interfaces() {
        let mut lo = adapter("lo", vec!["10.1.1.1"]);
        lo.is_loopback = true;
        let adapters = vec![lo, adapter("eth0", vec!["172.20.0.3"])];

        assert_eq!(best_address(&adapters, None), Some(ip("172.20.0.3")));
    }

    #[test]
    fn rejected_addresses_never_win() {
        let adapters = vec![adapter("eth0", vec!["0.0.0.0", "127.0.0.1"])];

        assert_eq!(best_address(&adapters, None), None);
    }

    #[test]
    fn no_adapters_means_no_address() {
        assert_eq!(best_address(&[], None), None);
    }

    #[test]
    fn other_valid_address_beats_nothing() {
        let adapters = vec![adapter("ppp0", vec!["203.0.113.7"])];

        assert_eq!(best_address(&adapters, None), Some(ip("203.0.113.7")));
    }

    #[test]
    fn higher_score_replaces_earlier_candidate() {
        let adapters = vec![adapter("eth0", vec!["172.16.0.2", "10.0.0.2", "192.168.0.2"])];

        assert_eq!(best_address(&adapters, None), Some(ip("192.168.0.2")));
    }
}

mod preferred_pass {
    use super::*;

    #[test]
    fn preferred_adapter_wins_over_better_global_candidate() {
        let adapters = vec![
            adapter("eth0", vec!["192.168.1.5"]),
            adapter("wlan0", vec!["10.0.0.9"]),
        ];

        assert_eq!(
            best_address(&adapters, Some("wlan0")),
            Some(ip("10.0.0.9"))
        );
    }

    #[test]
    fn preferred_matches_by_adapter_id() {
        let mut preferred = adapter("Wi-Fi", vec!["10.0.0.9"]);
        preferred.adapter_id = "{deadbeef-0000}".to_string();
        let adapters = vec![adapter("eth0", vec!["192.168.1.5"]), preferred];

        assert_eq!(
            best_address(&adapters, Some("{deadbeef-0000}")),
            Some(ip("10.0.0.9"))
        );
    }

    #[test]
    fn preferred_miss_falls_through_to_global_fallback() {
        // The preferred adapter exists but only holds an invalid address
        let adapters = vec![
            adapter("eth0", vec!["0.0.0.0"]),
            adapter("wlan0", vec!["192.168.1.5"]),
        ];

        assert_eq!(
            best_address(&adapters, Some("eth0")),
            Some(ip("192.168.1.5"))
        );
    }

    #[test]
    fn unknown_preferred_name_falls_through() {
        let adapters = vec![adapter("eth0", vec!["10.0.0.9"])];

        assert_eq!(
            best_address(&adapters, Some("does-not-exist")),
            Some(ip("10.0.0.9"))
        );
    }

    #[test]
    fn down_preferred_adapter_is_ignored() {
        let mut preferred = adapter("eth0", vec!["192.168.1.5"]);
        preferred.is_up = false;
        let adapters = vec![preferred, adapter("wlan0", vec!["10.0.0.9"])];

        assert_eq!(
            best_address(&adapters, Some("eth0")),
            Some(ip("10.0.0.9"))
        );
    }

    #[test]
    fn empty_preferred_name_behaves_like_none() {
        let adapters = vec![
            adapter("eth0", vec!["10.0.0.9"]),
            adapter("wlan0", vec!["192.168.1.5"]),
        ];

        assert_eq!(best_address(&adapters, Some("")), Some(ip("192.168.1.5")));
    }

    #[test]
    fn preferred_pass_picks_best_within_that_adapter() {
        let adapters = vec![adapter("eth0", vec!["172.16.9.9", "192.168.7.7"])];

        assert_eq!(
            best_address(&adapters, Some("eth0")),
            Some(ip("192.168.7.7"))
        );
    }
}

mod local_resolver {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockEnumerator {
        results: Mutex<VecDeque<Result<Vec<AdapterRecord>, EnumerationError>>>,
    }

    impl MockEnumerator {
        fn new(results: Vec<Result<Vec<AdapterRecord>, EnumerationError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
            }
        }
    }

    impl AdapterEnumerator for MockEnumerator {
        fn enumerate(&self) -> Result<Vec<AdapterRecord>, EnumerationError> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    #[test]
    fn resolver_returns_best_address() {
        let enumerator = MockEnumerator::new(vec![Ok(vec![adapter(
            "eth0",
            vec!["192.168.1.5"],
        )])]);
        let resolver = LocalResolver::new(enumerator);

        assert_eq!(resolver.resolve(None), Some(ip("192.168.1.5")));
    }

    #[test]
    fn enumeration_failure_degrades_to_none() {
        let enumerator = MockEnumerator::new(vec![Err(EnumerationError::Platform {
            message: "boom".to_string(),
        })]);
        let resolver = LocalResolver::new(enumerator);

        assert_eq!(resolver.resolve(None), None);
    }

    #[test]
    fn resolver_passes_preferred_hint_through() {
        let enumerator = MockEnumerator::new(vec![Ok(vec![
            adapter("eth0", vec!["192.168.1.5"]),
            adapter("wlan0", vec!["10.0.0.9"]),
        ])]);
        let resolver = LocalResolver::new(enumerator);

        assert_eq!(resolver.resolve(Some("wlan0")), Some(ip("10.0.0.9")));
    }
}
