//! Time abstraction for testability.
//!
//! All cache refresh decisions compare timestamps taken through the
//! [`Clock`] trait instead of calling [`SystemTime::now()`] directly,
//! so tests can simulate elapsed time deterministically.

use std::time::SystemTime;

/// Abstraction over system time.
///
/// Production code uses [`SystemClock`]; tests inject a manual clock
/// and advance it explicitly between calls.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Production clock delegating to [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> SystemTime {
        (**self).now()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::ManualClock;
    use super::*;
    use std::time::Duration;

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = SystemTime::now();
        let result = clock.now();
        let after = SystemTime::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }

    #[test]
    fn manual_clock_starts_at_initial_time() {
        let clock = ManualClock::new(1_000);
        assert_eq!(
            clock.now(),
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_000)
        );
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(0);

        clock.advance(300);
        assert_eq!(
            clock.now(),
            SystemTime::UNIX_EPOCH + Duration::from_secs(300)
        );

        clock.advance(10);
        assert_eq!(
            clock.now(),
            SystemTime::UNIX_EPOCH + Duration::from_secs(310)
        );
    }
}
