//! Application execution logic.
//!
//! This module contains the async display loop that resolves the best
//! local address and the cached external address, and prints the
//! composed line on every tick.

use std::sync::Arc;

use thiserror::Error;
use tokio::signal;

use ipglance::config::ValidatedConfig;
use ipglance::display::{DisplayComposer, DisplayOptions};
use ipglance::lookup::{ExternalIpCache, LookupError, ReqwestFetcher};
use ipglance::network::platform::PlatformEnumerator;
use ipglance::time::SystemClock;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configured lookup endpoint does not form a valid URL.
    #[error("Invalid lookup endpoint: {0}")]
    InvalidEndpoint(#[source] LookupError),
}

/// Executes the main application loop.
///
/// This function:
/// 1. Validates the lookup endpoint
/// 2. Builds the platform enumerator, external cache, and composer
/// 3. Prints the display line once, or on every poll tick until a
///    shutdown signal (Ctrl+C / SIGTERM)
///
/// # Errors
///
/// Returns an error if the configured endpoint is not a valid URL.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires
/// platform network APIs and a real async runtime with signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    // Reject a bad host/path combination before the first tick
    config.endpoint.url().map_err(RunError::InvalidEndpoint)?;

    let enumerator = Arc::new(PlatformEnumerator::default());
    let fetcher = ReqwestFetcher::for_endpoint(&config.endpoint);
    let cache = ExternalIpCache::new(
        Arc::clone(&enumerator),
        SystemClock,
        config.endpoint.clone(),
    );

    let options = DisplayOptions {
        show_local: config.show_local,
        show_external: config.show_external,
        preferred_adapter: config.preferred_adapter.clone(),
        separator: config.separator.clone(),
        fallback: config.fallback.clone(),
        refresh: config.refresh,
    };
    let composer = DisplayComposer::new(Arc::clone(&enumerator), &cache, options);

    if config.once {
        println!("{}", composer.compose_line(&fetcher, false).await);
        return Ok(());
    }

    tracing::info!(
        "Display loop started (tick every {}s)",
        config.poll_interval.as_secs()
    );

    let mut ticker = tokio::time::interval(config.poll_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(());
            }

            _ = ticker.tick() => {
                println!("{}", composer.compose_line(&fetcher, false).await);
            }
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
