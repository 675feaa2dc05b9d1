//! Lookup fetch trait and the production reqwest implementation.

use std::time::Duration;

use url::Url;

use super::LookupError;

/// Default lookup service host.
pub const DEFAULT_HOST: &str = "ipinfo.io";

/// Default lookup service path (answers with a flat JSON object).
pub const DEFAULT_PATH: &str = "/json";

/// Where and how to reach the lookup service.
///
/// One endpoint describes a single HTTPS GET: host, path, and the
/// connect/send/receive timeout triple. The fetch collaborator owns
/// timeout enforcement; nothing above it cancels an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEndpoint {
    /// Service host name (no scheme).
    pub host: String,
    /// Request path, with leading slash.
    pub path: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Request send timeout.
    pub send_timeout: Duration,
    /// Response receive timeout.
    pub receive_timeout: Duration,
}

impl Default for LookupEndpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            path: DEFAULT_PATH.to_string(),
            connect_timeout: Duration::from_secs(3),
            send_timeout: Duration::from_secs(3),
            receive_timeout: Duration::from_secs(5),
        }
    }
}

impl LookupEndpoint {
    /// Total time budget for one request past the connect phase.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.send_timeout.saturating_add(self.receive_timeout)
    }

    /// Builds the HTTPS URL for this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidUrl`] when host and path do not
    /// form a valid URL.
    pub fn url(&self) -> Result<Url, LookupError> {
        let raw = format!("https://{}{}", self.host, self.path);
        Url::parse(&raw).map_err(|e| LookupError::InvalidUrl(format!("{raw}: {e}")))
    }
}

/// Trait for performing one external lookup request.
///
/// # Design
///
/// - A fetch is a single HTTPS GET returning the raw response body;
///   parsing belongs to the caller
/// - Implementations enforce their own timeouts and surface expiry as
///   [`LookupError::Timeout`]
/// - Enables dependency injection for testing the cache with scripted
///   responses
pub trait LookupFetcher: Send + Sync {
    /// Performs the GET described by `endpoint` and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on connection failure, timeout, bad
    /// status, or invalid endpoint configuration.
    fn fetch(
        &self,
        endpoint: &LookupEndpoint,
    ) -> impl std::future::Future<Output = Result<String, LookupError>> + Send;
}

/// Production lookup fetcher using reqwest.
///
/// A thin wrapper around `reqwest::Client` applying the endpoint's
/// timeout triple: the connect timeout is a client-level option (set
/// via [`ReqwestFetcher::for_endpoint`]), while send plus receive
/// bound each request's total time.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    inner: reqwest::Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher with default client configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a fetcher whose client honors the endpoint's connect
    /// timeout.
    ///
    /// Falls back to a default client if the builder fails, which only
    /// happens when the TLS backend cannot initialize.
    #[must_use]
    pub fn for_endpoint(endpoint: &LookupEndpoint) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(endpoint.connect_timeout)
            .build()
            .unwrap_or_default();
        Self { inner: client }
    }

    /// Creates a fetcher from an existing reqwest client.
    ///
    /// Useful when custom TLS or proxy configuration is needed.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl LookupFetcher for ReqwestFetcher {
    async fn fetch(&self, endpoint: &LookupEndpoint) -> Result<String, LookupError> {
        let url = endpoint.url()?;

        let response = self
            .inner
            .get(url)
            .timeout(endpoint.request_timeout())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Timeout
                } else {
                    LookupError::Connection(Box::new(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Connection(Box::new(e))
            }
        })
    }
}
