//! HTTP retrieval of livecheck endpoints.
//!
//! [`ReleaseFetcher`] performs a single GET per call. It never retries: a
//! livecheck that fails is reported and the process exits, so a flaky
//! endpoint surfaces immediately instead of stalling a batch run.
//!
//! # Authentication
//!
//! GitHub's REST API allows 60 unauthenticated requests per hour per IP.
//! When a token is configured it is sent as `Authorization: Bearer <token>`.
//! The token is never logged.
//!
//! # Examples
//!
//! ```rust,no_run
//! use caskwatch::fetch::ReleaseFetcher;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let fetcher = ReleaseFetcher::new().with_timeout(Duration::from_secs(10));
//! let body = fetcher
//!     .fetch_text("https://api.github.com/repos/paolofrigo/my-amp-switcher/releases/latest")
//!     .await?;
//! println!("{} bytes", body.len());
//! # Ok(())
//! # }
//! ```

use reqwest::header::ACCEPT;
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::constants::{ACCEPT_HEADER, DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
use crate::core::CaskwatchError;

/// Fetches release metadata over HTTP(S).
#[derive(Debug, Clone)]
pub struct ReleaseFetcher {
    timeout: Duration,
    token: Option<String>,
    user_agent: String,
}

impl Default for ReleaseFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseFetcher {
    /// A fetcher with the default timeout and user agent and no token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Bound the whole request, connect through body, by `timeout`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `token` as a bearer token. Empty tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether requests are authenticated.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// GET `url` and return the response body.
    ///
    /// # Errors
    ///
    /// - [`CaskwatchError::NetworkError`] if `url` is not a URL, the
    ///   connection fails, or the request exceeds the timeout
    /// - [`CaskwatchError::HttpStatusError`] if the status is not 2xx
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, CaskwatchError> {
        let network_error = |reason: String| CaskwatchError::NetworkError {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| network_error(format!("invalid URL: {e}")))?;

        let client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| network_error(format!("failed to build HTTP client: {e}")))?;

        let mut request = client.get(parsed).header(ACCEPT, ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!(
            "Fetching {} (timeout {:?}, authenticated: {})",
            url,
            self.timeout,
            self.has_token()
        );
        let response =
            request.send().await.map_err(|e| network_error(self.describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} answered HTTP {}", url, status);
            return Err(CaskwatchError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| network_error(self.describe(&e)))?;
        debug!("Received {} bytes from {} (HTTP {})", body.len(), url, status);

        Ok(body.to_vec())
    }

    /// GET `url` and decode the body as UTF-8, replacing invalid sequences.
    ///
    /// # Errors
    ///
    /// Same as [`ReleaseFetcher::fetch`].
    pub async fn fetch_text(&self, url: &str) -> Result<String, CaskwatchError> {
        let body = self.fetch(url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Flatten a reqwest error and its sources into one line.
    fn describe(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            return format!("request timed out after {}s", self.timeout.as_secs_f64());
        }

        let mut reason = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            reason.push_str(": ");
            reason.push_str(&cause.to_string());
            source = cause.source();
        }
        reason
    }
}
