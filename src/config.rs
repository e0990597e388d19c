//! Configuration for the catalog client.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Public demo catalog used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
/// Environment variable holding the catalog base URL.
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";
/// Environment variable holding the request timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "CATALOG_TIMEOUT_SECS";
/// Transport-level timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings used to build a [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the catalog service, always ending with `/`.
    pub base_url: Url,
    /// Timeout for a single request, connect included.
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Builds a config pointing at `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url.to_string()));
        }
        Ok(Self {
            base_url: normalize_base(parsed),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Points at the public demo catalog, [`DEFAULT_BASE_URL`].
    pub fn demo() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Reads [`BASE_URL_ENV`] and [`TIMEOUT_ENV`], falling back to the defaults
    /// for unset or empty variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = non_empty(BASE_URL_ENV);
        let mut config = Self::new(base_url.as_deref().map_or(DEFAULT_BASE_URL, str::trim))?;

        if let Some(raw) = non_empty(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?;
            config.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(
            base_url = %config.base_url,
            timeout = ?config.timeout,
            "loaded catalog config"
        );
        Ok(config)
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
