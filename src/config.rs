//! Client configuration
//!
//! Settings can come from a YAML file, from code, or both (file first,
//! then overrides). Example file:
//!
//! ```yaml
//! base_url: https://www.strava.com/api/v3
//! access_token: 0123456789abcdef
//! timeout_secs: 30
//! page_size: 100
//! pool_size: 10
//! ```

use crate::error::{Error, Result};
use crate::fanout::DEFAULT_POOL_SIZE;
use crate::http::{HttpClientConfig, DEFAULT_BASE_URL};
use crate::paging::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root that request paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for every request
    #[serde(default)]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Records requested per page on list endpoints
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Concurrent fetches for batch lookups
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("activity-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_pool_size() -> usize {
    DEFAULT_POOL_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            page_size: default_page_size(),
            pool_size: default_pool_size(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the pool size
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", format!("{}: {e}", self.base_url)))?;

        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be positive"));
        }
        if self.pool_size == 0 {
            return Err(Error::invalid_value("pool_size", "must be positive"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if matches!(&self.access_token, Some(token) if token.trim().is_empty()) {
            return Err(Error::invalid_value("access_token", "cannot be empty"));
        }

        Ok(())
    }

    /// Transport settings derived from this configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url.trim_end_matches('/'))
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent);
        if let Some(token) = &self.access_token {
            builder = builder.access_token(token);
        }
        builder.build()
    }
}
