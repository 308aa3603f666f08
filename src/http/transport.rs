//! Transport trait and URL construction

use crate::error::Result;
use crate::types::QueryParams;
use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

/// Read-only access to the remote API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Resolve a relative path and query parameters into an absolute URL.
    ///
    /// Pure: the same inputs always produce the same URL.
    fn resolve_url(&self, path: &str, params: &QueryParams) -> Result<Url>;

    /// Perform one GET and return the response body
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Bytes>;
}

/// Join `base_url` and `path`, then append `params` in key order.
///
/// An empty parameter map leaves the URL without a query string.
pub fn absolute_url(base_url: &str, path: &str, params: &QueryParams) -> Result<Url> {
    let mut url = Url::parse(&format!("{base_url}{path}"))?;
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, &value.to_string());
        }
    }
    Ok(url)
}
