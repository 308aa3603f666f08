//! In-memory transport with canned responses
//!
//! Responses are keyed by absolute URL, so a stub registered for
//! `?page=1&per_page=100` only answers exactly that request. Every request
//! is logged, which lets tests assert on what was (and was not) fetched.

use super::transport::{absolute_url, Transport};
use crate::error::{Error, Result};
use crate::types::QueryParams;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use url::Url;

/// Base URL used by [`StubTransport::new`]
pub const STUB_BASE_URL: &str = "http://test";

/// A canned response
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// Successful response with this body
    Body(Bytes),
    /// Non-success response with this status
    Status(u16),
}

/// Transport that serves canned responses
#[derive(Debug)]
pub struct StubTransport {
    base_url: String,
    responses: HashMap<String, StubResponse>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    /// Create an empty stub rooted at [`STUB_BASE_URL`]
    pub fn new() -> Self {
        Self::with_base_url(STUB_BASE_URL)
    }

    /// Create an empty stub rooted at `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Register a body for the request `path` + `params`
    pub fn stub_body(
        &mut self,
        path: &str,
        params: &QueryParams,
        body: impl Into<Bytes>,
    ) -> Result<()> {
        let url = self.resolve_url(path, params)?;
        self.responses
            .insert(url.into(), StubResponse::Body(body.into()));
        Ok(())
    }

    /// Register a failure status for the request `path` + `params`
    pub fn stub_status(&mut self, path: &str, params: &QueryParams, status: u16) -> Result<()> {
        let url = self.resolve_url(path, params)?;
        self.responses.insert(url.into(), StubResponse::Status(status));
        Ok(())
    }

    /// Absolute URLs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether `url` has been requested
    pub fn was_requested(&self, url: &Url) -> bool {
        self.requests().iter().any(|r| r == url.as_str())
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for StubTransport {
    fn resolve_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
        absolute_url(&self.base_url, path, params)
    }

    async fn get(&self, path: &str, params: &QueryParams) -> Result<Bytes> {
        let url = self.resolve_url(path, params)?;
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        match self.responses.get(url.as_str()) {
            Some(StubResponse::Body(body)) => Ok(body.clone()),
            Some(StubResponse::Status(status)) => {
                Err(Error::http_status(*status, "stubbed failure"))
            }
            None => Err(Error::other(format!("No stubbed response for {url}"))),
        }
    }
}
