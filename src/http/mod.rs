//! HTTP transport module
//!
//! Every request the client makes goes through the [`Transport`] trait:
//! resolve a relative path plus query parameters into an absolute URL,
//! then GET it and hand back the raw body.
//!
//! # Implementations
//!
//! - [`HttpTransport`]: reqwest-backed, sends the bearer token on every request
//! - [`StubTransport`]: in-memory canned responses keyed by absolute URL

mod client;
mod stub;
mod transport;

pub use client::{HttpClientConfig, HttpClientConfigBuilder, HttpTransport, DEFAULT_BASE_URL};
pub use stub::{StubResponse, StubTransport, STUB_BASE_URL};
pub use transport::{absolute_url, Transport};
