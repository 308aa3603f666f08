//! Response decoding
//!
//! Turns raw response bodies into typed records. A body that fails to
//! decode is reported as [`Error::Decode`], which callers treat the same
//! way as a failed request.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Longest body prefix quoted in decode error messages
const SNIPPET_LEN: usize = 120;

/// Decode a JSON response body into `T`
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        Error::decode(format!(
            "Failed to parse JSON: {e} (body: {})",
            snippet(body)
        ))
    })
}

/// Decode one page of a list endpoint
pub fn decode_page<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    decode_json(body)
}

fn snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    match trimmed.char_indices().nth(SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
