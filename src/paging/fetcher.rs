//! Sequential page walker

use super::types::{check_completion, newer_prefix_len, PageState};
use crate::decode::decode_page;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::model::ActivityRecord;
use crate::types::{query_params, ActivityId};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Walks a newest-first list endpoint one page at a time
#[derive(Debug)]
pub struct PagedFetcher<'a, T: ?Sized> {
    transport: &'a T,
    page_size: u32,
}

impl<'a, T: Transport + ?Sized> PagedFetcher<'a, T> {
    /// Create a fetcher using [`DEFAULT_PAGE_SIZE`]
    pub fn new(transport: &'a T) -> Self {
        Self::with_page_size(transport, DEFAULT_PAGE_SIZE)
    }

    /// Create a fetcher with a custom page size
    pub fn with_page_size(transport: &'a T, page_size: u32) -> Self {
        Self {
            transport,
            page_size,
        }
    }

    /// Records requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch every record at `path` with an id greater than `after`,
    /// oldest first.
    ///
    /// Any failed page fails the whole walk; no partial results are
    /// returned.
    pub async fn fetch_all<R>(&self, path: &str, after: ActivityId) -> Result<Vec<R>>
    where
        R: ActivityRecord + DeserializeOwned,
    {
        let mut state = PageState::new();
        let mut records: Vec<R> = Vec::new();

        while !state.done {
            let mut page: Vec<R> = self.fetch_page(path, state.page).await?;
            let received = page.len();
            page.truncate(newer_prefix_len(&page, after));
            let kept = page.len();

            debug!(
                "{} page {}: received {}, kept {}",
                path, state.page, received, kept
            );
            state.record_page(received, kept);
            records.append(&mut page);

            if check_completion(received, kept).should_stop() {
                state.mark_done();
            } else {
                state.next_page();
            }
        }

        info!(
            "Fetched {} records from {} after {} ({} pages, {} received)",
            records.len(),
            path,
            after,
            state.page,
            state.total_received
        );

        records.reverse();
        Ok(records)
    }

    /// Fetch and decode one page, newest first.
    ///
    /// `page` is 1-based; a non-positive page fails without a request.
    pub async fn fetch_page<R>(&self, path: &str, page: i64) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        if page <= 0 {
            return Err(Error::InvalidPage { page });
        }

        let params = query_params([("per_page", i64::from(self.page_size)), ("page", page)]);
        let body = self.transport.get(path, &params).await?;
        decode_page(&body)
    }
}
