//! Client for version 3 of the activity API

use super::ActivityClient;
use crate::config::ClientConfig;
use crate::decode::decode_json;
use crate::error::Result;
use crate::fanout::{FanoutFetcher, DEFAULT_POOL_SIZE};
use crate::http::{HttpTransport, Transport};
use crate::model::{Activity, ActivitySummary};
use crate::paging::{PagedFetcher, DEFAULT_PAGE_SIZE};
use crate::types::{ActivityId, QueryParams, BEGINNING};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Activities of the authenticated athlete
pub const ATHLETE_ACTIVITIES_PATH: &str = "/athlete/activities";

/// Path of a single activity
pub fn activity_path(id: ActivityId) -> String {
    format!("/activities/{id}")
}

/// Path of the activities related to `id`
pub fn related_activities_path(id: ActivityId) -> String {
    format!("{}/related", activity_path(id))
}

/// Client backed by the v3 HTTP API
pub struct V3Client<T: ?Sized = HttpTransport> {
    transport: Arc<T>,
    page_size: u32,
    fanout: FanoutFetcher,
}

impl<T: ?Sized> Clone for V3Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            page_size: self.page_size,
            fanout: self.fanout,
        }
    }
}

impl V3Client<HttpTransport> {
    /// Build an HTTP client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.http_config())?;
        Ok(Self::new(transport)
            .with_page_size(config.page_size)
            .with_pool_size(config.pool_size))
    }
}

impl<T: Transport> V3Client<T> {
    /// Create a client over `transport` with default page and pool sizes
    pub fn new(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }
}

impl<T: Transport + ?Sized> V3Client<T> {
    /// Create a client over a shared transport
    pub fn from_arc(transport: Arc<T>) -> Self {
        Self {
            transport,
            page_size: DEFAULT_PAGE_SIZE,
            fanout: FanoutFetcher::new(DEFAULT_POOL_SIZE),
        }
    }

    /// Set the page size for list endpoints
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the number of concurrent fetches for batch lookups
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.fanout = FanoutFetcher::new(pool_size);
        self
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn pager(&self) -> PagedFetcher<'_, T> {
        PagedFetcher::with_page_size(&*self.transport, self.page_size)
    }
}

#[async_trait]
impl<T: Transport + ?Sized + 'static> ActivityClient for V3Client<T> {
    async fn get_activity_summaries(&self, after: ActivityId) -> Result<Vec<ActivitySummary>> {
        self.pager()
            .fetch_all(ATHLETE_ACTIVITIES_PATH, after)
            .await
    }

    async fn get_activity(&self, id: ActivityId) -> Result<Activity> {
        let body = self
            .transport
            .get(&activity_path(id), &QueryParams::new())
            .await?;
        let activity: Activity = decode_json(&body)?;
        debug!(
            "Fetched activity {} with {} segment efforts",
            activity.id,
            activity.segment_efforts.len()
        );
        Ok(activity)
    }

    async fn get_activities(&self, ids: &[ActivityId]) -> Vec<Activity> {
        self.fanout
            .fetch_many(ids, |id| {
                let client = self.clone();
                async move { client.get_activity(id).await }
            })
            .await
    }

    async fn get_related_activity_summaries(
        &self,
        id: ActivityId,
    ) -> Result<Vec<ActivitySummary>> {
        self.pager()
            .fetch_all(&related_activities_path(id), BEGINNING)
            .await
    }
}

impl<T: ?Sized> std::fmt::Debug for V3Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V3Client")
            .field("page_size", &self.page_size)
            .field("pool_size", &self.fanout.pool_size())
            .finish_non_exhaustive()
    }
}
