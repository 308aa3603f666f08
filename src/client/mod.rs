//! Activity API client
//!
//! [`ActivityClient`] is the public read interface. [`V3Client`] implements
//! it on top of any [`Transport`](crate::http::Transport), using
//! [`PagedFetcher`](crate::paging::PagedFetcher) for list endpoints and
//! [`FanoutFetcher`](crate::fanout::FanoutFetcher) for batch lookups.

mod v3;

pub use v3::{activity_path, related_activities_path, V3Client, ATHLETE_ACTIVITIES_PATH};

use crate::error::Result;
use crate::model::{Activity, ActivitySummary};
use crate::types::ActivityId;
use async_trait::async_trait;

/// Read operations against the activity API
#[async_trait]
pub trait ActivityClient: Send + Sync {
    /// Summaries of the authenticated athlete's activities with ids greater
    /// than `after`, oldest first. Pass [`BEGINNING`](crate::types::BEGINNING)
    /// to get all of them.
    async fn get_activity_summaries(&self, after: ActivityId) -> Result<Vec<ActivitySummary>>;

    /// A single activity by id
    async fn get_activity(&self, id: ActivityId) -> Result<Activity>;

    /// Several activities, in the order of `ids`. Activities that could not
    /// be fetched are left out.
    async fn get_activities(&self, ids: &[ActivityId]) -> Vec<Activity>;

    /// Summaries of activities related to `id`, oldest first
    async fn get_related_activity_summaries(&self, id: ActivityId)
        -> Result<Vec<ActivitySummary>>;
}
