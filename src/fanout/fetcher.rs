//! Fan-out/fan-in fetcher

use crate::error::Result;
use crate::model::ActivityRecord;
use crate::types::ActivityId;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

/// Simultaneous in-flight fetches
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Fetches many records by id through a fixed-size pool
#[derive(Debug, Clone, Copy)]
pub struct FanoutFetcher {
    pool_size: usize,
}

impl FanoutFetcher {
    /// Create a fetcher allowing `pool_size` concurrent fetches (at least 1)
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool_size: pool_size.max(1),
        }
    }

    /// Maximum number of fetches in flight
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Fetch the record for every distinct id in `ids`.
    ///
    /// Each distinct id is fetched once. Failed fetches are dropped without
    /// an error; the survivors come back in the relative order of `ids`.
    /// Returns only after every fetch has finished.
    pub async fn fetch_many<R, F, Fut>(&self, ids: &[ActivityId], fetch: F) -> Vec<R>
    where
        R: ActivityRecord + Send + 'static,
        F: Fn(ActivityId) -> Fut,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        let slots = Arc::new(Semaphore::new(self.pool_size));
        let mut in_flight = JoinSet::new();
        let mut submitted = HashSet::with_capacity(ids.len());

        for &id in ids {
            if !submitted.insert(id) {
                continue;
            }

            // Wait for a free slot; the permit is released when the fetch ends
            let Ok(permit) = Arc::clone(&slots).acquire_owned().await else {
                break;
            };
            let request = fetch(id);
            in_flight.spawn(async move {
                let result = request.await;
                drop(permit);
                (id, result)
            });
        }

        // Only this task writes to the table
        let mut fetched: HashMap<ActivityId, R> = HashMap::with_capacity(submitted.len());
        let mut failed = 0usize;
        while let Some(joined) = in_flight.join_next().await {
            match collect(joined) {
                Some(record) => {
                    fetched.insert(record.id(), record);
                }
                None => failed += 1,
            }
        }

        info!(
            "Fetched {} of {} records ({} failed)",
            fetched.len(),
            submitted.len(),
            failed
        );

        ids.iter().filter_map(|id| fetched.remove(id)).collect()
    }
}

impl Default for FanoutFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

fn collect<R>(joined: std::result::Result<(ActivityId, Result<R>), JoinError>) -> Option<R> {
    match joined {
        Ok((_, Ok(record))) => Some(record),
        Ok((id, Err(e))) => {
            debug!("Dropping {}: {}", id, e);
            None
        }
        Err(e) => {
            warn!("Fetch task did not complete: {}", e);
            None
        }
    }
}
