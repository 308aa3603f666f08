//! Tests for the fanout module

use super::*;
use crate::error::Error;
use crate::model::Activity;
use crate::types::ActivityId;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn ids(raw: &[i64]) -> Vec<ActivityId> {
    raw.iter().copied().map(ActivityId).collect()
}

fn ids_of(records: &[Activity]) -> Vec<i64> {
    records.iter().map(|a| a.id.get()).collect()
}

/// Tracks how many calls are running at once
#[derive(Default)]
struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl InFlight {
    fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }
}

#[test]
fn test_pool_size_defaults_and_floor() {
    assert_eq!(FanoutFetcher::default().pool_size(), DEFAULT_POOL_SIZE);
    assert_eq!(FanoutFetcher::new(0).pool_size(), 1);
    assert_eq!(FanoutFetcher::new(4).pool_size(), 4);
}

#[tokio::test]
async fn test_fetch_many_all_succeed_in_input_order() {
    let input = ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    let fetched = FanoutFetcher::default()
        .fetch_many(&input, |id| async move {
            // Later ids finish first
            tokio::time::sleep(Duration::from_millis(20 - id.get() as u64)).await;
            Ok(Activity::with_id(id))
        })
        .await;

    assert_eq!(fetched.len(), 10);
    for (i, activity) in fetched.iter().enumerate() {
        assert_eq!(activity.id, input[i]);
    }
}

#[tokio::test]
async fn test_fetch_many_drops_failures_silently() {
    let input = ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    let fetched = FanoutFetcher::default()
        .fetch_many(&input, |id| async move {
            if id == ActivityId(5) {
                Err(Error::http_status(404, "Record Not Found"))
            } else {
                Ok(Activity::with_id(id))
            }
        })
        .await;

    assert_eq!(ids_of(&fetched), vec![1, 2, 3, 4, 6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_fetch_many_all_fail() {
    let fetched: Vec<Activity> = FanoutFetcher::new(3)
        .fetch_many(&ids(&[1, 2, 3]), |_| async {
            Err(Error::other("connection reset"))
        })
        .await;

    assert!(fetched.is_empty());
}

#[tokio::test]
async fn test_fetch_many_empty_input() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let fetched = FanoutFetcher::default()
        .fetch_many(&[], move |id| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(Activity::with_id(id)) }
        })
        .await;

    assert!(fetched.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetch_many_preserves_unsorted_input_order() {
    let input = ids(&[42, 7, 19, 3, 88, 1]);

    let fetched = FanoutFetcher::new(2)
        .fetch_many(&input, |id| async move { Ok(Activity::with_id(id)) })
        .await;

    assert_eq!(ids_of(&fetched), vec![42, 7, 19, 3, 88, 1]);
}

#[tokio::test]
async fn test_fetch_many_duplicates_fetched_and_emitted_once() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requested);
    let input = ids(&[3, 1, 3, 2, 1]);

    let fetched = FanoutFetcher::default()
        .fetch_many(&input, move |id| {
            log.lock().unwrap().push(id);
            async move { Ok(Activity::with_id(id)) }
        })
        .await;

    assert_eq!(ids_of(&fetched), vec![3, 1, 2]);
    let mut requested = requested.lock().unwrap().clone();
    requested.sort();
    assert_eq!(requested, ids(&[1, 2, 3]));
}

/// Arbitrary duplicates and failures: output is the input order restricted
/// to ids that succeeded, first occurrence only.
#[tokio::test]
async fn test_fetch_many_order_matches_input_restricted_to_successes() {
    let input = ids(&[9, 4, 4, 12, 7, 1, 9, 15, 3, 12, 6, 8]);
    let failing: HashSet<ActivityId> = ids(&[4, 15, 6]).into_iter().collect();

    for pool_size in [1, 2, 5, 10] {
        let failing_ids = failing.clone();
        let fetched = FanoutFetcher::new(pool_size)
            .fetch_many(&input, move |id| {
                let fails = failing_ids.contains(&id);
                async move {
                    tokio::time::sleep(Duration::from_millis((id.get() % 4) as u64)).await;
                    if fails {
                        Err(Error::other("boom"))
                    } else {
                        Ok(Activity::with_id(id))
                    }
                }
            })
            .await;

        let mut seen = HashSet::new();
        let expected: Vec<i64> = input
            .iter()
            .filter(|id| !failing.contains(*id) && seen.insert(**id))
            .map(|id| id.get())
            .collect();
        assert_eq!(ids_of(&fetched), expected, "pool_size={pool_size}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fetch_many_never_exceeds_pool_size() {
    let tracker = Arc::new(InFlight::default());
    let probe = Arc::clone(&tracker);
    let input: Vec<ActivityId> = (1..=50).map(ActivityId).collect();

    let fetched = FanoutFetcher::new(10)
        .fetch_many(&input, move |id| {
            let probe = Arc::clone(&probe);
            async move {
                probe.enter();
                tokio::time::sleep(Duration::from_millis(5)).await;
                probe.exit();
                Ok(Activity::with_id(id))
            }
        })
        .await;

    assert_eq!(fetched.len(), 50);
    assert_eq!(tracker.calls.load(Ordering::SeqCst), 50);
    assert_eq!(tracker.current.load(Ordering::SeqCst), 0);
    let peak = tracker.peak.load(Ordering::SeqCst);
    assert!(peak <= 10, "peak in-flight was {peak}");
    assert!(peak > 1, "fetches never overlapped");
}

#[tokio::test]
async fn test_fetch_many_waits_for_every_fetch() {
    let finished = Arc::new(AtomicUsize::new(0));
    let done = Arc::clone(&finished);
    let input: Vec<ActivityId> = (1..=12).map(ActivityId).collect();

    let fetched = FanoutFetcher::new(4)
        .fetch_many(&input, move |id| {
            let done = Arc::clone(&done);
            async move {
                tokio::time::sleep(Duration::from_millis(3)).await;
                done.fetch_add(1, Ordering::SeqCst);
                if id.get() % 3 == 0 {
                    Err(Error::other("lost"))
                } else {
                    Ok(Activity::with_id(id))
                }
            }
        })
        .await;

    assert_eq!(finished.load(Ordering::SeqCst), 12);
    assert_eq!(ids_of(&fetched), vec![1, 2, 4, 5, 7, 8, 10, 11]);
}

#[tokio::test]
async fn test_fetch_many_survives_panicking_fetch() {
    let input = ids(&[1, 2, 3]);

    let fetched = FanoutFetcher::default()
        .fetch_many(&input, |id| async move {
            assert!(id != ActivityId(2), "fetch for 2 panicked");
            Ok(Activity::with_id(id))
        })
        .await;

    assert_eq!(ids_of(&fetched), vec![1, 3]);
}
