//! Page walk bookkeeping
//!
//! Filtering and completion rules, kept free of I/O.

use crate::model::ActivityRecord;
use crate::types::ActivityId;

/// Result of checking whether the walk is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Request the next page
    Continue,
    /// No later page can hold new records
    Stop,
}

impl StopResult {
    /// Check if we should continue
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Tracks progress through the pages of one walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Page to request next (1-based)
    pub page: i64,
    /// Records received across all pages, before filtering
    pub total_received: u64,
    /// Records kept across all pages
    pub total_kept: u64,
    /// Is the walk complete?
    pub done: bool,
}

impl PageState {
    /// Create state positioned at the first page
    pub fn new() -> Self {
        Self {
            page: 1,
            total_received: 0,
            total_kept: 0,
            done: false,
        }
    }

    /// Record the outcome of one page
    pub fn record_page(&mut self, received: usize, kept: usize) {
        self.total_received += received as u64;
        self.total_kept += kept as u64;
    }

    /// Advance to the next page
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Mark the walk as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of the leading run of `records` with ids greater than `after`.
///
/// Records are newest first, so everything from the first id `<= after`
/// onwards is already known to the caller.
pub fn newer_prefix_len<R: ActivityRecord>(records: &[R], after: ActivityId) -> usize {
    records
        .iter()
        .position(|r| r.id() <= after)
        .unwrap_or(records.len())
}

/// Decide whether a page ends the walk.
///
/// An empty page ends it, and so does a page that lost any record to the
/// watermark: every later page is older still.
pub fn check_completion(received: usize, kept: usize) -> StopResult {
    if received == 0 || kept < received {
        StopResult::Stop
    } else {
        StopResult::Continue
    }
}
