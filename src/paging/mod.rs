//! Page walking for newest-first list endpoints
//!
//! List endpoints take a 1-based `page` and a fixed `per_page` and have no
//! cursor. Records arrive newest first, so a watermark id cuts every page
//! into a prefix of new records and a stale remainder.
//!
//! # Overview
//!
//! [`PagedFetcher::fetch_all`] requests pages one at a time, keeps the new
//! prefix of each, stops at the first empty or partially stale page, and
//! returns everything oldest first.

mod fetcher;
mod types;

pub use fetcher::{PagedFetcher, DEFAULT_PAGE_SIZE};
pub use types::{check_completion, newer_prefix_len, PageState, StopResult};
