//! Bounded concurrent fetching
//!
//! Fetches a batch of records by id with at most `pool_size` requests in
//! flight, drops the ids whose fetch fails, and returns the rest in the
//! order the ids were given.

mod fetcher;

pub use fetcher::{FanoutFetcher, DEFAULT_POOL_SIZE};

#[cfg(test)]
mod tests;
