//! CLI module
//!
//! Command-line interface for pulling activity data as delimited text.
//!
//! # Commands
//!
//! - `summaries` - Activity summaries newer than a watermark
//! - `segments` - Segment efforts of those activities
//! - `activity` - Segment efforts of one activity
//! - `related` - Summaries of activities related to one activity

mod commands;
mod render;
mod runner;

pub use commands::{Cli, Commands};
pub use render::{segment_rows, summary_rows, write_rows};
pub use runner::Runner;
