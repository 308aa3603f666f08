// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Activity API client
//!
//! A client for a paginated activity-tracking REST API.
//!
//! ## Features
//!
//! - **Paged listing**: Walk newest-first list endpoints page by page, stopping
//!   at a watermark id, and return records oldest-first
//! - **Bounded fan-out**: Fetch many activities by id with a fixed number of
//!   requests in flight, dropping failures and keeping input order
//! - **Pluggable transport**: HTTP via reqwest, or canned responses in tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use activity_client::{ActivityClient, ClientConfig, V3Client, BEGINNING};
//!
//! #[tokio::main]
//! async fn main() -> activity_client::Result<()> {
//!     let config = ClientConfig::default().with_access_token("0123456789abcdef");
//!     let client = V3Client::from_config(&config)?;
//!
//!     let summaries = client.get_activity_summaries(BEGINNING).await?;
//!     let ids: Vec<_> = summaries.iter().map(|s| s.id).collect();
//!     let activities = client.get_activities(&ids).await;
//!
//!     for activity in activities {
//!         println!("{} has {} efforts", activity.name, activity.segment_efforts.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    ActivityClient                        │
//! │  get_activity_summaries   get_activity   get_activities  │
//! │  get_related_activity_summaries                          │
//! └──────────────────────────────────────────────────────────┘
//!                │                               │
//!     ┌──────────┴──────────┐         ┌──────────┴──────────┐
//!     │    PagedFetcher     │         │   FanoutFetcher     │
//!     │ watermark, reverse  │         │ K permits, reorder  │
//!     └──────────┬──────────┘         └──────────┬──────────┘
//!                └───────────────┬───────────────┘
//!                        ┌───────┴───────┐
//!                        │   Transport   │
//!                        │  HTTP / Stub  │
//!                        └───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Identifiers and query parameters
pub mod types;

/// API record types
pub mod model;

/// Response body decoding
pub mod decode;

/// Transport abstraction over HTTP
pub mod http;

/// Sequential page walks with a watermark
pub mod paging;

/// Bounded concurrent fetches
pub mod fanout;

/// The activity client
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::{ActivityClient, V3Client};
pub use config::ClientConfig;
pub use model::{Activity, ActivityRecord, ActivitySummary, Athlete, Segment, SegmentEffort};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
