//! Activity data model
//!
//! Records decoded from API responses. A summary is the lightweight
//! projection returned by list endpoints, an activity is the full record
//! including its segment efforts.

mod types;

pub use types::{
    Activity, ActivityRecord, ActivitySummary, Athlete, RelationshipState, Segment,
    SegmentEffort,
};

#[cfg(test)]
mod tests;
