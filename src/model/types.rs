//! Record types
//!
//! Missing or `null` fields decode to their defaults and unknown fields
//! are ignored, so partial payloads (e.g. `{"id": 11}`) decode cleanly.

use crate::types::{ActivityId, AthleteId, SegmentEffortId, SegmentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record that carries an activity id.
///
/// List endpoints return records newest first: ids strictly decrease within
/// a page and keep decreasing across consecutive pages. The page walk relies
/// on this ordering and cannot verify it.
pub trait ActivityRecord {
    /// Id of the activity this record describes
    fn id(&self) -> ActivityId;
}

// ============================================================================
// Athlete
// ============================================================================

/// Relationship between the authenticated athlete and another athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipState {
    #[default]
    #[serde(rename = "")]
    Unset,
    Pending,
    Accepted,
    Blocked,
}

/// Athlete reference embedded in summaries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Athlete {
    #[serde(deserialize_with = "null_as_default")]
    pub id: AthleteId,
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub friend: RelationshipState,
    #[serde(deserialize_with = "null_as_default")]
    pub follower: RelationshipState,
}

// ============================================================================
// Activity Summary
// ============================================================================

/// Lightweight activity projection returned by list endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySummary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ActivityId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub athlete: Option<Athlete>,
    pub start_date: Option<DateTime<Utc>>,
    pub start_date_local: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub moving_time: u32,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed_time: u32,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub average_speed: f64,
    /// Meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub max_speed: f64,
}

impl ActivityRecord for ActivitySummary {
    fn id(&self) -> ActivityId {
        self.id
    }
}

// ============================================================================
// Activity
// ============================================================================

/// Full activity record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: ActivityId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub start_date: Option<DateTime<Utc>>,
    pub start_date_local: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub moving_time: u32,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed_time: u32,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub average_speed: f64,
    /// Meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub max_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub segment_efforts: Vec<SegmentEffort>,
}

impl Activity {
    /// Create an otherwise empty activity with the given id
    pub fn with_id(id: impl Into<ActivityId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl ActivityRecord for Activity {
    fn id(&self) -> ActivityId {
        self.id
    }
}

// ============================================================================
// Segments
// ============================================================================

/// A named stretch of road or trail
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: SegmentId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub elevation_low: f64,
    /// Meters
    #[serde(deserialize_with = "null_as_default")]
    pub elevation_high: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_grade: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub maximum_grade: f64,
    /// 0 (hardest) to 5 (easiest)
    #[serde(deserialize_with = "null_as_default")]
    pub climb_category: u8,
}

/// One traversal of a segment within an activity
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentEffort {
    #[serde(deserialize_with = "null_as_default")]
    pub id: SegmentEffortId,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed_time: u32,
    pub start_date: Option<DateTime<Utc>>,
    pub start_date_local: Option<DateTime<Utc>>,
    pub pr_rank: Option<u32>,
    pub kom_rank: Option<u32>,
    pub segment: Option<Segment>,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
