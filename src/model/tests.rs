//! Tests for the data model

use super::*;
use crate::types::{ActivityId, AthleteId, SegmentEffortId, SegmentId};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

const ATHLETE_ACTIVITIES: &str = include_str!("../../tests/fixtures/athlete_activities.json");
const RELATED_ACTIVITIES: &str = include_str!("../../tests/fixtures/related_activities.json");
const ACTIVITY: &str = include_str!("../../tests/fixtures/activity.json");

// ============================================================================
// Summary Tests
// ============================================================================

#[test]
fn test_summary_from_full_payload() {
    let summaries: Vec<ActivitySummary> = serde_json::from_str(ATHLETE_ACTIVITIES).unwrap();
    assert_eq!(summaries.len(), 2);

    let expected = ActivitySummary {
        id: ActivityId(203_378_452),
        name: "Gran Fondo".to_string(),
        athlete: Some(Athlete {
            id: AthleteId(471_686),
            ..Athlete::default()
        }),
        start_date: Some(Utc.with_ymd_and_hms(2014, 10, 4, 15, 7, 31).unwrap()),
        start_date_local: Some(Utc.with_ymd_and_hms(2014, 10, 4, 8, 7, 31).unwrap()),
        timezone: "(GMT-08:00) America/Los_Angeles".to_string(),
        moving_time: 21921,
        elapsed_time: 27446,
        distance: 164_918.0,
        total_elevation_gain: 2523.8,
        average_speed: 7.523,
        max_speed: 16.1,
    };
    assert_eq!(summaries[0], expected);
    assert_eq!(summaries[1].id(), ActivityId(202_315_892));
}

#[test]
fn test_summary_with_only_id() {
    let summary: ActivitySummary = serde_json::from_str(r#"{"id": 11}"#).unwrap();
    assert_eq!(summary.id(), ActivityId(11));
    assert!(summary.name.is_empty());
    assert!(summary.athlete.is_none());
    assert!(summary.start_date.is_none());
}

#[test]
fn test_athlete_relationship_states() {
    let summaries: Vec<ActivitySummary> = serde_json::from_str(RELATED_ACTIVITIES).unwrap();

    let first = summaries[0].athlete.as_ref().unwrap();
    assert_eq!(first.id, AthleteId(11_235_813));
    assert_eq!(first.firstname, "Bea");
    assert_eq!(first.friend, RelationshipState::Accepted);
    assert_eq!(first.follower, RelationshipState::Accepted);

    // Explicit nulls decode as unset
    let second = summaries[1].athlete.as_ref().unwrap();
    assert_eq!(second.friend, RelationshipState::Unset);
    assert_eq!(second.follower, RelationshipState::Unset);
}

#[test]
fn test_relationship_state_wire_names() {
    let pending: RelationshipState = serde_json::from_str(r#""pending""#).unwrap();
    assert_eq!(pending, RelationshipState::Pending);
    let blocked: RelationshipState = serde_json::from_str(r#""blocked""#).unwrap();
    assert_eq!(blocked, RelationshipState::Blocked);
    let unset: RelationshipState = serde_json::from_str(r#""""#).unwrap();
    assert_eq!(unset, RelationshipState::Unset);
}

// ============================================================================
// Activity Tests
// ============================================================================

#[test]
fn test_activity_with_segment_efforts() {
    let activity: Activity = serde_json::from_str(ACTIVITY).unwrap();

    let expected_segment = Segment {
        id: SegmentId(7_750_436),
        name: "Graton Rd., Sullivan to Facendini".to_string(),
        distance: 6086.3,
        elevation_low: 37.4,
        elevation_high: 205.2,
        average_grade: 2.4,
        maximum_grade: 13.9,
        climb_category: 0,
    };

    let expected_effort = SegmentEffort {
        id: SegmentEffortId(4_792_121_264),
        elapsed_time: 877,
        start_date: Some(Utc.with_ymd_and_hms(2014, 10, 4, 15, 38, 36).unwrap()),
        start_date_local: Some(Utc.with_ymd_and_hms(2014, 10, 4, 8, 38, 36).unwrap()),
        pr_rank: Some(1),
        kom_rank: None,
        segment: Some(expected_segment),
    };

    let expected = Activity {
        id: ActivityId(203_378_452),
        name: "Gran Fondo".to_string(),
        start_date: Some(Utc.with_ymd_and_hms(2014, 10, 4, 15, 7, 31).unwrap()),
        start_date_local: Some(Utc.with_ymd_and_hms(2014, 10, 4, 8, 7, 31).unwrap()),
        timezone: "(GMT-08:00) America/Los_Angeles".to_string(),
        moving_time: 21921,
        elapsed_time: 27446,
        distance: 164_918.0,
        total_elevation_gain: 2523.8,
        average_speed: 7.523,
        max_speed: 16.1,
        segment_efforts: vec![expected_effort],
    };

    assert_eq!(activity, expected);
}

#[test]
fn test_activity_null_segment_efforts() {
    let activity: Activity =
        serde_json::from_str(r#"{"id": 5, "segment_efforts": null}"#).unwrap();
    assert_eq!(activity, Activity::with_id(5i64));
}

#[test]
fn test_summary_null_scalars_decode_as_defaults() {
    let json = r#"{
        "id": 5,
        "name": null,
        "timezone": null,
        "moving_time": null,
        "distance": null,
        "max_speed": null,
        "athlete": {"id": null, "firstname": null, "friend": null}
    }"#;
    let summary: ActivitySummary = serde_json::from_str(json).unwrap();

    assert_eq!(
        summary,
        ActivitySummary {
            id: ActivityId(5),
            athlete: Some(Athlete::default()),
            ..ActivitySummary::default()
        }
    );
}

#[test]
fn test_segment_effort_null_scalars_decode_as_defaults() {
    let json = r#"{
        "id": 1,
        "elapsed_time": null,
        "pr_rank": null,
        "segment": {"id": 2, "name": null, "distance": null, "climb_category": null}
    }"#;
    let effort: SegmentEffort = serde_json::from_str(json).unwrap();

    assert_eq!(effort.elapsed_time, 0);
    assert_eq!(effort.pr_rank, None);
    let segment = effort.segment.unwrap();
    assert_eq!(segment.id, SegmentId(2));
    assert_eq!(segment.name, "");
    assert_eq!(segment.climb_category, 0);
}

#[test]
fn test_activity_serializes_back_to_same_record() {
    let activity = Activity::with_id(42i64);
    let json = serde_json::to_string(&activity).unwrap();
    let decoded: Activity = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.id(), ActivityId(42));
}
