//! Delimited text output

use crate::model::{Activity, ActivitySummary};
use chrono::{DateTime, Utc};
use std::io::{self, Write};

/// One row per summary: id, name, distance, average speed, elevation gain,
/// moving time, elapsed time, start date
pub fn summary_rows(summaries: &[ActivitySummary]) -> Vec<Vec<String>> {
    summaries
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                format!("{:.2}", s.distance),
                format!("{:.2}", s.average_speed),
                format!("{:.2}", s.total_elevation_gain),
                s.moving_time.to_string(),
                s.elapsed_time.to_string(),
                timestamp(s.start_date.as_ref()),
            ]
        })
        .collect()
}

/// One row per segment effort: activity id, activity name, effort id,
/// segment id, segment name, segment distance, climb category, elapsed
/// time, PR rank, start date
pub fn segment_rows(activities: &[Activity]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for activity in activities {
        for effort in &activity.segment_efforts {
            let (segment_id, segment_name, segment_distance, climb_category) =
                match &effort.segment {
                    Some(segment) => (
                        segment.id.to_string(),
                        segment.name.clone(),
                        format!("{:.2}", segment.distance),
                        segment.climb_category.to_string(),
                    ),
                    None => Default::default(),
                };

            rows.push(vec![
                activity.id.to_string(),
                activity.name.clone(),
                effort.id.to_string(),
                segment_id,
                segment_name,
                segment_distance,
                climb_category,
                effort.elapsed_time.to_string(),
                effort.pr_rank.map(|r| r.to_string()).unwrap_or_default(),
                timestamp(effort.start_date.as_ref()),
            ]);
        }
    }
    rows
}

/// Write `rows` separated by `delimiter`, one per line.
///
/// Fields containing the delimiter, a quote or a line break, or starting
/// with whitespace, are quoted with embedded quotes doubled. So is `\.`.
pub fn write_rows<W: Write>(out: &mut W, delimiter: char, rows: &[Vec<String>]) -> io::Result<()> {
    for row in rows {
        let line = row
            .iter()
            .map(|field| quote(field, delimiter))
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn needs_quotes(field: &str, delimiter: char) -> bool {
    field == r"\."
        || field.contains(delimiter)
        || field.contains(['"', '\n', '\r'])
        || field.starts_with(char::is_whitespace)
}

fn quote(field: &str, delimiter: char) -> String {
    if needs_quotes(field, delimiter) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn timestamp(value: Option<&DateTime<Utc>>) -> String {
    value.map(DateTime::to_rfc3339).unwrap_or_default()
}
