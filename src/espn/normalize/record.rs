use serde_json::Value;

use crate::core::json::{number_or_null, to_trimmed_string};
use crate::espn::types::{ParsedTeamRecord, TeamRecordStats};


/// Stat names recognized in a record item's `stats` array.
const STAT_NAMES: [&str; 9] = [
    "wins",
    "losses",
    "ties",
    "streak",
    "pointsFor",
    "pointsAgainst",
    "avgPointsFor",
    "avgPointsAgainst",
    "pointDifferential",
];

fn assign(stats: &mut TeamRecordStats, name: &str, value: f64) {
    match name {
        "wins" => stats.wins = Some(value),
        "losses" => stats.losses = Some(value),
        "ties" => stats.ties = Some(value),
        "streak" => stats.streak = Some(value),
        "pointsFor" => stats.points_for = Some(value),
        "pointsAgainst" => stats.points_against = Some(value),
        "avgPointsFor" => stats.avg_points_for = Some(value),
        "avgPointsAgainst" => stats.avg_points_against = Some(value),
        "pointDifferential" => stats.point_differential = Some(value),
        _ => {}
    }
}

fn present(stats: TeamRecordStats) -> Option<TeamRecordStats> {
    if stats.is_empty() {
        None
    } else {
        Some(stats)
    }
}

/// Flat-object path: stat keys read directly off one object. Used when
/// rehydrating cached data. `None` when zero fields populate.
pub fn normalize_record_stats(raw: Option<&Value>) -> Option<TeamRecordStats> {
    let raw = raw?;
    if !raw.is_object() {
        return None;
    }

    let mut stats = TeamRecordStats::default();
    for name in STAT_NAMES {
        if let Some(value) = number_or_null(raw.get(name)) {
            assign(&mut stats, name, value);
        }
    }
    present(stats)
}

/// Array path: `{name, value}` entries mapped through the fixed name table.
/// Used for the live API's nested record items. `None` when zero fields
/// populate.
pub fn extract_record_stats(raw: Option<&Value>) -> Option<TeamRecordStats> {
    let entries = raw?.as_array()?;

    let mut stats = TeamRecordStats::default();
    for entry in entries {
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
            continue;
        };
        if let Some(value) = number_or_null(entry.get("value")) {
            assign(&mut stats, name, value);
        }
    }
    present(stats)
}

/// Find the overall record among `team.record.items` and pair its summary
/// with the parsed counters.
///
/// The first item whose `type` is `"total"` or whose `description` is
/// `"Overall Record"` wins; the scan stops there even if the item yields no
/// stats. `team.recordSummary` backfills a missing item summary.
pub fn parse_team_record(team: &Value) -> ParsedTeamRecord {
    let record_summary = to_trimmed_string(team.get("recordSummary"));

    let item = team
        .get("record")
        .and_then(|r| r.get("items"))
        .and_then(Value::as_array)
        .and_then(|items| {
            items.iter().find(|item| {
                item.get("type").and_then(Value::as_str) == Some("total")
                    || item.get("description").and_then(Value::as_str) == Some("Overall Record")
            })
        });

    match item {
        Some(item) => ParsedTeamRecord {
            summary: to_trimmed_string(item.get("summary")).or(record_summary),
            stats: extract_record_stats(item.get("stats")),
        },
        None => ParsedTeamRecord {
            summary: record_summary,
            stats: None,
        },
    }
}
