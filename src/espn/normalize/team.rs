use serde_json::Value;

use crate::core::json::{number_or_null, to_trimmed_string};
use crate::espn::normalize::event::normalize_next_event;
use crate::espn::types::TeamMeta;


/// Build the team descriptor from the `team` subtree.
///
/// Always returns a full struct; a non-object input just leaves every field
/// null. The next event comes from the first entry of the `nextEvent` array,
/// matched against the team's own `id`.
pub fn normalize_team_meta(team: &Value) -> TeamMeta {
    let own_id = to_trimmed_string(team.get("id"));

    let next_event = team
        .get("nextEvent")
        .and_then(Value::as_array)
        .and_then(|events| events.first())
        .and_then(|event| normalize_next_event(event, own_id.as_deref()));

    TeamMeta {
        rank: number_or_null(team.get("rank")),
        standing_summary: to_trimmed_string(team.get("standingSummary")),
        display_name: to_trimmed_string(team.get("displayName")),
        short_display_name: to_trimmed_string(team.get("shortDisplayName")),
        location: to_trimmed_string(team.get("location")),
        nickname: to_trimmed_string(team.get("nickname")),
        abbreviation: to_trimmed_string(team.get("abbreviation")),
        color: to_trimmed_string(team.get("color")),
        alternate_color: to_trimmed_string(team.get("alternateColor")),
        next_event,
    }
}
