use serde_json::Value;

use crate::core::json::{number_or_null, to_trimmed_string};
use crate::espn::types::TeamNextEvent;

#[cfg(test)]
mod tests;

/// The two competitor entries of a competition, split against our own
/// team id. Either side may be absent in malformed payloads.
struct Sides<'a> {
    ours: Option<&'a Value>,
    opponent: Option<&'a Value>,
}

fn competitor_team_id(competitor: &Value) -> Option<String> {
    to_trimmed_string(competitor.get("team").and_then(|t| t.get("id")))
}

fn split_competitors<'a>(competition: &'a Value, own_team_id: Option<&str>) -> Sides<'a> {
    let competitors = competition.get("competitors").and_then(Value::as_array);
    let Some(competitors) = competitors else {
        return Sides {
            ours: None,
            opponent: None,
        };
    };

    let ours = own_team_id.and_then(|own| {
        competitors
            .iter()
            .find(|c| competitor_team_id(c).as_deref() == Some(own))
    });
    let opponent = competitors
        .iter()
        .find(|c| match own_team_id {
            Some(own) => competitor_team_id(c).as_deref() != Some(own),
            None => true,
        });

    Sides { ours, opponent }
}

/// displayName → fullName → nickname → location, first non-null wins.
fn opponent_name(team: &Value) -> Option<String> {
    to_trimmed_string(team.get("displayName"))
        .or_else(|| to_trimmed_string(team.get("fullName")))
        .or_else(|| to_trimmed_string(team.get("nickname")))
        .or_else(|| to_trimmed_string(team.get("location")))
}

fn home_away(competitor: &Value) -> Option<bool> {
    let side = to_trimmed_string(competitor.get("homeAway"))?;
    if side.eq_ignore_ascii_case("home") {
        Some(true)
    } else if side.eq_ignore_ascii_case("away") {
        Some(false)
    } else {
        None
    }
}

/// Our own entry decides home/away; when it is missing, the opponent's entry
/// implies the inverse. Anything else stays unknown.
fn resolve_is_home(sides: &Sides<'_>) -> Option<bool> {
    if let Some(is_home) = sides.ours.and_then(home_away) {
        return Some(is_home);
    }
    sides.opponent.and_then(home_away).map(|theirs| !theirs)
}

/// One broadcast label per entry: `media.shortName`, then `media.name`, then
/// a `names` array or bare string (schedule-style payloads).
fn broadcast_names(competition: &Value) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let Some(entries) = competition.get("broadcasts").and_then(Value::as_array) else {
        return out;
    };

    for entry in entries {
        let mut labels: Vec<String> = Vec::new();
        if let Some(media) = entry.get("media") {
            if let Some(label) = to_trimmed_string(media.get("shortName"))
                .or_else(|| to_trimmed_string(media.get("name")))
            {
                labels.push(label);
            }
        } else if let Some(names) = entry.get("names").and_then(Value::as_array) {
            labels.extend(names.iter().filter_map(|n| to_trimmed_string(Some(n))));
        } else if let Some(label) = to_trimmed_string(Some(entry)) {
            labels.push(label);
        }

        for label in labels {
            if !out.contains(&label) {
                out.push(label);
            }
        }
    }
    out
}

fn status_details(competition: &Value) -> (Option<String>, Option<String>) {
    let status = competition.get("status");
    let status_type = status.and_then(|s| s.get("type")).filter(|t| t.is_object());

    let detail = status_type
        .and_then(|t| to_trimmed_string(t.get("detail")))
        .or_else(|| to_trimmed_string(status.and_then(|s| s.get("detail"))))
        .or_else(|| to_trimmed_string(status.and_then(|s| s.get("description"))));
    let short_detail = status_type
        .and_then(|t| to_trimmed_string(t.get("shortDetail")))
        .or_else(|| to_trimmed_string(status.and_then(|s| s.get("shortDetail"))));

    (detail, short_detail)
}

/// The shared competition walk: opponent, home/away, venue, broadcasts,
/// tickets, and status, all tolerant of missing pieces.
fn build_event(raw: &Value, own_team_id: Option<&str>) -> Option<TeamNextEvent> {
    if !raw.is_object() {
        return None;
    }
    let id = to_trimmed_string(raw.get("id"))?;

    let competition = raw
        .get("competitions")
        .and_then(Value::as_array)
        .and_then(|c| c.first());

    let mut event = TeamNextEvent {
        id,
        name: to_trimmed_string(raw.get("name")),
        short_name: to_trimmed_string(raw.get("shortName")),
        date: to_trimmed_string(raw.get("date")),
        opponent_name: None,
        opponent_abbreviation: None,
        opponent_rank: None,
        is_home: None,
        venue_name: None,
        venue_city: None,
        venue_state: None,
        venue_country: None,
        broadcasts: Vec::new(),
        ticket_summary: None,
        ticket_starting_price: None,
        status_detail: None,
        status_short_detail: None,
        season_text: to_trimmed_string(raw.get("season").and_then(|s| s.get("displayName"))),
        week_text: to_trimmed_string(raw.get("week").and_then(|w| w.get("text"))),
    };

    let Some(competition) = competition else {
        return Some(event);
    };

    let sides = split_competitors(competition, own_team_id);
    if let Some(opponent) = sides.opponent {
        if let Some(team) = opponent.get("team") {
            event.opponent_name = opponent_name(team);
            event.opponent_abbreviation = to_trimmed_string(team.get("abbreviation"));
        }
        event.opponent_rank =
            number_or_null(opponent.get("curatedRank").and_then(|r| r.get("current")));
    }
    event.is_home = resolve_is_home(&sides);

    if let Some(venue) = competition.get("venue") {
        event.venue_name = to_trimmed_string(venue.get("fullName"));
        let address = venue.get("address");
        event.venue_city = to_trimmed_string(address.and_then(|a| a.get("city")));
        event.venue_state = to_trimmed_string(address.and_then(|a| a.get("state")));
        event.venue_country = to_trimmed_string(address.and_then(|a| a.get("country")));
    }

    event.broadcasts = broadcast_names(competition);

    if let Some(ticket) = competition
        .get("tickets")
        .and_then(Value::as_array)
        .and_then(|t| t.first())
    {
        event.ticket_summary = to_trimmed_string(ticket.get("summary"));
        event.ticket_starting_price = number_or_null(ticket.get("startingPrice"))
            .or_else(|| number_or_null(ticket.get("minPrice")));
    }

    let (detail, short_detail) = status_details(competition);
    event.status_detail = detail;
    event.status_short_detail = short_detail;

    Some(event)
}

/// Normalize one entry of the team document's `nextEvent` array.
///
/// `None` when the entry is not an object or has no usable `id`.
pub fn normalize_next_event(raw: &Value, own_team_id: Option<&str>) -> Option<TeamNextEvent> {
    build_event(raw, own_team_id)
}

/// Normalize one entry of a schedule document's `events` array.
///
/// Same record as [`normalize_next_event`]; schedule events label their week
/// by number rather than text, so that is backfilled here.
pub fn normalize_schedule_event(raw: &Value, own_team_id: Option<&str>) -> Option<TeamNextEvent> {
    let mut event = build_event(raw, own_team_id)?;
    if event.week_text.is_none() {
        event.week_text = to_trimmed_string(raw.get("week").and_then(|w| w.get("number")))
            .map(|n| format!("Week {n}"));
    }
    if event.season_text.is_none() {
        event.season_text =
            to_trimmed_string(raw.get("seasonType").and_then(|s| s.get("name")));
    }
    Some(event)
}

/// First event of a schedule payload that normalizes to a valid record.
pub fn first_schedule_event(payload: &Value, own_team_id: Option<&str>) -> Option<TeamNextEvent> {
    payload
        .get("events")
        .and_then(Value::as_array)?
        .iter()
        .find_map(|raw| normalize_schedule_event(raw, own_team_id))
}
