//! The persisted snapshot shape and its defensive read path.
//!
//! Writes serialize [`CachedRoster`] straight through serde. Reads never
//! trust the file: every player must re-pass a required-fields check, record
//! stats go back through the flat-object normalizer, and team meta is
//! rebuilt field by field. Anything that fails just drops out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::json::{number_or_null, to_trimmed_string};
use crate::espn::normalize::record::normalize_record_stats;
use crate::espn::types::{
    ParsedTeamRecord, Player, PlayerInjury, RosterSnapshot, TeamMeta, TeamNextEvent,
    TeamRecordStats, DASH,
};

/// The serialized snapshot: players plus record and meta, stamped with the
/// write time in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRoster {
    pub players: Vec<Player>,
    pub updated_at: i64,
    #[serde(default)]
    pub record_summary: Option<String>,
    #[serde(default)]
    pub record_stats: Option<TeamRecordStats>,
    pub team_meta: TeamMeta,
}

impl CachedRoster {
    pub fn from_snapshot(snapshot: &RosterSnapshot, updated_at: i64) -> Self {
        Self {
            players: snapshot.players.clone(),
            updated_at,
            record_summary: snapshot.record.summary.clone(),
            record_stats: snapshot.record.stats.clone(),
            team_meta: snapshot.meta.clone(),
        }
    }

    pub fn into_snapshot(self) -> RosterSnapshot {
        RosterSnapshot {
            players: self.players,
            record: ParsedTeamRecord {
                summary: self.record_summary,
                stats: self.record_stats,
            },
            meta: self.team_meta,
        }
    }
}

/// Fields every cached player must present as strings to survive a reload.
const REQUIRED_PLAYER_FIELDS: [&str; 8] = [
    "id",
    "displayName",
    "jersey",
    "position",
    "experience",
    "height",
    "weight",
    "hometown",
];

fn required_string(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        _ => None,
    }
}

/// Rebuild a snapshot from an untrusted cache value.
///
/// `None` means the cache as a whole is unusable ("no cached data"); players
/// that fail the required-fields check are discarded individually.
pub fn rehydrate_snapshot(raw: &Value) -> Option<CachedRoster> {
    if !raw.is_object() {
        return None;
    }

    let entries = raw.get("players").and_then(Value::as_array)?;
    let players: Vec<Player> = entries
        .iter()
        .filter_map(|entry| {
            let player = rehydrate_player(entry);
            if player.is_none() {
                log::debug!("discarding cached player that failed revalidation");
            }
            player
        })
        .collect();

    Some(CachedRoster {
        players,
        updated_at: number_or_null(raw.get("updatedAt")).map(|n| n as i64).unwrap_or(0),
        record_summary: to_trimmed_string(raw.get("recordSummary")),
        record_stats: normalize_record_stats(raw.get("recordStats")),
        team_meta: rehydrate_team_meta(raw.get("teamMeta")),
    })
}

fn rehydrate_player(raw: &Value) -> Option<Player> {
    for key in REQUIRED_PLAYER_FIELDS {
        required_string(raw, key)?;
    }

    let status_type = to_trimmed_string(raw.get("statusType"));
    let is_active = match raw.get("isActive").and_then(Value::as_bool) {
        Some(flag) => flag,
        None => status_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("active")),
    };

    let injuries = raw
        .get("injuries")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(rehydrate_injury).collect())
        .unwrap_or_default();

    Some(Player {
        id: required_string(raw, "id")?,
        uid: to_trimmed_string(raw.get("uid")),
        guid: to_trimmed_string(raw.get("guid")),
        slug: to_trimmed_string(raw.get("slug")),
        player_type: to_trimmed_string(raw.get("type")),

        display_name: required_string(raw, "displayName")?,
        full_name: to_trimmed_string(raw.get("fullName")),
        first_name: to_trimmed_string(raw.get("firstName")),
        last_name: to_trimmed_string(raw.get("lastName")),
        short_name: to_trimmed_string(raw.get("shortName")),

        jersey: required_string(raw, "jersey")?,
        position: required_string(raw, "position")?,
        position_abbreviation: to_trimmed_string(raw.get("positionAbbreviation")),
        position_name: to_trimmed_string(raw.get("positionName")),
        position_id: to_trimmed_string(raw.get("positionId")),

        experience: required_string(raw, "experience")?,
        experience_abbreviation: to_trimmed_string(raw.get("experienceAbbreviation")),
        experience_years: number_or_null(raw.get("experienceYears")),

        height: required_string(raw, "height")?,
        weight: required_string(raw, "weight")?,

        birth_city: to_trimmed_string(raw.get("birthCity")),
        birth_state: to_trimmed_string(raw.get("birthState")),
        birth_country: to_trimmed_string(raw.get("birthCountry")),
        birth_country_abbreviation: to_trimmed_string(raw.get("birthCountryAbbreviation")),
        hometown: required_string(raw, "hometown")?,

        flag_url: to_trimmed_string(raw.get("flagUrl")),
        flag_alt: to_trimmed_string(raw.get("flagAlt")),

        status: required_string(raw, "status").unwrap_or_else(|| DASH.to_string()),
        status_type,
        status_abbreviation: to_trimmed_string(raw.get("statusAbbreviation")),
        is_active,

        injuries,
    })
}

fn rehydrate_injury(raw: &Value) -> Option<PlayerInjury> {
    if !raw.is_object() {
        return None;
    }
    let injury = PlayerInjury {
        id: to_trimmed_string(raw.get("id")),
        injury_type: to_trimmed_string(raw.get("type")),
        status: to_trimmed_string(raw.get("status")),
        description: to_trimmed_string(raw.get("description")),
        date: to_trimmed_string(raw.get("date")),
    };
    (!injury.is_empty()).then_some(injury)
}

fn rehydrate_team_meta(raw: Option<&Value>) -> TeamMeta {
    let Some(raw) = raw else {
        return TeamMeta::default();
    };

    TeamMeta {
        rank: number_or_null(raw.get("rank")),
        standing_summary: to_trimmed_string(raw.get("standingSummary")),
        display_name: to_trimmed_string(raw.get("displayName")),
        short_display_name: to_trimmed_string(raw.get("shortDisplayName")),
        location: to_trimmed_string(raw.get("location")),
        nickname: to_trimmed_string(raw.get("nickname")),
        abbreviation: to_trimmed_string(raw.get("abbreviation")),
        color: to_trimmed_string(raw.get("color")),
        alternate_color: to_trimmed_string(raw.get("alternateColor")),
        next_event: raw.get("nextEvent").and_then(rehydrate_next_event),
    }
}

fn rehydrate_next_event(raw: &Value) -> Option<TeamNextEvent> {
    if !raw.is_object() {
        return None;
    }
    let id = to_trimmed_string(raw.get("id"))?;

    let broadcasts = raw
        .get("broadcasts")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|b| to_trimmed_string(Some(b)))
                .collect()
        })
        .unwrap_or_default();

    Some(TeamNextEvent {
        id,
        name: to_trimmed_string(raw.get("name")),
        short_name: to_trimmed_string(raw.get("shortName")),
        date: to_trimmed_string(raw.get("date")),
        opponent_name: to_trimmed_string(raw.get("opponentName")),
        opponent_abbreviation: to_trimmed_string(raw.get("opponentAbbreviation")),
        opponent_rank: number_or_null(raw.get("opponentRank")),
        is_home: raw.get("isHome").and_then(Value::as_bool),
        venue_name: to_trimmed_string(raw.get("venueName")),
        venue_city: to_trimmed_string(raw.get("venueCity")),
        venue_state: to_trimmed_string(raw.get("venueState")),
        venue_country: to_trimmed_string(raw.get("venueCountry")),
        broadcasts,
        ticket_summary: to_trimmed_string(raw.get("ticketSummary")),
        ticket_starting_price: number_or_null(raw.get("ticketStartingPrice")),
        status_detail: to_trimmed_string(raw.get("statusDetail")),
        status_short_detail: to_trimmed_string(raw.get("statusShortDetail")),
        season_text: to_trimmed_string(raw.get("seasonText")),
        week_text: to_trimmed_string(raw.get("weekText")),
    })
}
