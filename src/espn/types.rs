use serde::{Deserialize, Serialize};


/// Placeholder shown for display fields the payload did not provide.
///
/// Jersey, position, experience, height, weight, hometown, and status carry
/// this instead of `None` so sort and display code stays null-free.
pub const DASH: &str = "—";

/// One roster member, normalized from the ESPN team document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "type", default)]
    pub player_type: Option<String>,

    pub display_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,

    pub jersey: String,
    pub position: String,
    #[serde(default)]
    pub position_abbreviation: Option<String>,
    #[serde(default)]
    pub position_name: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,

    pub experience: String,
    #[serde(default)]
    pub experience_abbreviation: Option<String>,
    #[serde(default)]
    pub experience_years: Option<f64>,

    pub height: String,
    pub weight: String,

    #[serde(default)]
    pub birth_city: Option<String>,
    #[serde(default)]
    pub birth_state: Option<String>,
    #[serde(default)]
    pub birth_country: Option<String>,
    #[serde(default)]
    pub birth_country_abbreviation: Option<String>,
    pub hometown: String,

    #[serde(default)]
    pub flag_url: Option<String>,
    #[serde(default)]
    pub flag_alt: Option<String>,

    pub status: String,
    #[serde(default)]
    pub status_type: Option<String>,
    #[serde(default)]
    pub status_abbreviation: Option<String>,
    pub is_active: bool,

    #[serde(default)]
    pub injuries: Vec<PlayerInjury>,
}

/// One injury report entry attached to a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInjury {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub injury_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl PlayerInjury {
    /// True when every field resolved to null; such entries are discarded.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.injury_type.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

/// Team record counters pulled from the "total" record item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecordStats {
    #[serde(default)]
    pub wins: Option<f64>,
    #[serde(default)]
    pub losses: Option<f64>,
    #[serde(default)]
    pub ties: Option<f64>,
    #[serde(default)]
    pub streak: Option<f64>,
    #[serde(default)]
    pub points_for: Option<f64>,
    #[serde(default)]
    pub points_against: Option<f64>,
    #[serde(default)]
    pub avg_points_for: Option<f64>,
    #[serde(default)]
    pub avg_points_against: Option<f64>,
    #[serde(default)]
    pub point_differential: Option<f64>,
}

impl TeamRecordStats {
    /// A stats struct with zero populated fields is not considered present.
    pub fn is_empty(&self) -> bool {
        self.wins.is_none()
            && self.losses.is_none()
            && self.ties.is_none()
            && self.streak.is_none()
            && self.points_for.is_none()
            && self.points_against.is_none()
            && self.avg_points_for.is_none()
            && self.avg_points_against.is_none()
            && self.point_differential.is_none()
    }
}

/// Human-readable record summary paired with the parsed counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTeamRecord {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub stats: Option<TeamRecordStats>,
}

/// Upcoming-game descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNextEvent {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub opponent_name: Option<String>,
    #[serde(default)]
    pub opponent_abbreviation: Option<String>,
    #[serde(default)]
    pub opponent_rank: Option<f64>,

    /// Tri-state: `Some(true)` home, `Some(false)` away, `None` unknown.
    #[serde(default)]
    pub is_home: Option<bool>,

    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub venue_city: Option<String>,
    #[serde(default)]
    pub venue_state: Option<String>,
    #[serde(default)]
    pub venue_country: Option<String>,

    /// Deduplicated broadcast short-names, order preserved.
    #[serde(default)]
    pub broadcasts: Vec<String>,

    #[serde(default)]
    pub ticket_summary: Option<String>,
    #[serde(default)]
    pub ticket_starting_price: Option<f64>,

    #[serde(default)]
    pub status_detail: Option<String>,
    #[serde(default)]
    pub status_short_detail: Option<String>,

    #[serde(default)]
    pub season_text: Option<String>,
    #[serde(default)]
    pub week_text: Option<String>,
}

/// Team-level descriptor. Always a full struct; absent source fields stay
/// null rather than collapsing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamMeta {
    #[serde(default)]
    pub rank: Option<f64>,
    #[serde(default)]
    pub standing_summary: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub short_display_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub alternate_color: Option<String>,
    #[serde(default)]
    pub next_event: Option<TeamNextEvent>,
}

/// One atomic parse result: players, record, and team meta from a single
/// payload. Malformed sub-structures degrade to empty/null, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    pub players: Vec<Player>,
    pub record: ParsedTeamRecord,
    pub meta: TeamMeta,
}
