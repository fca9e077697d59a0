use serde_json::Value;

use crate::cli::types::SortConfig;
use crate::espn::normalize::{normalize_player, normalize_team_meta, parse_team_record};
use crate::espn::types::{Player, RosterSnapshot};
use crate::query::compare::compare_players;


/// Parse one team document into an atomic snapshot.
///
/// A missing or malformed `team` subtree yields the default snapshot (empty
/// roster, null record, skeleton meta); individual bad athletes are dropped
/// rather than failing the parse. Players come back ordered by ascending
/// numeric jersey, unparseable jerseys after all numeric ones.
pub fn parse_roster(payload: &Value) -> RosterSnapshot {
    let Some(team) = payload.get("team") else {
        return RosterSnapshot::default();
    };

    let meta = normalize_team_meta(team);
    let record = parse_team_record(team);

    let mut players: Vec<Player> = team
        .get("athletes")
        .and_then(Value::as_array)
        .map(|athletes| {
            athletes
                .iter()
                .filter_map(|raw| {
                    let player = normalize_player(raw);
                    if player.is_none() {
                        log::debug!("dropping roster entry without id or display name");
                    }
                    player
                })
                .collect()
        })
        .unwrap_or_default();

    // Default presentation order; SortConfig::default is jersey ascending.
    let default_order = SortConfig::default();
    players.sort_by(|a, b| compare_players(a, b, &default_order));

    RosterSnapshot {
        players,
        record,
        meta,
    }
}
