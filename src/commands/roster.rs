//! Roster listing: fetch, normalize, search, sort, and print.

use crate::cli::types::{SortConfig, TeamId};
use crate::error::Result;
use crate::espn::types::Player;
use crate::query::filter_and_sort;

use super::common::{load_snapshot, resolve_team_id, TeamTarget};

/// Configuration parameters for the roster listing.
#[derive(Debug)]
pub struct RosterParams {
    pub sport: String,
    pub league: String,
    pub team_id: Option<TeamId>,
    pub query: Option<String>,
    pub sort: SortConfig,
    pub as_json: bool,
    pub offline: bool,
}

/// Fetch the roster (or fall back to the snapshot), apply the search query
/// and sort order, and print the result.
pub async fn handle_roster(params: RosterParams) -> Result<()> {
    let team_id = resolve_team_id(params.team_id)?;
    let target = TeamTarget {
        sport: params.sport,
        league: params.league,
        team_id,
    };

    let (snapshot, _source) = load_snapshot(&target, params.offline).await?;

    let query = params.query.as_deref().unwrap_or("");
    let players = filter_and_sort(&snapshot.players, query, &params.sort);

    if query.trim().is_empty() {
        println!("✓ {} players", players.len());
    } else {
        println!(
            "✓ {} of {} players match {:?}",
            players.len(),
            snapshot.players.len(),
            query.trim()
        );
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
    } else {
        for player in &players {
            println!("{}", format_player_line(player));
        }
    }

    Ok(())
}

fn format_player_line(player: &Player) -> String {
    let position = player
        .position_abbreviation
        .as_deref()
        .unwrap_or(&player.position);

    // injury status, when present, is more informative than the roster status
    let status = player
        .injuries
        .first()
        .and_then(|injury| injury.status.as_deref())
        .unwrap_or(&player.status);

    format!(
        "#{:<3} {} ({}) {} {} {} {} [{}]",
        player.jersey,
        player.display_name,
        position,
        player.height,
        player.weight,
        player.experience,
        player.hometown,
        status,
    )
}
