use crate::cli::types::SortConfig;
use crate::espn::types::Player;
use crate::query::compare::compare_players;


/// Reduce the roster to players matching `query`, then sort the result.
///
/// The query is trimmed and lowercased; an empty query keeps everyone. A
/// player matches when the space-joined concatenation of its searchable
/// fields (nulls skipped) contains the query as a substring. The returned
/// vector is always a freshly sorted copy — filtering and sorting are one
/// operation, never a partial pipeline.
pub fn filter_and_sort(players: &[Player], query: &str, config: &SortConfig) -> Vec<Player> {
    let needle = query.trim().to_lowercase();

    let mut matched: Vec<Player> = if needle.is_empty() {
        players.to_vec()
    } else {
        players
            .iter()
            .filter(|p| search_haystack(p).contains(&needle))
            .cloned()
            .collect()
    };

    matched.sort_by(|a, b| compare_players(a, b, config));
    matched
}

/// The fixed set of searchable fields, lowercased and space-joined.
fn search_haystack(player: &Player) -> String {
    let fields: [Option<&str>; 10] = [
        Some(&player.display_name),
        player.full_name.as_deref(),
        player.first_name.as_deref(),
        player.last_name.as_deref(),
        Some(&player.jersey),
        Some(&player.position),
        player.position_abbreviation.as_deref(),
        Some(&player.experience),
        Some(&player.hometown),
        Some(&player.status),
    ];

    fields
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
