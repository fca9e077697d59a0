//! Team details: standing, record, and the next scheduled game.

use serde_json::json;

use crate::cli::types::TeamId;
use crate::error::Result;
use crate::espn::types::{TeamNextEvent, TeamRecordStats};

use super::common::{load_snapshot, resolve_team_id, TeamTarget};

/// Configuration parameters for the team details view.
#[derive(Debug)]
pub struct TeamInfoParams {
    pub sport: String,
    pub league: String,
    pub team_id: Option<TeamId>,
    pub as_json: bool,
    pub offline: bool,
}

/// Fetch team meta and record (or fall back to the snapshot) and print them.
pub async fn handle_team_info(params: TeamInfoParams) -> Result<()> {
    let team_id = resolve_team_id(params.team_id)?;
    let target = TeamTarget {
        sport: params.sport,
        league: params.league,
        team_id,
    };

    let (snapshot, _source) = load_snapshot(&target, params.offline).await?;

    if params.as_json {
        let out = json!({
            "teamMeta": snapshot.meta,
            "record": snapshot.record,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let meta = &snapshot.meta;
    let name = meta.display_name.as_deref().unwrap_or("Unknown team");
    match meta.abbreviation.as_deref() {
        Some(abbr) => println!("{} ({})", name, abbr),
        None => println!("{}", name),
    }
    if let Some(standing) = &meta.standing_summary {
        println!("Standing: {}", standing);
    }
    if let Some(rank) = meta.rank {
        println!("Rank: {}", rank);
    }

    match (&snapshot.record.summary, &snapshot.record.stats) {
        (Some(summary), Some(stats)) => {
            println!("Record: {} ({})", summary, format_stats(stats))
        }
        (Some(summary), None) => println!("Record: {}", summary),
        (None, Some(stats)) => println!("Record: {}", format_stats(stats)),
        (None, None) => {}
    }

    match &meta.next_event {
        Some(event) => print_next_event(event),
        None => println!("No upcoming game."),
    }

    Ok(())
}

fn format_stats(stats: &TeamRecordStats) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let (Some(pf), Some(pa)) = (stats.points_for, stats.points_against) {
        parts.push(format!("PF {} / PA {}", pf, pa));
    }
    if let Some(diff) = stats.point_differential {
        parts.push(format!("diff {:+}", diff));
    }
    if let Some(streak) = stats.streak {
        parts.push(format!("streak {}", streak));
    }
    if parts.is_empty() {
        "no stats".to_string()
    } else {
        parts.join(", ")
    }
}

fn print_next_event(event: &TeamNextEvent) {
    let title = event
        .short_name
        .as_deref()
        .or(event.name.as_deref())
        .unwrap_or("TBD");
    println!("Next: {}", title);

    if let Some(opponent) = &event.opponent_name {
        let side = match event.is_home {
            Some(true) => "vs",
            Some(false) => "at",
            None => "plays",
        };
        println!("  {} {}", side, opponent);
    }
    if let Some(date) = &event.date {
        println!("  {}", date);
    }
    if let Some(venue) = &event.venue_name {
        let place: Vec<&str> = [
            Some(venue.as_str()),
            event.venue_city.as_deref(),
            event.venue_state.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        println!("  {}", place.join(", "));
    }
    if !event.broadcasts.is_empty() {
        println!("  TV: {}", event.broadcasts.join(", "));
    }
    if let Some(summary) = &event.ticket_summary {
        match event.ticket_starting_price {
            Some(price) => println!("  Tickets: {} (from ${})", summary, price),
            None => println!("  Tickets: {}", summary),
        }
    }
    if let Some(detail) = event.status_detail.as_deref().or(event.status_short_detail.as_deref()) {
        println!("  {}", detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats_full() {
        let stats = TeamRecordStats {
            wins: Some(7.0),
            losses: Some(5.0),
            points_for: Some(280.0),
            points_against: Some(244.0),
            point_differential: Some(36.0),
            streak: Some(3.0),
            ..Default::default()
        };
        let text = format_stats(&stats);
        assert!(text.contains("PF 280 / PA 244"));
        assert!(text.contains("diff +36"));
        assert!(text.contains("streak 3"));
    }

    #[test]
    fn test_format_stats_empty() {
        assert_eq!(format_stats(&TeamRecordStats::default()), "no stats");
    }
}
