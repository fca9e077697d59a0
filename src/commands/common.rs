//! Shared command plumbing: team resolution and snapshot loading.

use reqwest::Client;

use crate::cache::{now_millis, CachedRoster, SnapshotKey, SNAPSHOT_CACHE};
use crate::cli::types::TeamId;
use crate::error::{Result, RosterError};
use crate::espn::http;
use crate::espn::normalize::first_schedule_event;
use crate::espn::parse::parse_roster;
use crate::espn::types::RosterSnapshot;
use crate::TEAM_ID_ENV_VAR;

/// Resolve the team id from the CLI flag, falling back to the environment.
pub fn resolve_team_id(team_id: Option<TeamId>) -> Result<TeamId> {
    if let Some(id) = team_id {
        return Ok(id);
    }

    match std::env::var(TEAM_ID_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(TeamId::new(value.trim())),
        _ => Err(RosterError::MissingTeamId {
            env_var: TEAM_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Fully resolved team selector.
pub struct TeamTarget {
    pub sport: String,
    pub league: String,
    pub team_id: TeamId,
}

impl TeamTarget {
    fn key(&self) -> SnapshotKey {
        SnapshotKey::new(&self.sport, &self.league, self.team_id.as_str())
    }
}

/// Where a snapshot came from; cached sources carry their write stamp so the
/// staleness notice can say how old the data is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    Fresh,
    Cached { updated_at: i64 },
    Offline { updated_at: i64 },
}

/// Fetch once, fall back to the cache.
///
/// The fetch path parses the team document, supplements a missing next event
/// from the schedule endpoint, and writes the snapshot through the cache. A
/// failed fetch with a usable snapshot degrades to stale data; with no
/// snapshot the fetch error surfaces as-is.
pub async fn load_snapshot(
    target: &TeamTarget,
    offline: bool,
) -> Result<(RosterSnapshot, SnapshotSource)> {
    let key = target.key();

    if offline {
        let cached = SNAPSHOT_CACHE.get(&key).ok_or_else(|| RosterError::Cache {
            message: format!("no local snapshot for team {}", target.team_id),
        })?;
        let updated_at = cached.updated_at;
        println!(
            "Using local snapshot from {} ago...",
            describe_age(updated_at)
        );
        return Ok((cached.into_snapshot(), SnapshotSource::Offline { updated_at }));
    }

    println!(
        "Fetching {} data from ESPN ({}/{})...",
        target.team_id, target.sport, target.league
    );

    let client = Client::new();
    let fetched = http::get_team(&client, &target.sport, &target.league, target.team_id.as_str())
        .await
        .and_then(|payload| {
            if payload.get("team").is_some() {
                Ok(payload)
            } else {
                Err(RosterError::NoData)
            }
        });

    match fetched {
        Ok(payload) => {
            let mut snapshot = parse_roster(&payload);

            if snapshot.meta.next_event.is_none() {
                match http::get_team_schedule(
                    &client,
                    &target.sport,
                    &target.league,
                    target.team_id.as_str(),
                )
                .await
                {
                    Ok(schedule) => {
                        snapshot.meta.next_event =
                            first_schedule_event(&schedule, Some(target.team_id.as_str()));
                    }
                    Err(err) => log::debug!("schedule fetch failed: {err}"),
                }
            }

            SNAPSHOT_CACHE.put(key, CachedRoster::from_snapshot(&snapshot, now_millis()));
            Ok((snapshot, SnapshotSource::Fresh))
        }
        Err(err) => {
            log::warn!("team fetch failed: {err}");
            match SNAPSHOT_CACHE.get(&key) {
                Some(cached) => {
                    let updated_at = cached.updated_at;
                    println!(
                        "⚠ ESPN unreachable; showing cached data from {} ago",
                        describe_age(updated_at)
                    );
                    Ok((cached.into_snapshot(), SnapshotSource::Cached { updated_at }))
                }
                None => Err(err),
            }
        }
    }
}

/// Rough human-readable age of a snapshot stamp.
pub fn describe_age(updated_at: i64) -> String {
    let elapsed_ms = (now_millis() - updated_at).max(0);
    let minutes = elapsed_ms / 60_000;
    if minutes < 1 {
        "moments".to_string()
    } else if minutes < 60 {
        format!("{} min", minutes)
    } else if minutes < 60 * 24 {
        format!("{} h", minutes / 60)
    } else {
        format!("{} days", minutes / (60 * 24))
    }
}
