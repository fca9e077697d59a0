//! ESPN Team Roster CLI Library
//!
//! A Rust library for fetching a team's roster from the ESPN site API,
//! normalizing its loosely-typed payload into stable records, and searching,
//! sorting, and caching the result.
//!
//! ## Features
//!
//! - **Roster Retrieval**: Fetch a team document (athletes, record, next event)
//!   from the ESPN site API
//! - **Defensive Normalization**: Convert the partially-nullable payload into
//!   fully-typed player, record, and team records without ever panicking
//! - **Search & Sort**: Free-text filtering plus a seven-key, direction-aware
//!   comparator over the normalized roster
//! - **Snapshot Caching**: Best-effort local snapshot with defensive
//!   revalidation on read, used as a fallback when the API is unreachable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_roster::{commands::roster::*, SortConfig, TeamId};
//!
//! # async fn example() -> espn_roster::Result<()> {
//! let params = RosterParams {
//!     sport: "football".to_string(),
//!     league: "nfl".to_string(),
//!     team_id: Some(TeamId::new("22")),
//!     query: Some("qb".to_string()),
//!     sort: SortConfig::default(),
//!     // ... other parameters
//! #   as_json: false,
//! #   offline: false,
//! };
//!
//! handle_roster(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN team ID to avoid passing it in every command:
//! ```bash
//! export ESPN_ROSTER_TEAM_ID=22
//! ```

pub mod cache;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod query;

// Re-export commonly used types
pub use cli::types::{SortConfig, SortDirection, SortKey, TeamId};
pub use error::{Result, RosterError};
pub use espn::types::{
    ParsedTeamRecord, Player, PlayerInjury, RosterSnapshot, TeamMeta, TeamNextEvent,
    TeamRecordStats,
};

pub const TEAM_ID_ENV_VAR: &str = "ESPN_ROSTER_TEAM_ID";
