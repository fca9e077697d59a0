//! CLI argument definitions and parsing structures.

use super::types::{SortKey, TeamId};
use clap::{Args, Parser, Subcommand};

/// Team selection arguments shared between commands
#[derive(Debug, Args)]
pub struct TeamArgs {
    /// Sport slug, e.g. `football`.
    #[clap(long, default_value = "football")]
    pub sport: String,

    /// League slug, e.g. `nfl`.
    #[clap(long, default_value = "nfl")]
    pub league: String,

    /// Team ID (or set `ESPN_ROSTER_TEAM_ID` env var).
    #[clap(long, short)]
    pub team_id: Option<TeamId>,
}

#[derive(Debug, Parser)]
#[clap(name = "espn-roster", about = "ESPN team roster CLI")]
pub struct Roster {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the team roster, optionally searched and sorted.
    ///
    /// Fetches the team document once; if ESPN is unreachable the last
    /// cached snapshot is shown with a staleness notice.
    Roster {
        #[clap(flatten)]
        team: TeamArgs,

        /// Free-text search across name, jersey, position, experience, hometown, and status.
        #[clap(long, short = 'q')]
        query: Option<String>,

        /// Sort key: jersey, name, position, experience, height, weight, or hometown.
        #[clap(long, short = 's', default_value_t = SortKey::default())]
        sort_by: SortKey,

        /// Sort descending instead of ascending.
        #[clap(long, short = 'd')]
        descending: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Serve from the local snapshot without touching the network.
        #[clap(long)]
        offline: bool,
    },

    /// Show team details: standing, record, and the next scheduled game.
    Team {
        #[clap(flatten)]
        team: TeamArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Serve from the local snapshot without touching the network.
        #[clap(long)]
        offline: bool,
    },
}
