//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use espn_roster::{
    cli::{Commands, Roster},
    commands::{
        roster::{handle_roster, RosterParams},
        team_info::{handle_team_info, TeamInfoParams},
    },
    Result, SortConfig,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let app = Roster::parse();

    match app.command {
        Commands::Roster {
            team,
            query,
            sort_by,
            descending,
            json,
            offline,
        } => {
            handle_roster(RosterParams {
                sport: team.sport,
                league: team.league,
                team_id: team.team_id,
                query,
                sort: SortConfig::new(sort_by, descending.into()),
                as_json: json,
                offline,
            })
            .await?
        }

        Commands::Team {
            team,
            json,
            offline,
        } => {
            handle_team_info(TeamInfoParams {
                sport: team.sport,
                league: team.league,
                team_id: team.team_id,
                as_json: json,
                offline,
            })
            .await?
        }
    }

    Ok(())
}
