use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

/// Base path for the ESPN site API (v2).
pub const SITE_API_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Fetch the team document: meta, record, next event, and the roster.
pub async fn get_team(client: &Client, sport: &str, league: &str, team_id: &str) -> Result<Value> {
    let url = format!("{SITE_API_BASE_URL}/{}/{}/teams/{}", sport, league, team_id);
    let params = [("enable", "roster,record")];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// Fetch the team schedule; used to fill in the next event when the team
/// document carries none.
pub async fn get_team_schedule(
    client: &Client,
    sport: &str,
    league: &str,
    team_id: &str,
) -> Result<Value> {
    let url = format!(
        "{SITE_API_BASE_URL}/{}/{}/teams/{}/schedule",
        sport, league, team_id
    );

    let res = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
