//! Error types for the ESPN roster CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Team ID not provided and {env_var} environment variable not set")]
    MissingTeamId { env_var: String },

    #[error("Invalid sort key: {key} (expected jersey, name, position, experience, height, weight, or hometown)")]
    InvalidSortKey { key: String },

    #[error("Invalid team ID: {value:?}")]
    InvalidTeamId { value: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("ESPN API returned no team data and no cached snapshot exists; try again")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_team_id_message_names_env_var() {
        let err = RosterError::MissingTeamId {
            env_var: "ESPN_ROSTER_TEAM_ID".to_string(),
        };
        assert!(err.to_string().contains("ESPN_ROSTER_TEAM_ID"));
    }

    #[test]
    fn test_json_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: RosterError = bad.unwrap_err().into();
        assert!(matches!(err, RosterError::Json(_)));
        assert!(err.to_string().contains("JSON parsing failed"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RosterError = io.into();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_no_data_is_retryable_wording() {
        assert!(RosterError::NoData.to_string().contains("try again"));
    }
}
