//! Team identifier type for the ESPN site API.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN team IDs.
///
/// The site API addresses teams by an opaque string id (numeric for the big
/// leagues, but not guaranteed), so the wrapper keeps it as text.
///
/// # Examples
///
/// ```rust
/// use espn_roster::TeamId;
///
/// let team_id = TeamId::new("22");
/// assert_eq!(team_id.as_str(), "22");
/// assert_eq!(team_id.to_string(), "22");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub String);

impl TeamId {
    /// Create a new TeamId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RosterError::InvalidTeamId {
                value: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_trims() {
        let id: TeamId = " 22 ".parse().unwrap();
        assert_eq!(id.as_str(), "22");
    }

    #[test]
    fn test_from_str_rejects_empty() {
        assert!("   ".parse::<TeamId>().is_err());
    }
}
