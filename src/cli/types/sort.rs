//! Sort configuration for the roster view.

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven player fields eligible for comparator-driven ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    #[default]
    Jersey,
    Name,
    Position,
    Experience,
    Height,
    Weight,
    Hometown,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Jersey => "jersey",
            SortKey::Name => "name",
            SortKey::Position => "position",
            SortKey::Experience => "experience",
            SortKey::Height => "height",
            SortKey::Weight => "weight",
            SortKey::Hometown => "hometown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jersey" => Ok(SortKey::Jersey),
            "name" => Ok(SortKey::Name),
            "position" => Ok(SortKey::Position),
            "experience" => Ok(SortKey::Experience),
            "height" => Ok(SortKey::Height),
            "weight" => Ok(SortKey::Weight),
            "hometown" => Ok(SortKey::Hometown),
            _ => Err(RosterError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

/// Sort direction; ascending unless the CLI says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl From<bool> for SortDirection {
    /// `true` means descending (the shape of a `--descending` flag).
    fn from(descending: bool) -> Self {
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// A sort key paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trips_through_display() {
        for key in [
            SortKey::Jersey,
            SortKey::Name,
            SortKey::Position,
            SortKey::Experience,
            SortKey::Height,
            SortKey::Weight,
            SortKey::Hometown,
        ] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_key_parse_is_case_insensitive() {
        assert_eq!("JERSEY".parse::<SortKey>().unwrap(), SortKey::Jersey);
        assert_eq!("Hometown".parse::<SortKey>().unwrap(), SortKey::Hometown);
    }

    #[test]
    fn test_sort_key_parse_rejects_unknown() {
        assert!("points".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_config_is_jersey_ascending() {
        let config = SortConfig::default();
        assert_eq!(config.key, SortKey::Jersey);
        assert_eq!(config.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_direction_from_flag() {
        assert_eq!(SortDirection::from(true), SortDirection::Descending);
        assert_eq!(SortDirection::from(false), SortDirection::Ascending);
    }
}
