//! Entity normalizers: raw payload fragments in, typed optional records out.
//!
//! Every function here accepts an arbitrary `serde_json::Value` and never
//! panics. A container that is not an object yields `None` (or a default
//! skeleton where the caller expects a non-null shape, like [`TeamMeta`]).
//!
//! [`TeamMeta`]: crate::espn::types::TeamMeta

pub mod event;
pub mod player;
pub mod record;
pub mod team;

pub use event::{first_schedule_event, normalize_next_event, normalize_schedule_event};
pub use player::{normalize_injury, normalize_player};
pub use record::{extract_record_stats, normalize_record_stats, parse_team_record};
pub use team::normalize_team_meta;
