//! Command implementations for the ESPN roster CLI

pub mod common;
pub mod roster;
pub mod team_info;

pub use common::resolve_team_id;
