//! Type-safe wrappers and enums for the ESPN roster CLI.

pub mod sort;
pub mod team;

pub use sort::{SortConfig, SortDirection, SortKey};
pub use team::TeamId;
