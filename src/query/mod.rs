//! Pure computation over the normalized roster: ordering and search.

pub mod compare;
pub mod search;

pub use compare::compare_players;
pub use search::filter_and_sort;
