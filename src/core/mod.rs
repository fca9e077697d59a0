//! Core utilities for the ESPN roster CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `json`: total (non-panicking) coercions over loose JSON values

pub mod json;

// Re-export commonly used items for convenience
pub use json::{
    number_or_null, parse_embedded_int, parse_feet_inches, string_or_null, to_trimmed_string,
    trimmed_or_null,
};
