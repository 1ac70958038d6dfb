//! Shared rendering helpers.

use std::fmt::Display;

/// Placeholder rendered for any field that could not be read from a record
pub const UNKNOWN: &str = "Unknown";

/// Join displayable values with a separator
pub fn join<T: Display>(values: impl IntoIterator<Item = T>, sep: &str) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Render an optional value, falling back to [`UNKNOWN`]
pub fn or_unknown<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Render a list in `[a, b, c]` form
pub fn bracketed<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    format!("[{}]", join(values, ", "))
}
