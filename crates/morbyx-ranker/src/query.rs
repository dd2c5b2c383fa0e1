//! Query text normalisation.

use std::collections::HashSet;

/// Turn raw query text into a set of symptom tokens.
///
/// Lowercases the whole string, splits on commas, trims each piece, and
/// drops empty pieces. The result is empty only when the input carries no
/// non-whitespace tokens; that is a valid outcome, distinguished from a
/// user-facing "bad request" at the HTTP boundary, not here.
pub fn normalise_query(raw: &str) -> HashSet<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
