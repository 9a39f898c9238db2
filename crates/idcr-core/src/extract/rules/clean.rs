//! Final cleanup of extracted candidate values.

use super::super::normalize::loose_eq;
use super::patterns::DISALLOWED_CHARS;

/// Clean a raw candidate value.
///
/// Strips characters outside the allowed set (word characters,
/// whitespace, `-` `/` `,` `.` `:`), trims, and upper-cases. A cleaned
/// value that loosely equals a term of the exclusion vocabulary is an
/// echoed label, and is replaced by the empty string.
pub fn clean_value(raw: &str, exclusions: &[&str]) -> String {
    let cleaned = DISALLOWED_CHARS.replace_all(raw, "");
    let cleaned = cleaned.trim().to_uppercase();

    if exclusions.iter().any(|term| loose_eq(&cleaned, term)) {
        return String::new();
    }

    cleaned
}
