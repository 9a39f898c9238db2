//! Print-date recovery.
//!
//! The issuing office prints a DD-MM-YYYY date at the bottom-right of
//! the card with no label next to it, so keyword scanning cannot find
//! it. The recovery pass takes the first date-shaped token anywhere in
//! the line sequence instead.

use super::patterns::PRINT_DATE;

/// Find the first DD-MM-YYYY token in the line sequence.
pub fn find_print_date(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| PRINT_DATE.captures(line))
        .map(|caps| caps[1].to_string())
}
