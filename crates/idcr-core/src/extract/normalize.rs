//! Line normalization and loose text comparison.
//!
//! OCR output is inconsistent about casing and spacing: `"NIK"`,
//! `"N I K"` and `"nik"` must all count as the same label. All keyword
//! matching downstream goes through [`fold`] so the rule is applied
//! uniformly.

/// Trim every line and drop the ones that become empty.
///
/// Relative order of the surviving lines is preserved; the next-line
/// fallback in the extractor depends on adjacency in this sequence.
pub fn normalize_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| l.as_ref().trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Lower-case a string and strip all whitespace.
pub fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case- and whitespace-insensitive substring test.
pub fn loose_contains(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Case- and whitespace-insensitive equality test.
pub fn loose_eq(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}
