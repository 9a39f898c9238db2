//! Common regex patterns for KTP field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Date token as printed on the card: DD-MM-YYYY.
    pub static ref PRINT_DATE: Regex = Regex::new(r"\b(\d{2}-\d{2}-\d{4})\b").unwrap();

    /// Characters stripped by the cleaning pass. Word characters,
    /// whitespace, hyphen, slash, comma, period and colon survive.
    pub static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^\w\s\-/,.:]").unwrap();
}

/// Build the inline-capture regex for a label alias.
///
/// The alias is matched case-insensitively with flexible internal
/// whitespace, followed by an optional colon and the remainder of the
/// line: `Nama: BUDI`, `Nama : BUDI` and `Nama BUDI` all capture `BUDI`.
pub fn inline_pattern(alias: &str) -> Regex {
    let label: Vec<String> = alias.split_whitespace().map(|p| regex::escape(p)).collect();
    let pattern = format!(r"(?i){}\s*:?\s*(\S.*)", label.join(r"\s*"));
    Regex::new(&pattern).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_date_matches() {
        assert!(PRINT_DATE.is_match("Jakarta, 17-08-1998 something"));
        assert!(!PRINT_DATE.is_match("17/08/1998"));
        assert!(!PRINT_DATE.is_match("7-8-1998"));
    }

    #[test]
    fn test_inline_pattern_with_colon() {
        let re = inline_pattern("NIK");
        let caps = re.captures("NIK: 3201012345670001").unwrap();
        assert_eq!(&caps[1], "3201012345670001");
    }

    #[test]
    fn test_inline_pattern_spaced_colon() {
        let re = inline_pattern("Nama");
        let caps = re.captures("Nama : BUDI SANTOSO").unwrap();
        assert_eq!(&caps[1], "BUDI SANTOSO");
    }

    #[test]
    fn test_inline_pattern_multiword_alias() {
        let re = inline_pattern("Tempat/Tgl Lahir");
        let caps = re.captures("Tempat/Tgl Lahir: JAKARTA, 17-08-1990").unwrap();
        assert_eq!(&caps[1], "JAKARTA, 17-08-1990");
    }

    #[test]
    fn test_inline_pattern_bare_label_no_capture() {
        let re = inline_pattern("Nama");
        assert!(re.captures("Nama").is_none());
    }
}
