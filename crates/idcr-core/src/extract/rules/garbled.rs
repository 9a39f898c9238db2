//! Recovery of known OCR-garbled labels.
//!
//! Some KTP labels are misread so consistently that the generic alias
//! scan misses them (the slash in the birth label becomes `I` or `1`,
//! `Kewarganegaraan` loses letters). These variants are checked directly
//! against an upper-cased, colon-stripped rendering of each line; when a
//! variant matches, the rest of that line is the field value.

use super::super::schema::field;

/// Known garbled renderings per field, upper-case, colon-free.
const GARBLED_LABELS: &[(&str, &[&str])] = &[
    (
        field::TEMPAT_TGL_LAHIR,
        &[
            "TEMPATITGL LAHIR",
            "TEMPAT1TGL LAHIR",
            "TEMPATTGL LAHIR",
            "TEMPAT/TGI LAHIR",
        ],
    ),
    (
        field::KEWARGANEGARAAN,
        &["KEWARGANEGARAN", "KEWAROANEGARAAN"],
    ),
];

/// Try to recover `key` from a garbled label anywhere in `lines`.
///
/// Returns the remainder of the first line whose upper-cased,
/// colon-stripped form contains a known garbled variant of the label.
pub fn recover_garbled(key: &str, lines: &[String]) -> Option<String> {
    let variants = GARBLED_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)?;

    for line in lines {
        let upper = line.to_uppercase().replace(':', "");
        for variant in variants {
            if let Some(pos) = upper.find(variant) {
                let remainder = upper[pos + variant.len()..].trim();
                if !remainder.is_empty() {
                    return Some(remainder.to_string());
                }
            }
        }
    }

    None
}
