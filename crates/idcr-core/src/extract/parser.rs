//! Keyword-driven KTP field parser.

use std::collections::BTreeMap;
use std::time::Instant;

use regex::Regex;
use tracing::{debug, info};

use crate::models::card::KtpData;
use crate::models::config::ExtractionConfig;

use super::normalize::{fold, normalize_lines};
use super::rules::{clean_value, find_print_date, inline_pattern, recover_garbled};
use super::schema::{field, vocabulary, FieldSpec, KTP_FIELDS};
use super::CardExtractor;

/// Result of a card extraction.
///
/// Every key of the schema is present; an empty string means the field
/// was not detected.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted field values, keyed by field key.
    pub fields: BTreeMap<String, String>,
    /// One warning per field that could not be extracted.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    /// Value for a field key, empty when absent or not detected.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// Build the typed card model from the field map.
    pub fn to_card(&self) -> KtpData {
        KtpData::from_fields(&self.fields)
    }
}

/// Schema-driven KTP parser.
///
/// For every field the same generic algorithm runs: scan the line
/// sequence for a label alias, capture the value inline after the label
/// or fall back to the following line, and reject candidates that are
/// themselves labels. Two explicit recovery passes (unlabeled print
/// date, garbled labels) run after the generic scan.
pub struct KtpParser {
    schema: &'static [FieldSpec],
    config: ExtractionConfig,
    /// Inline-capture regex per field, parallel to the alias lists.
    inline: Vec<Vec<Regex>>,
    /// Folded exclusion vocabulary: every key and alias of the schema.
    vocab: Vec<String>,
}

impl KtpParser {
    /// Create a parser over the standard KTP field catalogue.
    pub fn new() -> Self {
        Self::with_schema(KTP_FIELDS)
    }

    /// Create a parser over a custom field catalogue.
    pub fn with_schema(schema: &'static [FieldSpec]) -> Self {
        let inline = schema
            .iter()
            .map(|spec| spec.aliases.iter().map(|a| inline_pattern(a)).collect())
            .collect();

        let vocab = vocabulary(schema).into_iter().map(fold).collect();

        Self {
            schema,
            config: ExtractionConfig::default(),
            inline,
            vocab,
        }
    }

    /// Replace the extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether the final cleaning pass also rejects alias echoes,
    /// not just field-key echoes.
    pub fn with_alias_echo_guard(mut self, enabled: bool) -> Self {
        self.config.alias_echo_guard = enabled;
        self
    }

    /// Set whether the garbled-label recovery pass runs.
    pub fn with_garbled_recovery(mut self, enabled: bool) -> Self {
        self.config.recover_garbled_labels = enabled;
        self
    }

    /// Set whether the print-date recovery pass runs.
    pub fn with_print_date_recovery(mut self, enabled: bool) -> Self {
        self.config.recover_print_date = enabled;
        self
    }

    /// True when the candidate loosely contains any schema key or alias,
    /// meaning it is (or includes) a neighboring label rather than data.
    fn contains_label(&self, candidate: &str) -> bool {
        let folded = fold(candidate);
        self.vocab.iter().any(|term| folded.contains(term.as_str()))
    }

    /// Generic keyword scan for one field.
    ///
    /// Aliases are tried in declared order; the first alias that yields
    /// a non-empty candidate wins. On a hit line an inline capture is
    /// attempted first (when allowed), then the following line.
    fn scan_field(&self, idx: usize, spec: &FieldSpec, lines: &[String]) -> String {
        for (ai, alias) in spec.aliases.iter().enumerate() {
            let alias_folded = fold(alias);

            for (li, line) in lines.iter().enumerate() {
                if !fold(line).contains(&alias_folded) {
                    continue;
                }

                if spec.allow_inline {
                    if let Some(caps) = self.inline[idx][ai].captures(line) {
                        let rest = caps[1].trim();
                        if !rest.is_empty() && !self.contains_label(rest) {
                            return rest.to_string();
                        }
                    }
                }

                if let Some(next) = lines.get(li + 1) {
                    if !self.contains_label(next) {
                        return next.clone();
                    }
                }
            }
        }

        String::new()
    }

    /// Exclusion terms for the final cleaning pass.
    fn clean_exclusions(&self) -> Vec<&'static str> {
        if self.config.alias_echo_guard {
            vocabulary(self.schema)
        } else {
            self.schema.iter().map(|spec| spec.key).collect()
        }
    }
}

impl Default for KtpParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CardExtractor for KtpParser {
    fn extract(&self, lines: &[String]) -> ExtractionResult {
        let start = Instant::now();

        let lines = normalize_lines(lines);
        info!(
            "extracting {} fields from {} lines",
            self.schema.len(),
            lines.len()
        );

        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        for (idx, spec) in self.schema.iter().enumerate() {
            let candidate = self.scan_field(idx, spec, &lines);
            fields.insert(spec.key.to_string(), candidate);
        }

        if self.config.recover_print_date {
            if let Some(date) = find_print_date(&lines) {
                if let Some(slot) = fields.get_mut(field::TANGGAL_CETAK) {
                    if slot.is_empty() {
                        debug!("recovered print date {date}");
                        *slot = date;
                    }
                }
            }
        }

        if self.config.recover_garbled_labels {
            for spec in self.schema {
                let missing = fields.get(spec.key).is_some_and(String::is_empty);
                if missing {
                    if let Some(value) = recover_garbled(spec.key, &lines) {
                        debug!("recovered {} from garbled label", spec.key);
                        fields.insert(spec.key.to_string(), value);
                    }
                }
            }
        }

        let exclusions = self.clean_exclusions();
        for value in fields.values_mut() {
            if !value.is_empty() {
                *value = clean_value(value, &exclusions);
            }
        }

        let warnings: Vec<String> = self
            .schema
            .iter()
            .filter(|spec| fields.get(spec.key).is_some_and(String::is_empty))
            .map(|spec| format!("Could not extract {}", spec.key))
            .collect();

        debug!(
            "extraction finished with {}/{} fields",
            self.schema.len() - warnings.len(),
            self.schema.len()
        );

        ExtractionResult {
            fields,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        self.extract(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inline_capture() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["NIK: 3201012345670001"]));
        assert_eq!(result.get("nik"), "3201012345670001");
    }

    #[test]
    fn test_next_line_fallback() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["Nama", "BUDI SANTOSO"]));
        assert_eq!(result.get("nama"), "BUDI SANTOSO");
    }

    #[test]
    fn test_inline_disallowed_falls_back_to_next_line() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["Gol. Darah O", "O"]));
        assert_eq!(result.get("gol_darah"), "O");
    }

    #[test]
    fn test_spaced_label_still_matches() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["N I K", "3201012345670001"]));
        assert_eq!(result.get("nik"), "3201012345670001");
    }

    #[test]
    fn test_neighboring_label_rejected_as_value() {
        let parser = KtpParser::new();
        // "Nama" is followed by another label, not a value.
        let result = parser.extract(&lines(&["Nama", "NIK", "3201012345670001"]));
        assert_eq!(result.get("nama"), "");
        assert_eq!(result.get("nik"), "3201012345670001");
    }

    #[test]
    fn test_print_date_recovered_without_label() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&[
            "random noise",
            "Jakarta, 17-08-1998 something",
            "more noise",
        ]));
        assert_eq!(result.get("tanggal_cetak"), "17-08-1998");
    }

    #[test]
    fn test_print_date_recovery_can_be_disabled() {
        let parser = KtpParser::new().with_print_date_recovery(false);
        let result = parser.extract(&lines(&["Jakarta, 17-08-1998"]));
        assert_eq!(result.get("tanggal_cetak"), "");
    }

    #[test]
    fn test_garbled_birth_label_recovered() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["TempatITgl Lahir JAKARTA, 17-08-1990"]));
        assert_eq!(result.get("tempat_tgl_lahir"), "JAKARTA, 17-08-1990");
    }

    #[test]
    fn test_garbled_recovery_can_be_disabled() {
        let parser = KtpParser::new().with_garbled_recovery(false);
        let result = parser.extract(&lines(&["Kewarganegaran WNI"]));
        assert_eq!(result.get("kewarganegaraan"), "");
    }

    #[test]
    fn test_empty_input_yields_all_keys_empty() {
        let parser = KtpParser::new();
        let result = parser.extract(&[]);
        assert_eq!(result.fields.len(), KTP_FIELDS.len());
        assert!(result.fields.values().all(String::is_empty));
        assert_eq!(result.warnings.len(), KTP_FIELDS.len());
    }

    #[test]
    fn test_deterministic() {
        let input = lines(&["NIK: 3201012345670001", "Nama", "BUDI SANTOSO"]);
        let parser = KtpParser::new();
        let a = parser.extract(&input);
        let b = parser.extract(&input);
        assert_eq!(a.fields, b.fields);
        assert_eq!(a.warnings, b.warnings);
    }

    #[test]
    fn test_no_label_echo() {
        // A stray duplicated label must never come back as a value.
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["Nama", "Nama", "Agama", "ISLAM"]));
        for (key, value) in &result.fields {
            assert_ne!(value.to_lowercase(), *key);
        }
        assert_eq!(result.get("agama"), "ISLAM");
    }

    #[test]
    fn test_cleaning_strips_stray_punctuation() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["Nama: Budi Santoso, S.H.!!#"]));
        assert_eq!(result.get("nama"), "BUDI SANTOSO, S.H.");
    }

    #[test]
    fn test_first_alias_hit_wins_over_later_lines() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&[
            "Nama: BUDI SANTOSO",
            "Nama: ANDI WIJAYA",
        ]));
        assert_eq!(result.get("nama"), "BUDI SANTOSO");
    }

    #[test]
    fn test_blank_lines_do_not_break_adjacency() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&["Nama", "", "   ", "BUDI SANTOSO"]));
        assert_eq!(result.get("nama"), "BUDI SANTOSO");
    }

    #[test]
    fn test_full_card() {
        let parser = KtpParser::new();
        let result = parser.extract(&lines(&[
            "PROVINSI DKI JAKARTA",
            "KOTA JAKARTA BARAT",
            "NIK: 3173051702890001",
            "Nama: BUDI SANTOSO",
            "Tempat/Tgl Lahir: JAKARTA, 17-02-1989",
            "Jenis Kelamin: LAKI-LAKI",
            "Gol. Darah",
            "O",
            "Alamat: JL. KEBON JERUK RAYA NO. 27",
            "RT/RW: 007/008",
            "Kel/Desa: KEBON JERUK",
            "Kecamatan: KEBON JERUK",
            "Agama: ISLAM",
            "Status Perkawinan: KAWIN",
            "Pekerjaan: KARYAWAN SWASTA",
            "Kewarganegaraan: WNI",
            "Berlaku Hingga: SEUMUR HIDUP",
        ]));

        assert_eq!(result.get("nik"), "3173051702890001");
        assert_eq!(result.get("nama"), "BUDI SANTOSO");
        assert_eq!(result.get("tempat_tgl_lahir"), "JAKARTA, 17-02-1989");
        assert_eq!(result.get("jenis_kelamin"), "LAKI-LAKI");
        assert_eq!(result.get("gol_darah"), "O");
        assert_eq!(result.get("alamat"), "JL. KEBON JERUK RAYA NO. 27");
        assert_eq!(result.get("rt_rw"), "007/008");
        assert_eq!(result.get("kel_desa"), "KEBON JERUK");
        assert_eq!(result.get("kecamatan"), "KEBON JERUK");
        assert_eq!(result.get("agama"), "ISLAM");
        assert_eq!(result.get("status_perkawinan"), "KAWIN");
        assert_eq!(result.get("pekerjaan"), "KARYAWAN SWASTA");
        assert_eq!(result.get("kewarganegaraan"), "WNI");
        assert_eq!(result.get("berlaku_hingga"), "SEUMUR HIDUP");
        // The first DD-MM-YYYY token on the card is the birth date.
        assert_eq!(result.get("tanggal_cetak"), "17-02-1989");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_extract_from_text() {
        let parser = KtpParser::new();
        let result = parser.extract_from_text("NIK: 3201012345670001\nNama\nBUDI SANTOSO\n");
        assert_eq!(result.get("nik"), "3201012345670001");
        assert_eq!(result.get("nama"), "BUDI SANTOSO");
    }
}
