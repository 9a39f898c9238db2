//! Extraction configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the KTP field extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Reject cleaned values that echo a label alias, not only values
    /// that echo a field key.
    pub alias_echo_guard: bool,

    /// Run the garbled-label recovery pass for fields the generic scan
    /// left empty.
    pub recover_garbled_labels: bool,

    /// Fill the print-date field from the first DD-MM-YYYY token on the
    /// card.
    pub recover_print_date: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            alias_echo_guard: true,
            recover_garbled_labels: true,
            recover_print_date: true,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
