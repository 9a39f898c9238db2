//! KTP field extraction module.

pub mod normalize;
mod parser;
pub mod rules;
pub mod schema;

pub use parser::{ExtractionResult, KtpParser};

/// Trait for identity-card field extractors.
///
/// Extraction is total: every schema key appears in the result, with an
/// empty string standing in for "not detected".
pub trait CardExtractor {
    /// Extract card fields from a sequence of recognized lines.
    fn extract(&self, lines: &[String]) -> ExtractionResult;

    /// Extract card fields from plain text, one line per OCR segment.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}
