//! Decoding of the upstream OCR service payload.
//!
//! The OCR collaborator is a black box that answers scan requests with
//! `{"success": true, "extractedText": ["line", ...]}`. This module
//! turns that payload (or a bare JSON string array) into the line
//! sequence the extractor consumes.

use serde::{Deserialize, Serialize};

use crate::error::{IdcrError, Result};

/// Response shape of the OCR scan service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    /// Whether the scan succeeded.
    pub success: bool,

    /// Recognized text lines, top-to-bottom reading order.
    #[serde(default)]
    pub extracted_text: Vec<String>,

    /// Failure message when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OcrResponse {
    /// Consume the response, yielding its line sequence.
    pub fn into_lines(self) -> Result<Vec<String>> {
        if !self.success {
            return Err(IdcrError::Ocr(
                self.message.unwrap_or_else(|| "scan failed".to_string()),
            ));
        }
        Ok(self.extracted_text)
    }
}

/// Decode OCR lines from JSON: either an [`OcrResponse`] object or a
/// bare array of strings.
pub fn lines_from_json(json: &str) -> Result<Vec<String>> {
    if let Ok(lines) = serde_json::from_str::<Vec<String>>(json) {
        return Ok(lines);
    }
    let response: OcrResponse = serde_json::from_str(json)?;
    response.into_lines()
}
