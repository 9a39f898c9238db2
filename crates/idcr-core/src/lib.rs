//! Core library for Indonesian KTP identity-card OCR processing.
//!
//! This crate provides:
//! - Normalization of raw OCR text lines
//! - Keyword-driven KTP field extraction (NIK, name, birth info, address, ...)
//! - Field data models and extraction configuration
//! - Decoding of the upstream OCR service payload
//!
//! The extractor is a pure function over an in-memory line sequence: it
//! never fails, never blocks, and degrades to empty field values when a
//! field cannot be located.

pub mod error;
pub mod extract;
pub mod models;

pub use error::{IdcrError, Result};
pub use extract::{CardExtractor, ExtractionResult, KtpParser};
pub use extract::normalize::{fold, loose_contains, loose_eq, normalize_lines};
pub use extract::schema::{FieldSpec, KTP_FIELDS};
pub use models::card::KtpData;
pub use models::config::ExtractionConfig;
pub use models::ocr::{lines_from_json, OcrResponse};
