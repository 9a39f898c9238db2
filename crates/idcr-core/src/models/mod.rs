//! Data models for KTP extraction.

pub mod card;
pub mod config;
pub mod ocr;
