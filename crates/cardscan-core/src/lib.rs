//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF reading (text extraction and table recovery)
//! - Keyword-rule bank detection over statement headers
//! - Per-bank transaction extraction (HDFC, ICICI Coral, ICICI Amazon
//!   Pay, Axis My Zone, IDFC First)
//! - Amount normalization and aggregate summaries

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{CardscanError, ExtractionError, ParseError, PdfError, Result};
pub use models::config::CardscanConfig;
pub use models::statement::{Bank, StatementReport, Summary, Transaction};
pub use pdf::{Document, DocumentReader, Page, PdfReader, Table, TableStrategy};
pub use statement::{
    extractor_for, parse_document, Classifier, ClassifierRule, Extraction, StatementExtractor,
};
