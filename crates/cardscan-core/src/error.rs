//! Error types for the cardscan-core library.

use thiserror::Error;

use crate::models::statement::Bank;

/// Main error type for the cardscan library.
#[derive(Error, Debug)]
pub enum CardscanError {
    /// PDF reading error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF reading.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF byte stream.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Outcomes of the classify-and-extract pipeline that are not a record list.
#[derive(Error, Debug)]
pub enum ParseError {
    /// No classifier rule matched the document.
    #[error("unrecognized statement: no known bank markers found")]
    UnknownBank,

    /// The extractor ran but produced no records. Soft failure: the
    /// statement layout may have drifted from what the extractor expects.
    #[error("{bank} extractor found no transactions; the statement layout may have changed")]
    NoTransactions { bank: Bank },

    /// The extractor failed part-way through the document.
    #[error("failed to extract {bank} transactions")]
    Extraction {
        bank: Bank,
        #[source]
        source: ExtractionError,
    },
}

/// Errors raised inside a per-bank extractor.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A header row was recognized but a required column is missing.
    #[error("table header is missing column {0:?}")]
    MissingColumn(String),
}

/// Result type for the cardscan library.
pub type Result<T> = std::result::Result<T, CardscanError>;
