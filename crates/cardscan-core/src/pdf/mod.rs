//! Parsed-document model and PDF reading.

mod reader;

pub use reader::PdfReader;

use serde::{Deserialize, Serialize};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Table recovery strategy applied to extracted page text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStrategy {
    /// Split rows on runs of two or more spaces. Approximates
    /// geometry-based extraction for statements with ruled tables.
    #[default]
    Lattice,

    /// Infer column boundaries from character positions that are blank
    /// across a whole block of lines. Works on irregularly-bordered
    /// tables where cell gaps collapse to uneven whitespace.
    Text,
}

/// A parsed document: ordered pages exposing text and recovered tables.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Content of a single page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Best-effort extracted text; empty for image-only pages.
    pub text: String,

    /// Tables recovered from this page.
    pub tables: Vec<Table>,
}

impl Page {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tables: Vec::new(),
        }
    }

    pub fn add_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }
}

/// A row-major cell grid. Cells may be absent where extraction found
/// nothing at a column position.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table from fully-populated string rows.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'static str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| Some(c.to_string())).collect())
                .collect(),
        }
    }
}

/// Trait for document readers producing a [`Document`] from raw bytes.
pub trait DocumentReader {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract text from the entire document.
    fn extract_text(&self) -> Result<String>;

    /// Produce the page/table view of the loaded document.
    fn read(&self, strategy: TableStrategy) -> Result<Document>;
}
