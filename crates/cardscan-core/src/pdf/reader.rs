//! PDF reading using lopdf and pdf-extract, with table recovery from text.

use lazy_static::lazy_static;
use lopdf::Document as PdfDocument;
use regex::Regex;
use tracing::debug;

use super::{Document, DocumentReader, Page, Result, Table, TableStrategy};
use crate::error::PdfError;

lazy_static! {
    /// Gap of two or more spaces between cells of a ruled-table row.
    static ref CELL_GAP: Regex = Regex::new(r"[ \t]{2,}").unwrap();
}

/// Statement reader backed by lopdf.
pub struct PdfReader {
    document: Option<PdfDocument>,
    raw_data: Vec<u8>,
}

impl PdfReader {
    /// Create a new reader with no document loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Split full-document text into per-page chunks.
    ///
    /// pdf-extract does not report page boundaries, so lines are divided
    /// proportionally across the page count.
    fn page_texts(&self, full_text: &str, page_count: usize) -> Vec<String> {
        let lines: Vec<&str> = full_text.lines().collect();
        let lines_per_page = lines.len().div_ceil(page_count).max(1);

        (0..page_count)
            .map(|page| {
                let start = (page * lines_per_page).min(lines.len());
                let end = ((page + 1) * lines_per_page).min(lines.len());
                lines[start..end].join("\n")
            })
            .collect()
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdfReader {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = PdfDocument::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty-password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn read(&self, strategy: TableStrategy) -> Result<Document> {
        let page_count = self.page_count() as usize;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        // Image-only or unsupported pages yield empty text, not an error.
        let full_text = self.extract_text().unwrap_or_default();
        debug!(
            "extracted {} chars of text across {} pages",
            full_text.len(),
            page_count
        );

        let pages = self
            .page_texts(&full_text, page_count)
            .into_iter()
            .map(|text| {
                let tables = recover_tables(&text, strategy);
                Page { text, tables }
            })
            .collect();

        Ok(Document { pages })
    }
}

/// Recover tables from extracted page text.
fn recover_tables(text: &str, strategy: TableStrategy) -> Vec<Table> {
    match strategy {
        TableStrategy::Lattice => lattice_tables(text),
        TableStrategy::Text => aligned_tables(text),
    }
}

/// Consecutive lines that split into two or more cells on wide gaps form
/// one table. Blocks shorter than two rows are discarded as prose.
fn lattice_tables(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let cells: Vec<&str> = CELL_GAP
            .split(trimmed)
            .filter(|c| !c.trim().is_empty())
            .collect();

        if cells.len() >= 2 {
            rows.push(cells.into_iter().map(|c| Some(c.trim().to_string())).collect());
        } else {
            flush_rows(&mut rows, &mut tables);
        }
    }
    flush_rows(&mut rows, &mut tables);

    tables
}

fn flush_rows(rows: &mut Vec<Vec<Option<String>>>, tables: &mut Vec<Table>) {
    if rows.len() >= 2 {
        tables.push(Table {
            rows: std::mem::take(rows),
        });
    } else {
        rows.clear();
    }
}

/// Blank-line-separated blocks of lines are aligned by character column:
/// a column boundary is a run of two or more character positions that are
/// blank in every line of the block.
fn aligned_tables(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut tables);
        } else {
            block.push(line);
        }
    }
    flush_block(&mut block, &mut tables);

    tables
}

fn flush_block(block: &mut Vec<&str>, tables: &mut Vec<Table>) {
    if block.len() >= 2 {
        if let Some(table) = align_block(block) {
            tables.push(table);
        }
    }
    block.clear();
}

fn align_block(lines: &[&str]) -> Option<Table> {
    let width = lines.iter().map(|l| l.chars().count()).max()?;
    if width == 0 {
        return None;
    }

    // Character positions blank in every line of the block. Positions past
    // a short line's end count as blank.
    let mut blank = vec![true; width];
    for line in lines {
        for (i, ch) in line.chars().enumerate() {
            if !ch.is_whitespace() {
                blank[i] = false;
            }
        }
    }

    // Column spans between blank runs of length >= 2. A single blank
    // position is an ordinary word space, not a cell boundary.
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut span_start = None;
    let mut i = 0;
    while i < width {
        if blank[i] {
            let run_start = i;
            while i < width && blank[i] {
                i += 1;
            }
            if i - run_start >= 2 {
                if let Some(start) = span_start.take() {
                    spans.push((start, run_start));
                }
            } else if span_start.is_none() {
                span_start = Some(run_start);
            }
        } else {
            if span_start.is_none() {
                span_start = Some(i);
            }
            i += 1;
        }
    }
    if let Some(start) = span_start {
        spans.push((start, width));
    }

    if spans.len() < 2 {
        return None;
    }

    let rows = lines
        .iter()
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            spans
                .iter()
                .map(|&(start, end)| {
                    if start >= chars.len() {
                        return None;
                    }
                    let cell: String = chars[start..end.min(chars.len())].iter().collect();
                    let cell = cell.trim().to_string();
                    if cell.is_empty() { None } else { Some(cell) }
                })
                .collect()
        })
        .collect();

    Some(Table { rows })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cell(table: &Table, row: usize, col: usize) -> Option<&str> {
        table.rows[row][col].as_deref()
    }

    #[test]
    fn test_reader_starts_empty() {
        let reader = PdfReader::new();
        assert!(reader.document.is_none());
        assert_eq!(reader.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut reader = PdfReader::new();
        let err = reader.load(b"not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_lattice_recovers_gapped_rows() {
        let text = "Statement of account\n\
                    01/01/2024  COFFEE SHOP       250.00\n\
                    02/01/2024  FUEL SURCHARGE    10.00\n\
                    Page 1 of 2";

        let tables = lattice_tables(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(cell(&tables[0], 0, 0), Some("01/01/2024"));
        assert_eq!(cell(&tables[0], 0, 1), Some("COFFEE SHOP"));
        assert_eq!(cell(&tables[0], 1, 2), Some("10.00"));
    }

    #[test]
    fn test_lattice_ignores_single_row_blocks() {
        let text = "lonely  row\nprose line without gaps";
        assert!(lattice_tables(text).is_empty());
    }

    #[test]
    fn test_aligned_keeps_empty_cells() {
        let text = "01/01/2024  AMAZON PAY          250.00\n\
                    02/01/2024                       99.00";

        let tables = aligned_tables(text);
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(cell(table, 0, 1), Some("AMAZON PAY"));
        assert_eq!(table.rows[1][1], None);
        assert_eq!(cell(table, 1, 2), Some("99.00"));
    }

    #[test]
    fn test_aligned_rejects_single_column_blocks() {
        let text = "just some prose\nmore prose here";
        assert!(aligned_tables(text).is_empty());
    }

    #[test]
    fn test_page_texts_covers_all_lines() {
        let reader = PdfReader::new();
        let text = "a\nb\nc\nd\ne";
        let pages = reader.page_texts(text, 2);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], "a\nb\nc");
        assert_eq!(pages[1], "d\ne");
    }

    #[test]
    fn test_page_texts_more_pages_than_lines() {
        let reader = PdfReader::new();
        let pages = reader.page_texts("only line", 3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], "only line");
        assert_eq!(pages[1], "");
    }
}
