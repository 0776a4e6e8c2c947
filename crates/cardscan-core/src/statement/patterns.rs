//! Shared regular expressions for statement parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Strict DD/MM/YYYY date, anchored to the whole cell.
    pub static ref DATE_STRICT: Regex = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();

    /// DD/MM/YYYY date anywhere inside a cell.
    pub static ref DATE_ANYWHERE: Regex = Regex::new(r"(\d{2}/\d{2}/\d{4})").unwrap();

    /// A text line that opens with a date and so looks transaction-like.
    pub static ref DATE_LINE_PREFIX: Regex = Regex::new(r"^\d{2}/\d{2}/\d{4}\s").unwrap();

    /// Credit marker: a "cr" suffix or a parenthesised amount.
    pub static ref CREDIT_MARKER: Regex = Regex::new(r"(?i)(cr|\(.*\))").unwrap();

    /// ICICI Coral text line: date, reference, narration, optional serial
    /// column junk, amount with optional CR suffix.
    pub static ref ICICI_CORAL_LINE: Regex = Regex::new(
        r"^(\d{2}/\d{2}/\d{4})\s+\S+\s+(.+?)\s+\d*\s*.*?\s+([\d,\.]+\s*CR|[\d,\.]+)$"
    ).unwrap();

    /// Axis text line with a spend-category column between narration and
    /// amount.
    pub static ref AXIS_LINE_CATEGORY: Regex = Regex::new(
        r"^(\d{2}/\d{2}/\d{4})\s+(.+?)\s+[A-Za-z\s]+\s+([\d,\.]+\s*(?:Cr|Dr))$"
    ).unwrap();

    /// Axis payment line; payments carry no category column.
    pub static ref AXIS_LINE_PAYMENT: Regex = Regex::new(
        r"^(\d{2}/\d{2}/\d{4})\s+(INTERNET PAYMENT.+?)\s+([\d,\.]+\s*(?:Cr|Dr))$"
    ).unwrap();

    /// IDFC text line: date, narration, amount with optional CR suffix.
    pub static ref IDFC_LINE: Regex = Regex::new(
        r"^(\d{2}/\d{2}/\d{4})\s+(.+?)\s+([\d,\.]+\s*CR|[\d,\.]+)$"
    ).unwrap();
}
