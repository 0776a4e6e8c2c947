//! CLI subcommands.

pub mod batch;
pub mod detect;
pub mod parse;

use std::path::Path;

use cardscan_core::models::config::CardscanConfig;
use cardscan_core::pdf::{Document, DocumentReader, PdfReader, TableStrategy};

/// Table recovery strategy, as a CLI argument.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StrategyArg {
    /// Split rows on wide gaps (ruled tables)
    Lattice,
    /// Infer columns from whitespace alignment (borderless tables)
    Text,
}

impl From<StrategyArg> for TableStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lattice => TableStrategy::Lattice,
            StrategyArg::Text => TableStrategy::Text,
        }
    }
}

/// Load configuration from an optional path, falling back to defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<CardscanConfig> {
    match path {
        Some(p) => Ok(CardscanConfig::from_file(Path::new(p))?),
        None => Ok(CardscanConfig::default()),
    }
}

/// Read a statement PDF into a parsed document.
pub(crate) fn read_document(path: &Path, strategy: TableStrategy) -> anyhow::Result<Document> {
    let data = std::fs::read(path)?;
    let mut reader = PdfReader::new();
    reader.load(&data)?;
    Ok(reader.read(strategy)?)
}
