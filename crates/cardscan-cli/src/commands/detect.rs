//! Detect command - classify a statement without extracting.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cardscan_core::statement::Classifier;

use super::{load_config, read_document};

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Input statement PDF
    #[arg(required = true)]
    input: PathBuf,
}

pub fn run(args: DetectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let doc = read_document(&args.input, config.pdf.table_strategy)?;
    let classifier = Classifier::from_config(&config.classifier);

    match classifier.classify(&doc) {
        Some(bank) => {
            println!("{} Detected: {}", style("✓").green(), style(bank).cyan().bold());
            Ok(())
        }
        None => {
            anyhow::bail!("unrecognized statement: no known bank markers found")
        }
    }
}
