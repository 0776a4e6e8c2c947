//! Batch command - parse multiple statement PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, warn};

use cardscan_core::models::statement::StatementReport;
use cardscan_core::statement::parse_document;

use super::parse::{format_report, OutputFormat};
use super::{load_config, read_document, StrategyArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV across all files
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Table recovery strategy (default: from config)
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    report: Option<StatementReport>,
    error: Option<String>,
}

/// One row of the cross-file summary CSV.
#[derive(Serialize)]
struct SummaryRow<'a> {
    file: String,
    bank: String,
    transactions: usize,
    skipped_rows: usize,
    total_spend: Decimal,
    total_payments: Decimal,
    error: &'a str,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let strategy = args
        .strategy
        .map(Into::into)
        .unwrap_or(config.pdf.table_strategy);

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let result = read_document(&path, strategy)
            .and_then(|doc| parse_document(&doc, &config).map_err(Into::into));

        match result {
            Ok(report) => {
                results.push(FileResult {
                    path,
                    report: Some(report),
                    error: None,
                });
            }
            Err(e) => {
                let message = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), message);
                    results.push(FileResult {
                        path,
                        report: None,
                        error: Some(message),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), message);
                    anyhow::bail!("Processing failed: {}", message);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    for result in &results {
        if let (Some(report), Some(output_dir)) = (&result.report, &args.output_dir) {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("statement");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", stem, extension));
            fs::write(&output_path, format_report(report, args.format)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        write_summary(&results, args.output_dir.as_deref())?;
    }

    let parsed = results.iter().filter(|r| r.report.is_some()).count();
    let failed = results.len() - parsed;
    println!(
        "{} Parsed {} of {} files in {:.1?}{}",
        style("✓").green(),
        parsed,
        results.len(),
        start.elapsed(),
        if failed > 0 {
            format!(" ({} failed)", failed)
        } else {
            String::new()
        }
    );

    for result in results.iter().filter(|r| r.error.is_some()) {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            result.path.display(),
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    Ok(())
}

fn write_summary(results: &[FileResult], output_dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let summary_path = output_dir
        .unwrap_or_else(|| std::path::Path::new("."))
        .join("summary.csv");

    let mut writer = csv::Writer::from_path(&summary_path)?;
    for result in results {
        let row = match &result.report {
            Some(report) => SummaryRow {
                file: result.path.display().to_string(),
                bank: report.bank.to_string(),
                transactions: report.transactions.len(),
                skipped_rows: report.skipped_rows,
                total_spend: report.summary.total_spend,
                total_payments: report.summary.total_payments,
                error: "",
            },
            None => SummaryRow {
                file: result.path.display().to_string(),
                bank: String::new(),
                transactions: 0,
                skipped_rows: 0,
                total_spend: Decimal::ZERO,
                total_payments: Decimal::ZERO,
                error: result.error.as_deref().unwrap_or("unknown error"),
            },
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!(
        "{} Summary written to {}",
        style("✓").green(),
        summary_path.display()
    );
    Ok(())
}
