//! Parse command - extract transactions from a single statement PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardscan_core::models::statement::StatementReport;
use cardscan_core::statement::parse_document;
use cardscan_core::ParseError;

use super::{load_config, read_document, StrategyArg};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input statement PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Table recovery strategy (default: from config)
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// CSV transaction rows
    Csv,
    /// Plain text table with summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let strategy = args
        .strategy
        .map(Into::into)
        .unwrap_or(config.pdf.table_strategy);

    info!("Processing file: {}", args.input.display());
    let doc = read_document(&args.input, strategy)?;

    let report = match parse_document(&doc, &config) {
        Ok(report) => report,
        Err(err @ ParseError::NoTransactions { .. }) => {
            eprintln!("{} {}", style("!").yellow(), err);
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

/// Render a report in the requested format.
pub fn format_report(report: &StatementReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_report_csv(report),
        OutputFormat::Text => Ok(format_report_text(report)),
    }
}

fn format_report_csv(report: &StatementReport) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for txn in &report.transactions {
        writer.serialize(txn)?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

fn format_report_text(report: &StatementReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Detected: {}\n\n", style(report.bank).cyan().bold()));
    out.push_str(&format!(
        "{:<12} {:<48} {:>14}\n",
        "DATE", "DESCRIPTION", "AMOUNT"
    ));

    for txn in &report.transactions {
        out.push_str(&format!(
            "{:<12} {:<48} {:>14}\n",
            txn.date, txn.description, txn.amount
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Total spend (debits):     ₹{}\n",
        report.summary.total_spend
    ));
    out.push_str(&format!(
        "Total payments (credits): ₹{}\n",
        report.summary.total_payments
    ));

    if report.skipped_rows > 0 {
        out.push_str(&format!(
            "{} {} row(s) skipped during extraction\n",
            style("!").yellow(),
            report.skipped_rows
        ));
    }

    out
}
