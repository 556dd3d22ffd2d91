//! Extract command - pull invoice fields out of a single PDF.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use docext_core::{DocumentConverter, InvoiceExtractor, RuleInvoiceExtractor};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let converter = DocumentConverter::new();
    let document = converter.convert(&args.input)?;
    debug!("extracted {} bytes of text", document.text.len());

    let record = RuleInvoiceExtractor::new().extract(&document.text);

    if args.show_missing {
        let missing = record.missing_fields();
        if !missing.is_empty() {
            eprintln!(
                "{} Fields not found: {}",
                style("⚠").yellow(),
                missing.join(", ")
            );
        }
    }

    let output = serde_json::to_string_pretty(&record)?;

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

    Ok(())
}
