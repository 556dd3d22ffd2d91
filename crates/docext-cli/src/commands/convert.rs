//! Convert command - turn a single PDF into Markdown or JSON.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use docext_core::DocumentConverter;

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown output
    Markdown,
    /// Structured JSON output
    Json,
}

pub async fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Converting PDF...");

    let converter = DocumentConverter::new();
    let document = converter.convert(&args.input)?;

    pb.finish_and_clear();
    debug!(
        "converted {} pages in {:?}",
        document.page_count,
        start.elapsed()
    );

    let output = match args.format {
        OutputFormat::Markdown => document.to_markdown(),
        OutputFormat::Json => serde_json::to_string_pretty(&document.to_json())?,
    };

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
