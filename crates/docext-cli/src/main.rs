//! CLI for PDF conversion and invoice extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{convert, extract, serve};

/// Convert PDFs to Markdown/JSON and extract invoice fields
#[derive(Parser)]
#[command(name = "docext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF to Markdown or structured JSON
    Convert(convert::ConvertArgs),

    /// Extract invoice fields from a PDF
    Extract(extract::ExtractArgs),

    /// Run the HTTP service
    Serve(serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Convert(args) => convert::run(args).await,
        Commands::Extract(args) => extract::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
    }
}
