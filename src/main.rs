use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    // Parse CLI first to check verbose flag
    let cli = cli::Cli::parse();

    // Log to stderr to keep stdout clean for structured output.
    // RUST_LOG wins, then LOG_LEVEL, then a quiet default.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else if let Ok(level) = std::env::var("LOG_LEVEL") {
        EnvFilter::new(level.to_lowercase())
    } else {
        EnvFilter::new("warn,ort=error")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli::run_with(cli)
}
