//! mediashelf CLI entrypoint

use anyhow::Result;
use clap::Parser;

use mediashelf::cli::Cli;
use mediashelf::{config, logging};

fn main() -> Result<()> {
    // Parse first so --help and --version work without touching the log dir
    let cli = Cli::parse();

    // Initialize tracing
    let cfg = config::config()?;
    logging::init(&cfg.logging)?;

    cli.execute()
}
