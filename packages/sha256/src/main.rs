//! Main entry point for the `sha256` CLI application

use clap::Parser;
use cryypt_sha256::cli::{self, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    cryypt_sha256::logging::init();

    let line = cli::run(Cli::parse())?;
    println!("{line}");
    Ok(())
}
