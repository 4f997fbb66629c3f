//! Command-line front end for the `sha256` binary
//!
//! Message bytes come from a text argument (UTF-8), a file, or an
//! interactive prompt when no subcommand is given.

use crate::{hash, Digest, Result, Sha256, Sha256Config};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compute FIPS 180-4 SHA-256 digests
#[derive(Debug, Parser)]
#[command(name = "sha256", version, about)]
pub struct Cli {
    /// Print the digest in lowercase hex
    #[arg(long, global = true)]
    pub lowercase: bool,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input source; prompts interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Input subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hash the UTF-8 bytes of TEXT
    Text {
        /// Text to hash
        text: String,
    },
    /// Hash the contents of a file
    File {
        /// File to hash
        path: PathBuf,
    },
}

/// Where the message bytes come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// UTF-8 encoded text
    Text(String),
    /// File contents
    File(PathBuf),
}

impl From<Command> for Source {
    fn from(command: Command) -> Self {
        match command {
            Command::Text { text } => Source::Text(text),
            Command::File { path } => Source::File(path),
        }
    }
}

/// Execute the CLI and return the rendered digest line
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the prompt
/// fails, or the input cannot be read.
pub fn run(cli: Cli) -> std::result::Result<String, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Sha256Config::from_path(path)?,
        None => Sha256Config::default(),
    };
    if cli.lowercase {
        config.uppercase = false;
    }

    let source = match cli.command {
        Some(command) => Source::from(command),
        None => prompt_source()?,
    };

    let digest = digest_source(&source, &config)?;
    Ok(config.render(&digest))
}

/// Hash the bytes named by `source`
///
/// # Errors
///
/// Returns `HashError::Io` if a file cannot be read.
pub fn digest_source(source: &Source, config: &Sha256Config) -> Result<Digest> {
    match source {
        Source::Text(text) => hash(text.as_bytes()),
        Source::File(path) => hash_file(path, config.chunk_size),
    }
}

/// Hash a file by reading it in `chunk_size` pieces
///
/// # Errors
///
/// Returns `HashError::Io` if the file cannot be opened or read.
pub fn hash_file(path: &Path, chunk_size: usize) -> Result<Digest> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size.max(1)];

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buf[..n])?;
    }

    debug!(path = %path.display(), bytes = hasher.total_bytes(), "Hashed file");
    hasher.finalize()
}

/// Ask for "text" or "file", then the text or an existing file path
fn prompt_source() -> dialoguer::Result<Source> {
    let choice = Select::new()
        .with_prompt("Would you like to enter in 'text' or a 'file'")
        .items(&["text", "file"])
        .default(0)
        .interact()?;

    if choice == 0 {
        let text: String = Input::new()
            .with_prompt("Enter your text")
            .allow_empty(true)
            .interact_text()?;
        Ok(Source::Text(text))
    } else {
        let path: String = Input::new()
            .with_prompt("Enter your filename with its full path")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if Path::new(input).is_file() {
                    Ok(())
                } else {
                    Err("Please enter a valid filename.")
                }
            })
            .interact_text()?;
        Ok(Source::File(PathBuf::from(path)))
    }
}
