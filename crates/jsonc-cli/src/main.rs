//! `jsonc` CLI: format, query, flatten, and check lenient-JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat a config (stdin → stdout), stripping comments
//! echo '{/* note */ "a": 0x10,}' | jsonc fmt
//!
//! # Compact instead of pretty
//! jsonc fmt --compact -i app.jsonc
//!
//! # Pull one value out by path
//! jsonc get server/port -i app.jsonc
//!
//! # Flatten to single-level composite keys
//! jsonc flatten -i app.jsonc --separator /
//!
//! # Validate only; parse errors point at the offending character
//! jsonc check -i app.jsonc
//! ```
//!
//! Input is read whole before parsing and bounded by `--max-bytes`
//! (default 100000). Hitting the cap is a read error, reported distinctly
//! from any parse failure.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonc_core::{flatten_with_separator, get_value_for_path, to_text, Value};
use std::fs::File;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jsonc", version, about = "Lenient JSON (comments, hex, stray commas) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum bytes to read from a file or stdin before parsing
    #[arg(long, default_value_t = 100_000, global = true)]
    max_bytes: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and reformat a document (comments are stripped)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit a single line instead of the indented layout
        #[arg(long)]
        compact: bool,
    },
    /// Look up one value by slash- or dot-delimited path
    Get {
        /// Path into the document, e.g. server/port or server.port
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Flatten the document into single-level composite keys
    Flatten {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Separator joining path segments in composite keys
        #[arg(long, default_value = ".")]
        separator: String,
    },
    /// Parse only; succeed silently or fail with a caret diagnostic
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            compact,
        } => {
            let text = read_input(input.as_deref(), cli.max_bytes)?;
            let doc = parse_document(&text)?;
            write_output(output.as_deref(), &to_text(&doc, !compact))?;
        }
        Commands::Get { path, input } => {
            let text = read_input(input.as_deref(), cli.max_bytes)?;
            let doc = parse_document(&text)?;
            match get_value_for_path(&doc, &path) {
                Some(value) => println!("{}", to_text(value, false)),
                None => anyhow::bail!("no value at path `{path}`"),
            }
        }
        Commands::Flatten {
            input,
            output,
            separator,
        } => {
            let text = read_input(input.as_deref(), cli.max_bytes)?;
            let doc = parse_document(&text)?;
            let flat = Value::Object(flatten_with_separator(&doc, &separator));
            write_output(output.as_deref(), &to_text(&flat, true))?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref(), cli.max_bytes)?;
            parse_document(&text)?;
        }
    }

    Ok(())
}

/// Parse, folding the caret diagnostic into the reported error so failures
/// show the offending line.
fn parse_document(text: &str) -> Result<Value> {
    jsonc_core::parse(text).map_err(|err| {
        let pointer = err.pointer();
        anyhow::anyhow!("{err}\n{pointer}")
    })
}

fn read_input(path: Option<&str>, max_bytes: u64) -> Result<String> {
    match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
            bounded_read(file, max_bytes).with_context(|| format!("Failed to read file: {}", path))
        }
        None => bounded_read(io::stdin(), max_bytes).context("Failed to read from stdin"),
    }
}

/// Read at most `max_bytes` bytes. One byte past the cap proves the source
/// was larger, without ever buffering more than the cap itself.
fn bounded_read(reader: impl Read, max_bytes: u64) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes + 1)
        .read_to_end(&mut bytes)
        .context("read failed")?;
    if bytes.len() as u64 > max_bytes {
        anyhow::bail!("input exceeds the {max_bytes} byte cap");
    }
    String::from_utf8(bytes).context("input is not valid UTF-8")
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
