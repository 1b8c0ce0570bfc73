//! CLI tool for licence plate formatting.
//!
//! # Usage
//!
//! ```bash
//! # Format a value
//! platefmt format "ab-12 34"
//!
//! # Exit 0 if a value is already formatted, 1 otherwise
//! platefmt check AB-12-34
//!
//! # Print the segments of a value
//! platefmt segments 1234ab
//!
//! # Format every line read from stdin
//! cat plates.txt | platefmt batch --changed-only
//! ```

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use plate_formatter::format::{self, Reformat};
use plate_formatter::stream::FormatExt;

#[derive(Parser)]
#[command(name = "platefmt")]
#[command(author, version, about = "As-you-type licence plate formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a plate value
    Format {
        /// Raw value (spaces and hyphens are ignored)
        value: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Check whether a value is already formatted
    Check {
        /// Value to check
        value: String,
    },

    /// Print the segments of a formatted value, one per line
    Segments {
        /// Raw value
        value: String,
    },

    /// Format every line read from stdin
    Batch {
        /// Only print lines that would change, prefixed by their line number
        #[arg(short, long)]
        changed_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { value, output } => {
            cmd_format(&value, output);
        }
        Commands::Check { value } => {
            cmd_check(&value);
        }
        Commands::Segments { value } => {
            cmd_segments(&value);
        }
        Commands::Batch { changed_only } => {
            if let Err(e) = cmd_batch(changed_only) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn cmd_format(value: &str, output: OutputFormat) {
    let outcome = format::reformat(value);
    let formatted = outcome.value().unwrap_or(value);

    match output {
        OutputFormat::Text => {
            println!("{}", formatted);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&format_json(value)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn format_json(value: &str) -> serde_json::Value {
    let outcome = format::reformat(value);
    serde_json::json!({
        "input": value,
        "formatted": outcome.value().unwrap_or(value),
        "changed": outcome.is_changed(),
    })
}

fn cmd_check(value: &str) {
    match format::reformat(value) {
        Reformat::Unchanged => {
            println!("Formatted: yes");
            std::process::exit(0);
        }
        Reformat::Rewrite(expected) => {
            println!("Formatted: no");
            println!("Expected: {}", expected);
            std::process::exit(1);
        }
    }
}

fn cmd_segments(value: &str) {
    for segment in format::split_segments(value) {
        println!("{}", segment);
    }
}

fn cmd_batch(changed_only: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let lines = stdin.lock().lines().collect::<io::Result<Vec<String>>>()?;

    if changed_only {
        for (index, outcome) in lines.iter().reformat_plates() {
            if let Reformat::Rewrite(formatted) = outcome {
                writeln!(out, "{}: {}", index + 1, formatted)?;
            }
        }
    } else {
        for formatted in lines.iter().format_plates() {
            writeln!(out, "{}", formatted)?;
        }
    }

    out.flush()
}
