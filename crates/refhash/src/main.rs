//! `refhash` binary entry point.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::cmp::Ordering;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use refhash::{ops, Hash, HashReport, OutputFormat, ParseOutcome, RefhashConfig};

/// refhash CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "refhash")]
#[command(about = "Content-addressed identifiers: hash, parse, and compare")]
struct Args {
    /// Output format (text or json).
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Read buffer size in bytes.
    #[arg(long, global = true, default_value_t = RefhashConfig::default().chunk_size)]
    chunk_size: usize,

    /// Log level (trace, debug, info, warn, error). REFHASH_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hash files, or stdin when none are given.
    Hash { files: Vec<PathBuf> },
    /// Check strings for canonical form and show their digests.
    Parse {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Compare two hashes.
    Compare { a: String, b: String },
    /// Print the empty hash.
    Empty,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("REFHASH_LOG")
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("refhash: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = RefhashConfig {
        chunk_size: args.chunk_size,
        output: args.format,
    };
    config.validate()?;
    tracing::info!(?config, "starting");

    match args.command {
        Command::Hash { files } => {
            if files.is_empty() {
                let report = ops::hash_reader("-", io::stdin().lock(), &config)
                    .context("failed to hash stdin")?;
                print_report(&report, config.output)?;
            }
            for path in files {
                let report = ops::hash_path(&path, &config)
                    .with_context(|| format!("failed to hash {}", path.display()))?;
                print_report(&report, config.output)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Parse { inputs } => {
            let outcomes = ops::parse_all(&inputs);
            for outcome in &outcomes {
                print_outcome(outcome, config.output)?;
            }
            if outcomes.iter().all(|o| o.hash.is_some()) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Compare { a, b } => {
            let ordering = ops::compare(&a, &b)?;
            let symbol = match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            match config.output {
                OutputFormat::Text => println!("{symbol}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "a": a, "b": b, "ordering": symbol })
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Empty => {
            match config.output {
                OutputFormat::Text => println!("{}", Hash::EMPTY),
                OutputFormat::Json => println!("{}", serde_json::to_string(&Hash::EMPTY)?),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_report(report: &HashReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}  {}", report.hash, report.source),
        OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
    }
    Ok(())
}

fn print_outcome(outcome: &ParseOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => match (&outcome.hash, &outcome.digest_hex) {
            (Some(hash), Some(hex)) => {
                let note = if outcome.is_empty { "  (empty)" } else { "" };
                println!("{hash}  {hex}{note}");
            }
            (None, _) => println!("invalid  {:?}", outcome.input),
            (Some(_), None) => bail!("parsed hash without digest for {:?}", outcome.input),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string(outcome)?),
    }
    Ok(())
}
