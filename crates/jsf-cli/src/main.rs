//! # jsf CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jsf_cli::check::{run_check, CheckArgs};
use jsf_cli::generate::{run_generate, GenerateArgs};

/// JSON Schema faker.
///
/// Generates random JSON documents that conform to a JSON Schema.
#[derive(Parser, Debug)]
#[command(name = "jsf", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print values generated from a schema.
    Generate(GenerateArgs),

    /// Generate values and validate them against the schema.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Values go to stdout; keep logs off it.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("jsf CLI starting");

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args, config),
        Commands::Check(args) => run_check(&args, config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
