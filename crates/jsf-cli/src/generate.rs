//! # Generate Subcommand
//!
//! Prints generated values to stdout, one compact JSON document per line,
//! or pretty-printed and separated by blank lines with `--pretty`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::{GenerationArgs, Session};

/// Arguments for the `jsf generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Schema file (JSON, or YAML by extension).
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Pretty-print each value.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the generate subcommand.
///
/// Returns exit code 0; generation failures surface as errors.
pub fn run_generate(args: &GenerateArgs, config: Option<&Path>) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_values(args, config, &mut out)?;
    Ok(0)
}

/// Generate `args.generation.count` values into `out`.
pub fn write_values(args: &GenerateArgs, config: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let mut session = Session::open(&args.schema, &args.generation, config)?;
    for i in 0..args.generation.count {
        let value = session
            .next_value()
            .with_context(|| format!("failed to generate value {}", i + 1))?;
        if args.pretty {
            if i > 0 {
                writeln!(out)?;
            }
            serde_json::to_writer_pretty(&mut *out, &value)?;
        } else {
            serde_json::to_writer(&mut *out, &value)?;
        }
        writeln!(out)?;
    }
    tracing::info!(count = args.generation.count, "generated values");
    Ok(())
}
