//! # jsf-cli: Command-Line Front End
//!
//! Provides the `jsf` binary:
//!
//! ```bash
//! jsf generate schemas/object.json --count 5 --seed 42
//! jsf check schemas/combining.json --count 200
//! ```
//!
//! ## Subcommands
//!
//! - `jsf generate`: print generated values, one JSON document per line.
//! - `jsf check`: generate values and validate each against the schema.

pub mod check;
pub mod config;
pub mod generate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use jsf_faker::{Faker, FsLoader, SchemaLoader};
use serde_json::Value;

/// Generation flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// Base directory for external `$ref` paths. Defaults to the schema
    /// file's directory.
    #[arg(long, value_name = "DIR")]
    pub schema_dir: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of values to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Keep `multipleOf` products inside `minimum` / `maximum`.
    #[arg(long)]
    pub strict_multiple_of: bool,

    /// Which schema inline `#/...` references are resolved against.
    #[arg(long, value_enum)]
    pub ref_scope: Option<RefScopeArg>,
}

/// `--ref-scope` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefScopeArg {
    Enclosing,
    Document,
}

/// A loaded schema document with the faker configured for it.
pub struct Session {
    pub schema: Value,
    pub faker: Faker,
}

impl Session {
    /// Load `schema_path` and build a faker from the config file and flags.
    ///
    /// External references resolve against `--schema-dir`, then the
    /// config's `schema_dir`, then the schema file's own directory.
    pub fn open(schema_path: &Path, args: &GenerationArgs, config: Option<&Path>) -> Result<Self> {
        let config = config::load_config(config)?.merge_args(args);
        let schema = FsLoader
            .load(schema_path)
            .with_context(|| format!("failed to load schema {}", schema_path.display()))?;

        let mut options = config.options();
        if options.schema_dir.is_none() {
            options.schema_dir = schema_path.parent().map(Path::to_path_buf);
        }
        tracing::debug!(
            schema = %schema_path.display(),
            schema_dir = ?options.schema_dir,
            seed = ?config.seed,
            "opened schema"
        );

        let faker = match config.seed {
            Some(seed) => Faker::with_seed(seed),
            None => Faker::new(),
        }
        .with_options(options);
        Ok(Self { schema, faker })
    }

    /// Generate one value.
    pub fn next_value(&mut self) -> Result<Value> {
        Ok(self.faker.generate(&self.schema)?)
    }
}

/// Fixtures shared by the CLI test modules.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn schemas_dir() -> PathBuf {
        let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        dir.pop(); // crates
        dir.pop(); // repo root
        dir.join("schemas")
    }

    pub fn args(count: usize, seed: u64) -> GenerationArgs {
        GenerationArgs {
            schema_dir: None,
            seed: Some(seed),
            count,
            strict_multiple_of: false,
            ref_scope: None,
        }
    }
}
