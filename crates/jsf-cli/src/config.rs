//! # Configuration File
//!
//! Optional YAML (or JSON) file passed with `--config`:
//!
//! ```yaml
//! schema_dir: schemas
//! multiple_of: strict      # or: scale
//! ref_scope: document      # or: enclosing
//! seed: 42
//! ```
//!
//! Command-line flags override file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jsf_faker::{FakerOptions, MultipleOfMode, RefScope};
use serde::Deserialize;

use crate::{GenerationArgs, RefScopeArg};

/// Contents of a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub schema_dir: Option<PathBuf>,
    pub multiple_of: MultipleOfMode,
    pub ref_scope: RefScope,
    pub seed: Option<u64>,
}

/// Read the config file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    // JSON is a subset of YAML, so one parser covers both.
    let config: CliConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

impl CliConfig {
    /// Generator options carried by this config.
    pub fn options(&self) -> FakerOptions {
        FakerOptions {
            schema_dir: self.schema_dir.clone(),
            multiple_of: self.multiple_of,
            ref_scope: self.ref_scope,
        }
    }

    /// Apply command-line overrides.
    pub fn merge_args(mut self, args: &GenerationArgs) -> Self {
        if let Some(dir) = &args.schema_dir {
            self.schema_dir = Some(dir.clone());
        }
        if args.strict_multiple_of {
            self.multiple_of = MultipleOfMode::Strict;
        }
        if let Some(scope) = args.ref_scope {
            self.ref_scope = match scope {
                RefScopeArg::Enclosing => RefScope::Enclosing,
                RefScopeArg::Document => RefScope::Document,
            };
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }
}
