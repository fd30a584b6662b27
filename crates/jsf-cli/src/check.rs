//! # Check Subcommand
//!
//! Generates values for a schema and validates every one against the same
//! schema with the `jsonschema` crate, format assertions enabled. A schema
//! that fails here either exercises a generator limitation or is itself
//! unsatisfiable.
//!
//! External `$ref` documents are not registered with the validator, so
//! schemas that use them cannot be checked.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Args;

use crate::{GenerationArgs, Session};

/// Arguments for the `jsf check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (JSON, or YAML by extension).
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub generation: GenerationArgs,
}

/// Outcome of a check run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub generated: usize,
    pub invalid: usize,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every value validates, 1 otherwise.
pub fn run_check(args: &CheckArgs, config: Option<&Path>) -> Result<u8> {
    let report = check_schema(args, config)?;
    println!(
        "{}: {}/{} generated values valid",
        args.schema.display(),
        report.generated - report.invalid,
        report.generated
    );
    Ok(if report.invalid == 0 { 0 } else { 1 })
}

/// Generate and validate `args.generation.count` values.
pub fn check_schema(args: &CheckArgs, config: Option<&Path>) -> Result<CheckReport> {
    let mut session = Session::open(&args.schema, &args.generation, config)?;
    let validator = jsonschema::options()
        .should_validate_formats(true)
        .build(&session.schema)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("{} is not a valid schema", args.schema.display()))?;

    let mut report = CheckReport::default();
    for i in 0..args.generation.count {
        let value = session
            .next_value()
            .with_context(|| format!("failed to generate value {}", i + 1))?;
        report.generated += 1;
        let errors: Vec<String> = validator.iter_errors(&value).map(|e| e.to_string()).collect();
        if !errors.is_empty() {
            report.invalid += 1;
            tracing::warn!(%value, ?errors, "generated value fails validation");
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{args, schemas_dir};

    fn check(name: &str, count: usize) -> Result<CheckReport> {
        let args = CheckArgs {
            schema: schemas_dir().join(name),
            generation: args(count, 17),
        };
        check_schema(&args, None)
    }

    #[test]
    fn fixtures_check_clean() {
        for name in ["object.json", "combining.json", "formats.json", "ref_inline.json"] {
            let report = check(name, 25).unwrap();
            assert_eq!(report, CheckReport { generated: 25, invalid: 0 }, "{name}");
        }
    }

    #[test]
    fn scale_mode_multiple_of_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaled.json");
        std::fs::write(
            &path,
            r#"{"type": "integer", "minimum": 1, "maximum": 3, "multipleOf": 5}"#,
        )
        .unwrap();
        let mut generation = args(20, 1);
        let report = check_schema(
            &CheckArgs {
                schema: path.clone(),
                generation: generation.clone(),
            },
            None,
        )
        .unwrap();
        assert_eq!(report.invalid, 20);

        generation.strict_multiple_of = true;
        let err = check_schema(&CheckArgs { schema: path, generation }, None).unwrap_err();
        assert!(format!("{err:#}").contains("no multiple of 5"));
    }

    #[test]
    fn invalid_schema_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"type": "integer", "minimum": "zero"}"#).unwrap();
        let args = CheckArgs {
            schema: path,
            generation: args(1, 0),
        };
        assert!(check_schema(&args, None).is_err());
    }
}
