//! # Generation Options
//!
//! Immutable configuration for a [`crate::Faker`]. Deserializable so the CLI
//! can read it from a YAML or JSON config file; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How `multipleOf` interacts with `minimum`/`maximum`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleOfMode {
    /// Sample inside the bounds, then multiply. The product can leave the
    /// bounds when `multipleOf` is not 1.
    #[default]
    Scale,
    /// Sample the multiplier from `[ceil(min / m), floor(max / m)]`, so the
    /// product stays inside the bounds.
    Strict,
}

/// Which schema an inline `#/...` reference is walked from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefScope {
    /// The nearest enclosing schema node.
    #[default]
    Enclosing,
    /// The root of the document being generated.
    Document,
}

/// Options shared by every generation call of one faker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakerOptions {
    /// Base directory for external `$ref` paths.
    pub schema_dir: Option<PathBuf>,
    /// `multipleOf` handling.
    pub multiple_of: MultipleOfMode,
    /// Inline reference scoping.
    pub ref_scope: RefScope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserve_literal_behavior() {
        let options = FakerOptions::default();
        assert_eq!(options.multiple_of, MultipleOfMode::Scale);
        assert_eq!(options.ref_scope, RefScope::Enclosing);
        assert!(options.schema_dir.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let options: FakerOptions = serde_yaml::from_str("multiple_of: strict\n").unwrap();
        assert_eq!(options.multiple_of, MultipleOfMode::Strict);
        assert_eq!(options.ref_scope, RefScope::Enclosing);
    }

    #[test]
    fn test_json_config() {
        let options: FakerOptions =
            serde_json::from_str(r#"{"schema_dir": "schemas", "ref_scope": "document"}"#).unwrap();
        assert_eq!(options.schema_dir, Some(PathBuf::from("schemas")));
        assert_eq!(options.ref_scope, RefScope::Document);
    }
}
