//! # Error Types
//!
//! Errors raised while turning a schema into a value. All of them are fatal
//! for the generation call that raised them: they propagate unchanged up the
//! recursive descent and no partial value is returned.

use thiserror::Error;

/// Top-level error type for value generation.
#[derive(Error, Debug)]
pub enum FakerError {
    /// The schema node has no `type` and is not resolved through `enum`,
    /// `const`, or `$ref`.
    #[error("schema has no `type`: {schema}")]
    MissingType {
        /// Compact JSON rendering of the offending node.
        schema: String,
    },

    /// A `type` or `format` value outside the supported set.
    #[error("unsupported {keyword}: {value}")]
    UnsupportedType {
        /// Keyword carrying the value (`type` or `format`).
        keyword: &'static str,
        /// The rejected value.
        value: String,
    },

    /// `items` is neither a schema object nor an array of schemas.
    #[error("invalid items: {0}")]
    InvalidItems(String),

    /// A `$ref` could not be followed.
    #[error("unresolvable reference `{reference}`: {reason}")]
    UnresolvableReference {
        /// The `$ref` value as written in the schema.
        reference: String,
        /// Why resolution failed.
        reason: String,
    },

    /// The input is not a schema document, or its constraints cannot be met.
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    /// A `pattern` or `patternProperties` regex could not be used.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl FakerError {
    /// Build a `MissingType` error carrying a rendering of the node.
    pub fn missing_type(schema: &serde_json::Value) -> Self {
        Self::MissingType {
            schema: schema.to_string(),
        }
    }

    /// Build an `UnresolvableReference` error.
    pub fn unresolvable(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvableReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

/// Error compiling or expanding a regular expression.
#[derive(Error, Debug)]
#[error("invalid pattern `{pattern}`: {reason}")]
pub struct PatternError {
    /// The pattern as written in the schema.
    pub pattern: String,
    /// Parser or matcher diagnostic.
    pub reason: String,
}

impl PatternError {
    /// Create a pattern error from any displayable diagnostic.
    pub fn new(pattern: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}
