//! # Schema Kind: Closed Type Dispatch
//!
//! The seven JSON types a schema may request through `type`. Every generator
//! dispatch is an exhaustive `match` over [`SchemaKind`], so adding a kind is
//! a compile error at every consumer until it is handled.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FakerError;

/// A JSON Schema primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Whole numbers.
    Integer,
    /// Any JSON number.
    Number,
    /// UTF-8 text.
    String,
    /// Ordered sequence.
    Array,
    /// String-keyed mapping.
    Object,
}

/// Number of recognised kinds.
pub const SCHEMA_KIND_COUNT: usize = 7;

impl SchemaKind {
    /// Returns all kinds in the order they are listed by JSON Schema.
    pub fn all() -> &'static [SchemaKind] {
        &[
            Self::Null,
            Self::Boolean,
            Self::Integer,
            Self::Number,
            Self::String,
            Self::Array,
            Self::Object,
        ]
    }

    /// Returns the `type` keyword spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// A minimal schema node asking for this kind: `{"type": "<kind>"}`.
    pub fn to_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": self.as_str() })
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = FakerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "boolean" => Ok(Self::Boolean),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(FakerError::UnsupportedType {
                keyword: "type",
                value: other.to_string(),
            }),
        }
    }
}
