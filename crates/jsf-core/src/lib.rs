//! # jsf-core: Foundational Types for the JSON Schema Faker
//!
//! This crate holds the vocabulary every other `jsf-*` crate speaks. It has
//! no internal dependencies.
//!
//! ## Key Design Principles
//!
//! 1. **Closed type dispatch.** `SchemaKind` enumerates the seven JSON types a
//!    schema can ask for. Generators `match` on it exhaustively; an unknown
//!    `type` string is rejected once, at parse time.
//!
//! 2. **Closed format set.** `StringFormat` enumerates the `format` values the
//!    faker knows how to satisfy. Unknown formats are an error, never a
//!    silent fallback to free text.
//!
//! 3. **One keyword accessor.** `SchemaNode::get` / `SchemaNode::get_or` are
//!    the only way keyword values are read off a schema object, with the
//!    target type picked by the caller.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsf-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod format;
pub mod keyword;
pub mod kind;

// Re-export primary types for ergonomic imports.
pub use error::{FakerError, PatternError};
pub use format::StringFormat;
pub use keyword::{FromKeyword, SchemaNode};
pub use kind::{SchemaKind, SCHEMA_KIND_COUNT};
