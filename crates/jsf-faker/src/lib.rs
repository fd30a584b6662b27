//! # jsf-faker: JSON Schema Faker Engine
//!
//! Generates random JSON values that conform to a JSON Schema document.
//!
//! ```no_run
//! use jsf_faker::Faker;
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {"id": {"type": "integer", "minimum": 1}},
//!     "required": ["id"]
//! });
//! let value = Faker::with_seed(7).generate(&schema)?;
//! assert!(value["id"].as_i64().unwrap() >= 1);
//! # Ok::<(), jsf_faker::FakerError>(())
//! ```
//!
//! ## Module Map
//!
//! - **generator**: [`Faker`], the recursive type dispatch.
//! - **combinators**: `allOf` / `anyOf` / `oneOf` collapse.
//! - **reference**: `$ref` lookup, inline and external.
//! - **loader**: [`SchemaLoader`] and the filesystem implementation.
//! - **constraints**: numeric, length, and count bounds.
//! - **properties**: object key selection and per-key schemas.
//! - **options**: [`FakerOptions`].
//!
//! ## Crate Policy
//!
//! - Errors propagate as [`FakerError`]; nothing panics on malformed input.
//! - All randomness flows through the faker's own `Rng`.

pub mod combinators;
pub mod constraints;
pub mod generator;
pub mod loader;
pub mod options;
pub mod properties;
pub mod reference;

pub use generator::Faker;
pub use jsf_core::{FakerError, PatternError, SchemaKind, StringFormat};
pub use loader::{FsLoader, MemoryLoader, SchemaLoader};
pub use options::{FakerOptions, MultipleOfMode, RefScope};

/// Generate one value for `schema` with an entropy-seeded faker and
/// default options.
///
/// # Errors
///
/// See [`Faker::generate`].
pub fn fake(schema: &serde_json::Value) -> Result<serde_json::Value, FakerError> {
    Faker::new().generate(schema)
}
