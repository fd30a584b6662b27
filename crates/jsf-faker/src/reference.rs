//! # `$ref` Resolution
//!
//! Locates the schema a `$ref` points at. Generating from it is left to the
//! caller, which decides the enclosing scope from the returned variant.
//!
//! Three shapes are understood:
//!
//! - `#/a/b`: a JSON Pointer walked from the enclosing schema.
//! - `path/to/file.json`: a whole document, relative to the base directory.
//! - `path/to/file.json#/a/b`: a pointer walked inside that document, used
//!   only when no file is literally named `file.json#/a/b`.

use std::path::Path;

use jsf_core::FakerError;
use serde_json::Value;
use tracing::debug;

use crate::loader::SchemaLoader;

/// Where a reference led.
#[derive(Debug)]
pub enum Resolved<'p> {
    /// Inline target inside `scope`. Generate it with `scope` as parent.
    Inline { target: &'p Value, scope: &'p Value },
    /// A whole external document. Generate it with the original parent.
    Document(Value),
    /// A pointer into an external document. Generate the target with the
    /// document as parent.
    Fragment { document: Value, pointer: String },
}

/// Resolve `reference` against `parent` or the file system.
///
/// # Errors
///
/// `UnresolvableReference` when the parent is missing for an inline
/// reference, no file exists, or a pointer names nothing.
pub fn resolve<'p>(
    reference: &str,
    parent: Option<&'p Value>,
    base_dir: &Path,
    loader: &dyn SchemaLoader,
) -> Result<Resolved<'p>, FakerError> {
    if let Some(pointer) = reference.strip_prefix('#') {
        let scope = parent.ok_or_else(|| {
            FakerError::unresolvable(reference, "inline reference outside of any enclosing schema")
        })?;
        let target = walk(scope, pointer)
            .ok_or_else(|| FakerError::unresolvable(reference, "pointer names no schema"))?;
        return Ok(Resolved::Inline { target, scope });
    }

    let path = base_dir.join(strip_dot_slash(reference));
    if loader.exists(&path) {
        debug!(path = %path.display(), "loading referenced schema");
        return loader.load(&path).map(Resolved::Document);
    }

    let not_found = || {
        FakerError::unresolvable(reference, format!("no schema file at {}", path.display()))
    };
    let (file, pointer) = reference.split_once('#').ok_or_else(&not_found)?;
    if pointer.contains('#') {
        return Err(not_found());
    }
    let file_path = base_dir.join(strip_dot_slash(file));
    if !loader.exists(&file_path) {
        return Err(FakerError::unresolvable(
            reference,
            format!("no schema file at {}", file_path.display()),
        ));
    }

    debug!(path = %file_path.display(), pointer, "loading referenced schema fragment");
    let document = loader.load(&file_path)?;
    if walk(&document, pointer).is_none() {
        return Err(FakerError::unresolvable(
            reference,
            format!("pointer names no schema in {}", file_path.display()),
        ));
    }
    Ok(Resolved::Fragment {
        document,
        pointer: pointer.to_string(),
    })
}

/// Walk a JSON Pointer from `root`.
///
/// Accepts pointers with or without the leading `/`; the empty pointer
/// names `root` itself. `~1` and `~0` escapes and array indices follow
/// RFC 6901.
pub fn walk<'v>(root: &'v Value, pointer: &str) -> Option<&'v Value> {
    if pointer.is_empty() || pointer.starts_with('/') {
        root.pointer(pointer)
    } else {
        root.pointer(&format!("/{pointer}"))
    }
}

fn strip_dot_slash(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}
