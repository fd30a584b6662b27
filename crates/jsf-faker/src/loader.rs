//! # Schema Loading
//!
//! Source of external schema documents for `$ref` resolution and
//! file-based generation. The generator only asks two questions of a
//! loader, "does this path exist" and "give me its document", so tests can
//! swap the filesystem for an in-memory table.
//!
//! Documents ending in `.yaml` / `.yml` are deserialized from YAML straight
//! into JSON values; everything else is parsed as JSON.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use jsf_core::FakerError;
use serde_json::Value;

/// Loads schema documents by path.
pub trait SchemaLoader: Send + Sync {
    /// Whether a document exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Load and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// `UnresolvableReference` when the document cannot be read,
    /// `MalformedSchema` when it does not parse.
    fn load(&self, path: &Path) -> Result<Value, FakerError>;
}

/// Reads schema documents from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SchemaLoader for FsLoader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<Value, FakerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FakerError::unresolvable(path.display().to_string(), format!("cannot read file: {e}"))
        })?;
        parse_document(path, &content)
    }
}

/// Serves documents registered ahead of time, keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemoryLoader {
    documents: HashMap<PathBuf, Value>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `document` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, document: Value) -> &mut Self {
        self.documents.insert(path.into(), document);
        self
    }
}

impl SchemaLoader for MemoryLoader {
    fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }

    fn load(&self, path: &Path) -> Result<Value, FakerError> {
        self.documents.get(path).cloned().ok_or_else(|| {
            FakerError::unresolvable(path.display().to_string(), "no document registered")
        })
    }
}

/// Parse `content` as JSON or YAML, chosen by the extension of `path`.
///
/// # Errors
///
/// `MalformedSchema` naming the path and the parser's complaint.
pub fn parse_document(path: &Path, content: &str) -> Result<Value, FakerError> {
    let malformed = |reason: String| FakerError::MalformedSchema(format!("{}: {reason}", path.display()));
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(content).map_err(|e| malformed(format!("invalid YAML: {e}")))
    } else {
        serde_json::from_str(content).map_err(|e| malformed(format!("invalid JSON: {e}")))
    }
}
