//! # Value Generator
//!
//! [`Faker`] turns a schema node into one conforming JSON value by
//! recursive descent. Each call to [`Faker::generate`] runs the same
//! pipeline on every node it visits:
//!
//! 1. resolve `allOf` / `anyOf` / `oneOf` into one schema,
//! 2. follow `$ref` if present,
//! 3. return an `enum` member or the `const` literal if present,
//! 4. otherwise dispatch on `type`.
//!
//! Children of arrays and objects are generated with the current node as
//! their parent, so inline `#/...` references inside them resolve against
//! it (or against the document root under [`RefScope::Document`]).

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use jsf_core::keyword::json_type_name;
use jsf_core::{FakerError, SchemaKind, SchemaNode};
use jsf_random::{format, pattern, pick, text};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::loader::{FsLoader, SchemaLoader};
use crate::options::{FakerOptions, MultipleOfMode, RefScope};
use crate::properties::{self, PropertySchemas};
use crate::reference::{self, Resolved};
use crate::{combinators, constraints};

/// Generates random JSON values conforming to a schema.
///
/// The random source is owned by the faker; seeding it makes every
/// generation reproducible.
pub struct Faker<R = StdRng> {
    rng: R,
    options: FakerOptions,
    base_dir: PathBuf,
    loader: Box<dyn SchemaLoader>,
}

impl Faker<StdRng> {
    /// A faker seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A reproducible faker.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Faker<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Faker<R> {
    /// A faker drawing from `rng`, with default options and the filesystem
    /// loader.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            options: FakerOptions::default(),
            base_dir: PathBuf::from("."),
            loader: Box::new(FsLoader),
        }
    }

    /// Replace the options. A configured `schema_dir` becomes the base
    /// directory for external references.
    pub fn with_options(mut self, options: FakerOptions) -> Self {
        if let Some(dir) = &options.schema_dir {
            self.base_dir = dir.clone();
        }
        self.options = options;
        self
    }

    /// Replace the document loader.
    pub fn with_loader(mut self, loader: impl SchemaLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    pub fn options(&self) -> &FakerOptions {
        &self.options
    }

    /// Directory external `$ref` paths are joined onto.
    pub fn schema_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Generate a value for the root schema `schema`.
    ///
    /// # Errors
    ///
    /// Any [`FakerError`] raised while visiting the schema tree. No partial
    /// value is returned.
    pub fn generate(&mut self, schema: &Value) -> Result<Value, FakerError> {
        self.generate_with_parent(schema, None)
    }

    /// Generate a value for `schema`, resolving inline references against
    /// `parent`.
    pub fn generate_with_parent(
        &mut self,
        schema: &Value,
        parent: Option<&Value>,
    ) -> Result<Value, FakerError> {
        self.value(schema, parent)
    }

    /// Load the schema document at `path` and generate a value for it.
    ///
    /// Unless `schema_dir` was configured, the document's directory becomes
    /// the base directory for its external references.
    pub fn generate_file(&mut self, path: impl AsRef<Path>) -> Result<Value, FakerError> {
        let path = path.as_ref();
        if !self.loader.exists(path) {
            return Err(FakerError::unresolvable(
                path.display().to_string(),
                "schema file not found",
            ));
        }
        let schema = self.loader.load(path)?;
        if self.options.schema_dir.is_none() {
            if let Some(dir) = path.parent() {
                self.base_dir = dir.to_path_buf();
            }
        }
        self.generate(&schema)
    }

    fn value(&mut self, schema: &Value, parent: Option<&Value>) -> Result<Value, FakerError> {
        let node = SchemaNode::new(schema)?;
        let resolved = combinators::resolve(&mut self.rng, &node)?;
        let node = SchemaNode::new(&resolved)?;

        if node.has("$ref") {
            let reference = node.get::<&str>("$ref").ok_or_else(|| {
                FakerError::MalformedSchema(format!("$ref must be a string: {}", node.value()))
            })?;
            return self.follow_ref(reference, &node, parent);
        }
        if node.has("enum") {
            let members = node.get::<&[Value]>("enum").unwrap_or_default();
            return pick::element(&mut self.rng, members).cloned().ok_or_else(|| {
                FakerError::MalformedSchema(format!("enum must be a non-empty array: {}", node.value()))
            });
        }
        if let Some(literal) = node.get::<&Value>("const") {
            return Ok(literal.clone());
        }

        let kind = self.kind(&node)?;
        trace!(%kind, "generating");
        let scope = match self.options.ref_scope {
            RefScope::Enclosing => node.value(),
            RefScope::Document => parent.unwrap_or(node.value()),
        };
        match kind {
            SchemaKind::Null => Ok(Value::Null),
            SchemaKind::Boolean => Ok(Value::Bool(pick::boolean(&mut self.rng))),
            SchemaKind::Integer => self.integer(&node),
            SchemaKind::Number => self.number(&node),
            SchemaKind::String => self.string(&node),
            SchemaKind::Array => self.array(&node, scope),
            SchemaKind::Object => self.object(&node, scope),
        }
    }

    fn follow_ref(
        &mut self,
        reference: &str,
        node: &SchemaNode<'_>,
        parent: Option<&Value>,
    ) -> Result<Value, FakerError> {
        trace!(reference, "following $ref");
        let scope = match self.options.ref_scope {
            RefScope::Enclosing => parent,
            RefScope::Document => Some(parent.unwrap_or(node.value())),
        };
        match reference::resolve(reference, scope, &self.base_dir, self.loader.as_ref())? {
            Resolved::Inline { target, scope } => self.value(target, Some(scope)),
            Resolved::Document(document) => self.value(&document, parent),
            Resolved::Fragment { document, pointer } => {
                let target = reference::walk(&document, &pointer).ok_or_else(|| {
                    FakerError::unresolvable(reference, "pointer names no schema")
                })?;
                self.value(target, Some(&document))
            }
        }
    }

    /// The node's `type`; a list of types yields one of them at random.
    fn kind(&mut self, node: &SchemaNode<'_>) -> Result<SchemaKind, FakerError> {
        let unsupported = |value: &Value| FakerError::UnsupportedType {
            keyword: "type",
            value: value.to_string(),
        };
        match node.map().get("type") {
            None => Err(FakerError::missing_type(node.value())),
            Some(Value::String(name)) => name.parse(),
            Some(Value::Array(names)) => {
                let name = pick::element(&mut self.rng, names)
                    .ok_or_else(|| FakerError::missing_type(node.value()))?;
                name.as_str().ok_or_else(|| unsupported(name))?.parse()
            }
            Some(other) => Err(unsupported(other)),
        }
    }

    fn integer(&mut self, node: &SchemaNode<'_>) -> Result<Value, FakerError> {
        let (lo, hi) = constraints::integer_range(node)?;
        let step = constraints::multiple_of(node);
        if self.strict_multiple(node) {
            let (k_lo, k_hi) = constraints::multiplier_range(lo as f64, hi as f64, step)?;
            return scaled(pick::int_between(&mut self.rng, k_lo, k_hi), step);
        }
        scaled(pick::int_between(&mut self.rng, lo, hi), step)
    }

    fn number(&mut self, node: &SchemaNode<'_>) -> Result<Value, FakerError> {
        let (lo, hi) = constraints::number_range(node)?;
        let step = constraints::multiple_of(node);
        if self.strict_multiple(node) {
            let (k_lo, k_hi) = constraints::multiplier_range(lo, hi, step)?;
            return scaled(pick::int_between(&mut self.rng, k_lo, k_hi), step);
        }
        float(pick::float_between(&mut self.rng, lo, hi) * step)
    }

    fn strict_multiple(&self, node: &SchemaNode<'_>) -> bool {
        self.options.multiple_of == MultipleOfMode::Strict && node.has("multipleOf")
    }

    /// `format` wins over `pattern`, which wins over lorem text.
    fn string(&mut self, node: &SchemaNode<'_>) -> Result<Value, FakerError> {
        if let Some(format) = constraints::string_format(node)? {
            return Ok(Value::String(format::generate(&mut self.rng, format)));
        }
        if let Some(pattern) = node.get::<&str>("pattern") {
            return Ok(Value::String(pattern::generate(&mut self.rng, pattern)?));
        }

        let (min, max) = constraints::length_range(node);
        let mut s = text::text(&mut self.rng, max);
        let len = s.chars().count();
        if len > 0 && len < min {
            s = s.repeat(min.div_ceil(len));
        }
        Ok(Value::String(text::truncate_chars(&s, max)))
    }

    fn array(&mut self, node: &SchemaNode<'_>, scope: &Value) -> Result<Value, FakerError> {
        let mut children: Vec<Cow<'_, Value>> = match node.map().get("items") {
            None => vec![Cow::Owned(self.random_schema())],
            Some(items @ Value::Object(_)) => vec![Cow::Borrowed(items)],
            Some(Value::Array(items)) => items.iter().map(Cow::Borrowed).collect(),
            Some(other) => {
                return Err(FakerError::InvalidItems(format!(
                    "expected a schema or an array of schemas, got {}",
                    json_type_name(other)
                )))
            }
        };

        let (min, max) = constraints::item_count_range(node, children.len());
        let count = pick::count_between(&mut self.rng, min, max);
        children.truncate(count);
        if children.is_empty() && count > 0 {
            children.push(Cow::Owned(self.random_schema()));
        }

        let mut items = Vec::with_capacity(count);
        for i in 0..count {
            items.push(self.value(&children[i % children.len()], Some(scope))?);
        }

        if node.get_or("uniqueItems", false) {
            let mut unique: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                if !unique.contains(&item) {
                    unique.push(item);
                }
            }
            items = unique;
        }
        Ok(Value::Array(items))
    }

    fn object(&mut self, node: &SchemaNode<'_>, scope: &Value) -> Result<Value, FakerError> {
        let names = properties::select(&mut self.rng, node)?;
        let schemas = PropertySchemas::new(node)?;

        let mut object = Map::new();
        for name in names {
            let value = match schemas.lookup(&name) {
                Some(schema) => self.value(schema, Some(scope))?,
                None => {
                    let schema = self.random_schema();
                    self.value(&schema, Some(scope))?
                }
            };
            object.insert(name, value);
        }
        Ok(Value::Object(object))
    }

    /// `{"type": <uniformly chosen kind>}`.
    fn random_schema(&mut self) -> Value {
        pick::element(&mut self.rng, SchemaKind::all())
            .copied()
            .unwrap_or(SchemaKind::Null)
            .to_schema()
    }
}

/// `n * step`, as an integer when `step` is integral and the product fits.
fn scaled(n: i64, step: f64) -> Result<Value, FakerError> {
    if step.fract() == 0.0 && step.abs() < i64::MAX as f64 {
        if let Some(product) = n.checked_mul(step as i64) {
            return Ok(Value::from(product));
        }
    }
    float(n as f64 * step)
}

fn float(x: f64) -> Result<Value, FakerError> {
    Number::from_f64(x)
        .map(Value::Number)
        .ok_or_else(|| FakerError::MalformedSchema(format!("generated number {x} is not finite")))
}
