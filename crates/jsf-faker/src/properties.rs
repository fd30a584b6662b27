//! # Property Selection
//!
//! Decides which property names a generated object carries, and which
//! sub-schema generates each of them.
//!
//! Selection order:
//!
//! 1. every `required` name,
//! 2. a random subset of the remaining `properties`, at least
//!    `minProperties - |required|` and at most `maxProperties - |required|`
//!    of them,
//! 3. the transitive closure over `dependencies` / `dependentRequired`,
//! 4. synthesized names until `minProperties` is reached.
//!
//! The resulting list keeps first-insertion order and holds no duplicates.

use jsf_core::{FakerError, SchemaNode};
use jsf_random::pattern::Pattern;
use jsf_random::{pick, text};
use rand::Rng;
use regex::Regex;
use serde_json::{Map, Value};

/// Attempts at synthesizing a fresh name before giving up.
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Keywords whose array-valued entries list names that must accompany a key.
const DEPENDENCY_KEYWORDS: [&str; 2] = ["dependencies", "dependentRequired"];

/// Choose the property names of one generated object.
///
/// # Errors
///
/// - `MalformedSchema` when `minProperties` cannot be met.
/// - `Pattern` when a `patternProperties` key is not a usable regex.
pub fn select<R: Rng>(rng: &mut R, node: &SchemaNode<'_>) -> Result<Vec<String>, FakerError> {
    let required: Vec<&str> = node.get_or("required", Vec::new());
    let optional: Vec<&str> = node
        .get::<&Map<String, Value>>("properties")
        .map(|properties| {
            properties
                .keys()
                .map(String::as_str)
                .filter(|key| !required.contains(key))
                .collect()
        })
        .unwrap_or_default();

    let room = node
        .get::<usize>("maxProperties")
        .map_or(optional.len(), |max| max.saturating_sub(required.len()));
    let ceiling = optional.len().min(room);
    let floor = node
        .get_or("minProperties", 0usize)
        .saturating_sub(required.len())
        .min(ceiling);
    let size = pick::count_between(rng, floor, ceiling);

    let mut names: Vec<String> = Vec::with_capacity(required.len() + size);
    for name in required
        .iter()
        .copied()
        .chain(pick::elements(rng, &optional, size).into_iter().copied())
    {
        push_unique(&mut names, name);
    }

    close_dependencies(node, &mut names);
    fill_to_minimum(rng, node, &mut names)?;
    Ok(names)
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

/// Adds every name reachable through array-valued dependency entries.
/// Schema-valued entries are ignored.
fn close_dependencies(node: &SchemaNode<'_>, names: &mut Vec<String>) {
    let tables: Vec<&Map<String, Value>> = DEPENDENCY_KEYWORDS
        .iter()
        .filter_map(|keyword| node.get::<&Map<String, Value>>(keyword))
        .collect();
    if tables.is_empty() {
        return;
    }

    let mut next = 0;
    while next < names.len() {
        let name = names[next].clone();
        for table in &tables {
            if let Some(Value::Array(deps)) = table.get(&name) {
                for dep in deps.iter().filter_map(Value::as_str) {
                    push_unique(names, dep);
                }
            }
        }
        next += 1;
    }
}

fn fill_to_minimum<R: Rng>(
    rng: &mut R,
    node: &SchemaNode<'_>,
    names: &mut Vec<String>,
) -> Result<(), FakerError> {
    let min = node.get_or("minProperties", 0usize);
    if names.len() >= min {
        return Ok(());
    }

    let open = !matches!(node.map().get("additionalProperties"), Some(Value::Bool(false)));
    let patterns: Vec<Pattern> = if open {
        Vec::new()
    } else {
        node.get::<&Map<String, Value>>("patternProperties")
            .map(|table| {
                table
                    .keys()
                    .map(|key| Pattern::parse(key))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default()
    };
    if !open && patterns.is_empty() {
        return Err(FakerError::MalformedSchema(format!(
            "minProperties {min} needs {} more names, but additionalProperties is false and no patternProperties are declared",
            min - names.len()
        )));
    }

    let mut attempts = 0;
    while names.len() < min {
        let candidate = match pick::element(rng, &patterns) {
            Some(pattern) => pattern.generate(rng)?,
            None => text::word(rng),
        };
        if !names.contains(&candidate) {
            names.push(candidate);
            continue;
        }
        if open {
            // Lorem words repeat; a suffix keeps the name fresh.
            let fresh = suffixed(names, &candidate);
            names.push(fresh);
            continue;
        }
        attempts += 1;
        if attempts >= MAX_NAME_ATTEMPTS {
            return Err(FakerError::MalformedSchema(format!(
                "patternProperties produced only {} distinct names, minProperties is {min}",
                names.len()
            )));
        }
    }
    Ok(())
}

/// `{base}_{n}` for the first `n >= names.len()` not already taken.
fn suffixed(names: &[String], base: &str) -> String {
    (names.len()..)
        .map(|n| format!("{base}_{n}"))
        .find(|name| !names.contains(name))
        .unwrap_or_else(|| base.to_string())
}

/// Maps a property name to the schema that generates its value.
pub struct PropertySchemas<'a> {
    properties: Option<&'a Map<String, Value>>,
    patterns: Vec<(Regex, &'a Value)>,
    additional: Option<&'a Value>,
}

impl<'a> PropertySchemas<'a> {
    /// Compile the `patternProperties` of `node`.
    ///
    /// # Errors
    ///
    /// `Pattern` when a key does not compile.
    pub fn new(node: &SchemaNode<'a>) -> Result<Self, FakerError> {
        let patterns = node
            .get::<&Map<String, Value>>("patternProperties")
            .map(|table| {
                table
                    .iter()
                    .map(|(key, schema)| {
                        Regex::new(key)
                            .map(|re| (re, schema))
                            .map_err(|e| jsf_core::PatternError::new(key.as_str(), e))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            properties: node.get("properties"),
            patterns,
            additional: node.get::<&Value>("additionalProperties").filter(|v| v.is_object()),
        })
    }

    /// `properties[name]`, else the first matching `patternProperties`
    /// schema, else an object-valued `additionalProperties`. `None` means
    /// the caller picks a random-type schema.
    pub fn lookup(&self, name: &str) -> Option<&'a Value> {
        self.properties
            .and_then(|properties| properties.get(name))
            .or_else(|| {
                self.patterns
                    .iter()
                    .find(|(re, _)| re.is_match(name))
                    .map(|(_, schema)| *schema)
            })
            .or(self.additional)
    }
}
