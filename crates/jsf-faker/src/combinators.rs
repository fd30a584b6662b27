//! # Combinator Resolution
//!
//! Collapses `allOf` / `anyOf` / `oneOf` into a single schema before type
//! dispatch. Only the first combinator present is honored, in that order.
//!
//! The node's own keywords (minus the combinators) form the base layer; the
//! chosen sub-schemas are overlaid left to right, later keys overwriting
//! earlier ones. The merge is shallow: `properties` from two layers are not
//! combined.

use std::borrow::Cow;

use jsf_core::{FakerError, SchemaNode};
use jsf_random::pick;
use rand::Rng;
use serde_json::{Map, Value};
use tracing::trace;

const COMBINATORS: [&str; 3] = ["allOf", "anyOf", "oneOf"];

/// Resolve the combinators of `node`.
///
/// Returns the node unchanged (borrowed) when it has none.
///
/// # Errors
///
/// `MalformedSchema` when a chosen sub-schema is not an object.
pub fn resolve<'a, R: Rng>(
    rng: &mut R,
    node: &SchemaNode<'a>,
) -> Result<Cow<'a, Value>, FakerError> {
    let (keyword, layers): (&str, Vec<&Value>) =
        if let Some(all) = node.get::<&[Value]>("allOf") {
            ("allOf", all.iter().collect())
        } else if let Some(any) = node.get::<&[Value]>("anyOf") {
            ("anyOf", pick::subset(rng, any))
        } else if let Some(one) = node.get::<&[Value]>("oneOf") {
            ("oneOf", pick::element(rng, one).into_iter().collect())
        } else {
            return Ok(Cow::Borrowed(node.value()));
        };

    trace!(keyword, layers = layers.len(), "resolving combinator");
    merge(node.map(), &layers).map(Cow::Owned)
}

fn merge(base: &Map<String, Value>, layers: &[&Value]) -> Result<Value, FakerError> {
    let mut merged: Map<String, Value> = base
        .iter()
        .filter(|(key, _)| !COMBINATORS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    for layer in layers {
        for (key, value) in SchemaNode::new(layer)?.map() {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(Value::Object(merged))
}
