//! # Keyword Access
//!
//! [`SchemaNode`] is a borrowed view over a schema object. Keyword values are
//! read through [`SchemaNode::get`] and [`SchemaNode::get_or`], with the
//! target type chosen by the caller through [`FromKeyword`]. A keyword that
//! is present but has the wrong JSON type reads as absent.

use serde_json::{Map, Value};

use crate::error::FakerError;

/// Conversion from a raw keyword value to a typed view.
pub trait FromKeyword<'a>: Sized {
    /// Returns `None` when `value` does not have the expected JSON type.
    fn from_keyword(value: &'a Value) -> Option<Self>;
}

impl<'a> FromKeyword<'a> for &'a Value {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        Some(value)
    }
}

impl<'a> FromKeyword<'a> for bool {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromKeyword<'a> for f64 {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'a> FromKeyword<'a> for u64 {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        // `3.0` is a valid count in JSON Schema.
        value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
    }
}

impl<'a> FromKeyword<'a> for usize {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        u64::from_keyword(value).and_then(|n| usize::try_from(n).ok())
    }
}

impl<'a> FromKeyword<'a> for &'a str {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromKeyword<'a> for &'a [Value] {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        value.as_array().map(Vec::as_slice)
    }
}

impl<'a> FromKeyword<'a> for &'a Map<String, Value> {
    fn from_keyword(value: &'a Value) -> Option<Self> {
        value.as_object()
    }
}

impl<'a> FromKeyword<'a> for Vec<&'a str> {
    /// String arrays such as `required`; non-string members are skipped.
    fn from_keyword(value: &'a Value) -> Option<Self> {
        value
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }
}

/// A borrowed schema object.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    value: &'a Value,
    map: &'a Map<String, Value>,
}

impl<'a> SchemaNode<'a> {
    /// Wrap a value, rejecting anything that is not a JSON object.
    pub fn new(value: &'a Value) -> Result<Self, FakerError> {
        match value {
            Value::Object(map) => Ok(Self { value, map }),
            other => Err(FakerError::MalformedSchema(format!(
                "expected a schema object, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// The wrapped value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The wrapped object.
    pub fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// True when the keyword is present, whatever its value.
    pub fn has(&self, keyword: &str) -> bool {
        self.map.contains_key(keyword)
    }

    /// Read a keyword as `T`.
    pub fn get<T: FromKeyword<'a>>(&self, keyword: &str) -> Option<T> {
        self.map.get(keyword).and_then(T::from_keyword)
    }

    /// Read a keyword as `T`, falling back to `default` when it is absent or
    /// mistyped.
    pub fn get_or<T: FromKeyword<'a>>(&self, keyword: &str, default: T) -> T {
        self.get(keyword).unwrap_or(default)
    }
}

/// JSON type name of a value, for diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_present_value() {
        let schema = json!({"xxx": 123});
        let node = SchemaNode::new(&schema).unwrap();
        assert_eq!(node.get::<u64>("xxx"), Some(123));
    }

    #[test]
    fn test_get_or_returns_default_when_absent() {
        let schema = json!({"xxx": 123});
        let node = SchemaNode::new(&schema).unwrap();
        assert_eq!(node.get_or::<u64>("aaa", 123), 123);
    }

    #[test]
    fn test_mistyped_keyword_reads_as_absent() {
        let schema = json!({"minItems": "three", "uniqueItems": 1});
        let node = SchemaNode::new(&schema).unwrap();
        assert_eq!(node.get::<u64>("minItems"), None);
        assert!(!node.get_or("uniqueItems", false));
    }

    #[test]
    fn test_integral_float_reads_as_count() {
        let schema = json!({"maxLength": 4.0, "minLength": 1.5});
        let node = SchemaNode::new(&schema).unwrap();
        assert_eq!(node.get::<usize>("maxLength"), Some(4));
        assert_eq!(node.get::<usize>("minLength"), None);
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let schema = json!({"required": ["a", 1, "b"]});
        let node = SchemaNode::new(&schema).unwrap();
        assert_eq!(node.get::<Vec<&str>>("required"), Some(vec!["a", "b"]));
    }

    #[test]
    fn test_non_object_is_malformed() {
        for value in [json!(null), json!(true), json!([1]), json!("s")] {
            let err = SchemaNode::new(&value).unwrap_err();
            assert!(matches!(err, FakerError::MalformedSchema(_)), "{err}");
        }
    }

    #[test]
    fn test_has_ignores_value_type() {
        let schema = json!({"$ref": null});
        let node = SchemaNode::new(&schema).unwrap();
        assert!(node.has("$ref"));
        assert!(!node.has("type"));
    }
}
