//! # Constraint Readers
//!
//! Turn validation keywords into concrete generation bounds.
//!
//! Numeric bounds accept both dialects of exclusivity:
//!
//! - draft 4: `exclusiveMinimum: true` next to `minimum`,
//! - draft 6+: `exclusiveMinimum: <number>` on its own.
//!
//! When both dialects are present the tighter bound wins. Unbounded sides
//! default to `±2147483647`.

use jsf_core::{FakerError, SchemaNode, StringFormat};

/// Default magnitude of an unbounded numeric side.
pub const DEFAULT_BOUND: i64 = 2_147_483_647;

/// Default `maxLength` floor when the schema sets none.
const DEFAULT_MAX_LENGTH: usize = 5;

/// One side of a numeric range as written in the schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub value: f64,
    pub exclusive: bool,
}

#[derive(Clone, Copy)]
enum Side {
    Lower,
    Upper,
}

/// The effective lower bound, if any.
pub fn lower_bound(node: &SchemaNode<'_>) -> Option<Bound> {
    read_bound(node, "minimum", "exclusiveMinimum", Side::Lower)
}

/// The effective upper bound, if any.
pub fn upper_bound(node: &SchemaNode<'_>) -> Option<Bound> {
    read_bound(node, "maximum", "exclusiveMaximum", Side::Upper)
}

fn read_bound(node: &SchemaNode<'_>, inclusive: &str, exclusive: &str, side: Side) -> Option<Bound> {
    let flagged = node.get_or(exclusive, false);
    let plain = node.get::<f64>(inclusive).map(|value| Bound {
        value,
        exclusive: flagged,
    });
    let numeric = node.get::<f64>(exclusive).map(|value| Bound {
        value,
        exclusive: true,
    });
    match (plain, numeric) {
        (Some(a), Some(b)) => Some(tighter(a, b, side)),
        (a, b) => a.or(b),
    }
}

fn tighter(a: Bound, b: Bound, side: Side) -> Bound {
    let a_wins = match side {
        Side::Lower => a.value > b.value,
        Side::Upper => a.value < b.value,
    };
    if a_wins || (a.value == b.value && a.exclusive) {
        a
    } else {
        b
    }
}

/// Closed integer range `[lo, hi]` for an `integer` node.
///
/// Inclusive bounds round inward (`ceil` / `floor`); exclusive bounds step
/// one past the excluded value. When only one side is set and it lies
/// beyond the default of the other side, the open side is widened by
/// [`DEFAULT_BOUND`] so the range stays non-empty.
///
/// # Errors
///
/// `MalformedSchema` when the bounds leave no integer.
pub fn integer_range(node: &SchemaNode<'_>) -> Result<(i64, i64), FakerError> {
    let lo = lower_bound(node).map(|b| {
        if b.exclusive {
            (b.value.floor() as i64).saturating_add(1)
        } else {
            b.value.ceil() as i64
        }
    });
    let hi = upper_bound(node).map(|b| {
        if b.exclusive {
            (b.value.ceil() as i64).saturating_sub(1)
        } else {
            b.value.floor() as i64
        }
    });
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) => (lo, hi),
        (Some(lo), None) if lo > DEFAULT_BOUND => (lo, lo.saturating_add(DEFAULT_BOUND)),
        (Some(lo), None) => (lo, DEFAULT_BOUND),
        (None, Some(hi)) if hi < -DEFAULT_BOUND => (hi.saturating_sub(DEFAULT_BOUND), hi),
        (None, Some(hi)) => (-DEFAULT_BOUND, hi),
        (None, None) => (-DEFAULT_BOUND, DEFAULT_BOUND),
    };
    if lo > hi {
        return Err(FakerError::MalformedSchema(format!(
            "no integer satisfies the bounds [{lo}, {hi}]"
        )));
    }
    Ok((lo, hi))
}

/// Closed float range `[lo, hi]` for a `number` node.
///
/// Exclusive bounds are offset by 1. When that offset inverts a narrow
/// range, the midpoint of the raw bounds is used as both ends.
///
/// # Errors
///
/// `MalformedSchema` when the raw bounds are themselves inverted, or equal
/// with one of them exclusive.
pub fn number_range(node: &SchemaNode<'_>) -> Result<(f64, f64), FakerError> {
    let lower = lower_bound(node);
    let upper = upper_bound(node);
    let default = DEFAULT_BOUND as f64;

    let lo = lower.map(|b| if b.exclusive { b.value + 1.0 } else { b.value });
    let hi = upper.map(|b| if b.exclusive { b.value - 1.0 } else { b.value });
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) => (lo, hi),
        (Some(lo), None) if lo > default => (lo, lo + default),
        (Some(lo), None) => (lo, default),
        (None, Some(hi)) if hi < -default => (hi - default, hi),
        (None, Some(hi)) => (-default, hi),
        (None, None) => (-default, default),
    };
    if lo <= hi {
        return Ok((lo, hi));
    }

    // Only reachable with both sides present.
    let (Some(min), Some(max)) = (lower, upper) else {
        return Ok((hi, lo));
    };
    let empty = min.value > max.value || (min.value == max.value && (min.exclusive || max.exclusive));
    if empty {
        return Err(FakerError::MalformedSchema(format!(
            "no number satisfies the bounds {} {} and {} {}",
            if min.exclusive { ">" } else { ">=" },
            min.value,
            if max.exclusive { "<" } else { "<=" },
            max.value,
        )));
    }
    let mid = min.value / 2.0 + max.value / 2.0;
    Ok((mid, mid))
}

/// `multipleOf`, or `1` when absent or not positive.
pub fn multiple_of(node: &SchemaNode<'_>) -> f64 {
    node.get::<f64>("multipleOf")
        .filter(|m| *m > 0.0 && m.is_finite())
        .unwrap_or(1.0)
}

/// Closed range of multipliers `k` with `k * step` inside `[lo, hi]`.
///
/// # Errors
///
/// `MalformedSchema` when no multiple of `step` lies in the range.
pub fn multiplier_range(lo: f64, hi: f64, step: f64) -> Result<(i64, i64), FakerError> {
    let k_lo = (lo / step).ceil();
    let k_hi = (hi / step).floor();
    if k_lo > k_hi {
        return Err(FakerError::MalformedSchema(format!(
            "no multiple of {step} lies in [{lo}, {hi}]"
        )));
    }
    Ok((k_lo as i64, k_hi as i64))
}

/// `(minLength, maxLength)` with defaults `1` and `max(5, min + 1)`.
pub fn length_range(node: &SchemaNode<'_>) -> (usize, usize) {
    let min = node.get_or("minLength", 1usize);
    let max = node
        .get::<usize>("maxLength")
        .unwrap_or_else(|| DEFAULT_MAX_LENGTH.max(min.saturating_add(1)));
    (min, max)
}

/// `(minItems, maxItems)`. `maxItems` defaults to `max(children, minItems)`.
pub fn item_count_range(node: &SchemaNode<'_>, children: usize) -> (usize, usize) {
    let min = node.get_or("minItems", 0usize);
    let max = node.get::<usize>("maxItems").unwrap_or(children.max(min));
    (min, max)
}

/// The node's `format`, parsed.
///
/// # Errors
///
/// `UnsupportedType` for a format name outside [`StringFormat`].
pub fn string_format(node: &SchemaNode<'_>) -> Result<Option<StringFormat>, FakerError> {
    node.get::<&str>("format").map(str::parse).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn node(value: &Value) -> SchemaNode<'_> {
        SchemaNode::new(value).unwrap()
    }

    #[test]
    fn test_integer_defaults() {
        let schema = json!({"type": "integer"});
        assert_eq!(integer_range(&node(&schema)).unwrap(), (-DEFAULT_BOUND, DEFAULT_BOUND));
    }

    #[test]
    fn test_integer_draft4_exclusive() {
        let schema = json!({"minimum": 10, "exclusiveMinimum": true, "maximum": 20, "exclusiveMaximum": true});
        assert_eq!(integer_range(&node(&schema)).unwrap(), (11, 19));
    }

    #[test]
    fn test_integer_draft6_exclusive() {
        let schema = json!({"exclusiveMinimum": 10, "exclusiveMaximum": 20});
        assert_eq!(integer_range(&node(&schema)).unwrap(), (11, 19));
    }

    #[test]
    fn test_integer_fractional_bounds_round_inward() {
        let schema = json!({"minimum": 1.5, "maximum": 4.5});
        assert_eq!(integer_range(&node(&schema)).unwrap(), (2, 4));
        let schema = json!({"exclusiveMinimum": 1.5, "exclusiveMaximum": 4.5});
        assert_eq!(integer_range(&node(&schema)).unwrap(), (2, 4));
    }

    #[test]
    fn test_tighter_bound_wins() {
        let schema = json!({"minimum": 5, "exclusiveMinimum": 3});
        assert_eq!(lower_bound(&node(&schema)), Some(Bound { value: 5.0, exclusive: false }));
        let schema = json!({"maximum": 5, "exclusiveMaximum": 5});
        assert_eq!(upper_bound(&node(&schema)), Some(Bound { value: 5.0, exclusive: true }));
    }

    #[test]
    fn test_integer_single_side_beyond_default() {
        let schema = json!({"minimum": 3_000_000_000i64});
        let (lo, hi) = integer_range(&node(&schema)).unwrap();
        assert_eq!(lo, 3_000_000_000);
        assert!(hi > lo);
    }

    #[test]
    fn test_integer_empty_range() {
        let schema = json!({"minimum": 5, "exclusiveMaximum": 5});
        assert!(matches!(
            integer_range(&node(&schema)),
            Err(FakerError::MalformedSchema(_))
        ));
    }

    #[test]
    fn test_number_exclusive_offsets() {
        let schema = json!({"minimum": 0, "exclusiveMinimum": true, "maximum": 10, "exclusiveMaximum": true});
        assert_eq!(number_range(&node(&schema)).unwrap(), (1.0, 9.0));
    }

    #[test]
    fn test_number_narrow_exclusive_uses_midpoint() {
        let schema = json!({"exclusiveMinimum": 0, "exclusiveMaximum": 1});
        assert_eq!(number_range(&node(&schema)).unwrap(), (0.5, 0.5));
    }

    #[test]
    fn test_number_empty_range() {
        let schema = json!({"exclusiveMinimum": 2, "maximum": 2});
        assert!(number_range(&node(&schema)).is_err());
        let schema = json!({"minimum": 3, "maximum": 2});
        assert!(number_range(&node(&schema)).is_err());
    }

    #[test]
    fn test_multiple_of_defaults_to_one() {
        assert_eq!(multiple_of(&node(&json!({}))), 1.0);
        assert_eq!(multiple_of(&node(&json!({"multipleOf": 0}))), 1.0);
        assert_eq!(multiple_of(&node(&json!({"multipleOf": 2.5}))), 2.5);
    }

    #[test]
    fn test_multiplier_range() {
        assert_eq!(multiplier_range(1.0, 10.0, 3.0).unwrap(), (1, 3));
        assert_eq!(multiplier_range(-7.0, 7.0, 5.0).unwrap(), (-1, 1));
        assert!(multiplier_range(1.0, 2.0, 5.0).is_err());
    }

    #[test]
    fn test_length_defaults() {
        assert_eq!(length_range(&node(&json!({}))), (1, 5));
        assert_eq!(length_range(&node(&json!({"minLength": 10}))), (10, 11));
        assert_eq!(length_range(&node(&json!({"maxLength": 3}))), (1, 3));
    }

    #[test]
    fn test_item_count_defaults() {
        assert_eq!(item_count_range(&node(&json!({})), 1), (0, 1));
        assert_eq!(item_count_range(&node(&json!({"minItems": 4})), 2), (4, 4));
        assert_eq!(item_count_range(&node(&json!({"maxItems": 9})), 2), (0, 9));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let schema = json!({"format": "credit-card"});
        assert!(matches!(
            string_format(&node(&schema)),
            Err(FakerError::UnsupportedType { keyword: "format", .. })
        ));
        assert_eq!(string_format(&node(&json!({}))).unwrap(), None);
    }
}
