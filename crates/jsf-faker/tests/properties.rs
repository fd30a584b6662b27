//! Seed-driven properties of the generator.

use jsf_faker::Faker;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn integers_stay_in_bounds(seed in any::<u64>(), a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let (lo, hi) = (a.min(b), a.max(b));
        let schema = json!({"type": "integer", "minimum": lo, "maximum": hi});
        let n = Faker::with_seed(seed).generate(&schema).unwrap().as_i64().unwrap();
        prop_assert!(n >= lo && n <= hi);
    }

    #[test]
    fn numbers_stay_in_bounds(seed in any::<u64>(), a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let (lo, hi) = (a.min(b), a.max(b));
        let schema = json!({"type": "number", "minimum": lo, "maximum": hi});
        let x = Faker::with_seed(seed).generate(&schema).unwrap().as_f64().unwrap();
        prop_assert!(x >= lo && x <= hi);
    }

    #[test]
    fn item_counts_stay_in_bounds(seed in any::<u64>(), a in 0usize..12, b in 0usize..12) {
        let (lo, hi) = (a.min(b), a.max(b));
        let schema = json!({
            "type": "array",
            "items": {"type": "integer"},
            "minItems": lo,
            "maxItems": hi
        });
        let value = Faker::with_seed(seed).generate(&schema).unwrap();
        let len = value.as_array().unwrap().len();
        prop_assert!(len >= lo && len <= hi);
    }

    #[test]
    fn string_lengths_stay_in_bounds(seed in any::<u64>(), a in 0usize..60, b in 1usize..60) {
        let (lo, hi) = (a.min(b), a.max(b));
        let schema = json!({"type": "string", "minLength": lo, "maxLength": hi});
        let value = Faker::with_seed(seed).generate(&schema).unwrap();
        let len = value.as_str().unwrap().chars().count();
        prop_assert!(len >= lo && len <= hi, "len {} outside [{}, {}]", len, lo, hi);
    }

    #[test]
    fn enum_output_is_a_member(seed in any::<u64>(), members in prop::collection::vec(any::<i32>(), 1..8)) {
        let schema = json!({"enum": members});
        let value = Faker::with_seed(seed).generate(&schema).unwrap();
        prop_assert!(members.iter().any(|m| json!(m) == value));
    }

    #[test]
    fn required_names_always_appear(seed in any::<u64>(), count in 0usize..6) {
        let names: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
        let properties: serde_json::Map<String, serde_json::Value> = names
            .iter()
            .map(|n| (n.clone(), json!({"type": "boolean"})))
            .collect();
        let schema = json!({"type": "object", "properties": properties, "required": names});
        let value = Faker::with_seed(seed).generate(&schema).unwrap();
        for name in &names {
            prop_assert!(value.get(name).is_some());
        }
    }
}
