//! # Format Generators
//!
//! One generator per [`StringFormat`]. Every value is chosen so that it
//! passes the corresponding JSON Schema `format` assertion.

use chrono::{DateTime, SecondsFormat, Utc};
use fake::faker::internet::en::{DomainSuffix, SafeEmail, IPv4, IPv6};
use fake::Fake;
use jsf_core::StringFormat;
use rand::Rng;

use crate::text::word;

/// Latest timestamp produced: 2038-01-19T03:14:07Z.
const MAX_TIMESTAMP: i64 = i32::MAX as i64;

/// A random value for `format`.
pub fn generate<R: Rng>(rng: &mut R, format: StringFormat) -> String {
    match format {
        StringFormat::DateTime => timestamp(rng).to_rfc3339_opts(SecondsFormat::Secs, true),
        StringFormat::Date => timestamp(rng).format("%Y-%m-%d").to_string(),
        StringFormat::Time => timestamp(rng).format("%H:%M:%SZ").to_string(),
        StringFormat::Email => SafeEmail().fake_with_rng(rng),
        StringFormat::Hostname => hostname(rng),
        StringFormat::Ipv4 => IPv4().fake_with_rng(rng),
        StringFormat::Ipv6 => IPv6().fake_with_rng(rng),
        StringFormat::Uri => {
            let host = hostname(rng);
            format!("https://{host}/{}", word(rng))
        }
        StringFormat::Uuid => uuid::Builder::from_random_bytes(rng.gen())
            .into_uuid()
            .to_string(),
    }
}

fn timestamp<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(rng.gen_range(0..=MAX_TIMESTAMP), 0).unwrap_or_default()
}

fn hostname<R: Rng>(rng: &mut R) -> String {
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("{}.{suffix}", word(rng).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_every_format_validates() {
        let mut rng = StdRng::seed_from_u64(21);
        for format in StringFormat::all() {
            let schema = json!({"type": "string", "format": format.as_str()});
            let validator = jsonschema::options()
                .should_validate_formats(true)
                .build(&schema)
                .unwrap();
            for _ in 0..50 {
                let value = json!(generate(&mut rng, *format));
                assert!(
                    validator.is_valid(&value),
                    "{value} is not a valid {format}"
                );
            }
        }
    }

    #[test]
    fn test_date_time_shape() {
        let s = generate(&mut StdRng::seed_from_u64(4), StringFormat::DateTime);
        assert_eq!(s.len(), "2001-09-09T01:46:40Z".len());
        assert!(s.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&s).is_ok());
    }

    #[test]
    fn test_ipv4_parses() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..20 {
            let s = generate(&mut rng, StringFormat::Ipv4);
            assert!(s.parse::<std::net::Ipv4Addr>().is_ok(), "{s}");
        }
    }

    #[test]
    fn test_uuid_is_reproducible() {
        let a = generate(&mut StdRng::seed_from_u64(8), StringFormat::Uuid);
        let b = generate(&mut StdRng::seed_from_u64(8), StringFormat::Uuid);
        assert_eq!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
