//! # Random Picks
//!
//! Uniform choices over slices and numeric ranges. Range helpers accept
//! their bounds in either order and never panic.

use rand::seq::{index, SliceRandom};
use rand::Rng;

/// One element chosen uniformly, or `None` for an empty slice.
pub fn element<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// `count` distinct elements chosen uniformly, in their original order.
///
/// `count` is clamped to `items.len()`.
pub fn elements<'a, T, R: Rng>(rng: &mut R, items: &'a [T], count: usize) -> Vec<&'a T> {
    let count = count.min(items.len());
    let mut picked = index::sample(rng, items.len(), count).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| &items[i]).collect()
}

/// A non-empty subset of uniformly chosen size, in original order.
///
/// Empty for an empty slice.
pub fn subset<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Vec<&'a T> {
    if items.is_empty() {
        return Vec::new();
    }
    let size = rng.gen_range(1..=items.len());
    elements(rng, items, size)
}

/// `true` or `false` with equal probability.
pub fn boolean<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Uniform integer in the closed range spanned by `a` and `b`.
pub fn int_between<R: Rng>(rng: &mut R, a: i64, b: i64) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Uniform count in the closed range spanned by `a` and `b`.
pub fn count_between<R: Rng>(rng: &mut R, a: usize, b: usize) -> usize {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Uniform float in the closed range spanned by `a` and `b`.
///
/// Interpolates instead of using `Uniform`, so spans wider than `f64::MAX`
/// do not overflow.
pub fn float_between<R: Rng>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        return lo;
    }
    let t: f64 = rng.gen();
    (lo * (1.0 - t) + hi * t).clamp(lo, hi)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn int_between_stays_in_range(seed in any::<u64>(), a in -1000i64..1000, b in -1000i64..1000) {
            let n = int_between(&mut StdRng::seed_from_u64(seed), a, b);
            prop_assert!(n >= a.min(b) && n <= a.max(b));
        }

        #[test]
        fn float_between_stays_in_range(seed in any::<u64>(), a in -1e9f64..1e9, b in -1e9f64..1e9) {
            let x = float_between(&mut StdRng::seed_from_u64(seed), a, b);
            prop_assert!(x >= a.min(b) && x <= a.max(b));
        }
    }
}
