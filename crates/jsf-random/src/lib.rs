//! # jsf-random: Randomness and Text Primitives
//!
//! The building blocks the value generator draws from:
//!
//! - **pick**: one element, N elements, a non-empty subset, bounded
//!   integers and floats.
//! - **text**: lorem words and length-bounded lorem text.
//! - **pattern**: strings matching a regular expression.
//! - **format**: values for each [`jsf_core::StringFormat`].
//!
//! ## Crate Policy
//!
//! - Every function takes the random source as `&mut R where R: Rng`. There
//!   is no global or thread-local randomness, so a seeded `StdRng` makes
//!   every call reproducible.
//! - Depends only on `jsf-core` internally.

pub mod format;
pub mod pattern;
pub mod pick;
pub mod text;
