//! The curated English->Japanese canonical headword table and the
//! `base (hint)` query-splitting helpers that feed it (spec.md §4.3).

mod extract;
mod map;

pub use extract::{extract_base, extract_hint};
pub use map::{canonical_headwords, CanonicalMap, CANONICAL_MAP};
