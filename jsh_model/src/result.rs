use serde::{Deserialize, Serialize};

use crate::entry::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    Exact,
    Prefix,
    Contains,
}

/// Coarse ranking tier. Dominates ordering; score only breaks ties
/// within a bucket. Variant order is the sort order (A first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bucket {
    A,
    B,
    C,
    D,
}

/// Decorative grouping for UI sectioning. Never consulted for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupType {
    BasicWord,
    CommonPhrase,
    Derivative,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub entry: Entry,
    pub match_type: MatchType,
    pub relevance_score: f64,
    pub bucket: Bucket,
    pub group_type: GroupType,
}

impl SearchResult {
    /// The ordering key per the specification: `(bucket, -score, created_at, id)`.
    pub fn ordering_key(&self) -> (Bucket, i64, i64, i64) {
        // score is negated and represented via a total-order-friendly bit
        // pattern so `Ord` can be derived on the tuple without carrying a
        // raw f64 (which is only `PartialOrd`).
        (
            self.bucket,
            neg_score_key(self.relevance_score),
            self.entry.created_at,
            self.entry.id,
        )
    }
}

fn neg_score_key(score: f64) -> i64 {
    // Higher score must sort first within a bucket; we store `-score`
    // scaled to an integer so ties compare exactly the way float
    // comparisons would for the finite, bounded range scores live in
    // (see jsh_rank::feature ranges, which sum to well under 1e6).
    (-score * 1_000.0).round() as i64
}
