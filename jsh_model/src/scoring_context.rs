use std::collections::HashSet;

use crate::{result::MatchType, script::ScriptType};

/// Per-candidate record passed to every ranking feature.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    /// The normalized query string being scored against.
    pub query: String,
    pub script: ScriptType,
    pub match_type: MatchType,
    /// Whether the candidate's headword or kana reading is an exact
    /// match of the normalized query (as opposed to only its lemma).
    pub is_exact_match: bool,
    /// Whether this candidate was produced by the reverse-search path
    /// (foreign gloss -> Japanese headword).
    pub is_reverse: bool,
    /// Set only in reverse mode: English is the query language.
    pub is_english_reverse: bool,
    /// The canonical headword set for the query, if it resolved to one
    /// via [`jsh_canonical`]. Drives `canonical_native`.
    pub canonical_headwords: Option<HashSet<String>>,
    /// The parenthetical hint extracted from the raw query, if any.
    /// Drives `parenthetical_hint`.
    pub hint: Option<String>,
}
