//! `RankingEngine` (spec.md §4.5-§4.6): turns a materialized candidate
//! list into a totally ordered `[SearchResult]`.

use std::collections::HashSet;

use jsh_model::{Bucket, Entry, GroupType, MatchType, ScoringContext, ScriptType, SearchResult};
use tracing::instrument;

use crate::bucket::bucketize;
use crate::config::{self, Configuration};

/// Per-search parameters shared across every candidate; only
/// `match_type`/`is_exact_match` vary per entry, and those are derived
/// fresh for each one in [`RankingEngine::rank`].
#[derive(Debug, Clone)]
pub struct RankRequest {
    pub query: String,
    pub script: ScriptType,
    pub is_reverse: bool,
    pub is_english_reverse: bool,
    pub canonical_headwords: Option<HashSet<String>>,
    pub hint: Option<String>,
}

pub struct RankingEngine {
    config: Configuration,
}

impl RankingEngine {
    pub fn new(config: Configuration) -> Result<Self, config::Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Score and order `entries`, truncating to `min(limit, 100)` as
    /// spec.md §4.5/§4.6 require.
    #[instrument(skip(self, entries))]
    pub fn rank(&self, entries: Vec<Entry>, request: &RankRequest, limit: usize) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = entries
            .into_iter()
            .map(|entry| self.score_one(entry, request))
            .collect();

        results.sort_by(|a, b| a.ordering_key().cmp(&b.ordering_key()));
        results.truncate(limit.min(100));
        results
    }

    fn score_one(&self, entry: Entry, request: &RankRequest) -> SearchResult {
        let (match_type, is_exact_match) = classify_match(&entry, &request.query);

        let ctx = ScoringContext {
            query: request.query.clone(),
            script: request.script,
            match_type,
            is_exact_match,
            is_reverse: request.is_reverse,
            is_english_reverse: request.is_english_reverse,
            canonical_headwords: request.canonical_headwords.clone(),
            hint: request.hint.clone(),
        };

        let score: f64 = self
            .config
            .features
            .iter()
            .map(|fc| fc.score(fc.feature.calculate(&entry, &ctx)))
            .sum();

        let bucket = bucketize(&entry, match_type, is_exact_match);
        let group_type = classify_group(&entry);

        SearchResult { entry, match_type, relevance_score: score, bucket, group_type }
    }
}

/// Literal headword/kana/romaji equality or prefix containment against
/// the query. Verb-inflection lemma matching (spec.md §4.5's "lemma form
/// of a verb whose inflected form equals the query") would need a
/// morphological analyzer, which is out of this crate's scope.
fn classify_match(entry: &Entry, query: &str) -> (MatchType, bool) {
    let query_lower = query.to_lowercase();
    let romaji_lower = entry.reading_romaji.to_lowercase();

    if entry.headword == query || entry.reading_hiragana == query || romaji_lower == query_lower {
        return (MatchType::Exact, true);
    }

    if entry.headword.starts_with(query)
        || entry.reading_hiragana.starts_with(query)
        || romaji_lower.starts_with(&query_lower)
    {
        return (MatchType::Prefix, false);
    }

    (MatchType::Contains, false)
}

/// Decorative-only grouping (spec.md §3): never consulted by
/// `ordering_key`.
fn classify_group(entry: &Entry) -> GroupType {
    if entry.headword.chars().any(|c| c.is_whitespace() || matches!(c, '・')) {
        return GroupType::CommonPhrase;
    }
    match entry.frequency_rank {
        Some(rank) if rank <= 2000 => GroupType::BasicWord,
        Some(_) => GroupType::Other,
        None => GroupType::Other,
    }
}

#[cfg(test)]
mod tests {
    use jsh_model::Entry;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: i64, headword: &str, reading: &str, romaji: &str, freq: Option<i64>, created_at: i64) -> Entry {
        Entry {
            id,
            headword: headword.to_string(),
            reading_hiragana: reading.to_string(),
            reading_romaji: romaji.to_string(),
            frequency_rank: freq,
            pitch_accent: None,
            created_at,
            senses: Vec::new(),
        }
    }

    fn request(query: &str) -> RankRequest {
        RankRequest {
            query: query.to_string(),
            script: ScriptType::Hiragana,
            is_reverse: false,
            is_english_reverse: false,
            canonical_headwords: None,
            hint: None,
        }
    }

    #[test]
    fn exact_match_outranks_everything_else() {
        let engine = RankingEngine::new(Configuration::default_for_search()).unwrap();
        let entries = vec![
            entry(1, "食べ物", "たべもの", "tabemono", Some(2000), 0),
            entry(2, "食べる", "たべる", "taberu", Some(500), 0),
        ];
        let results = engine.rank(entries, &request("たべる"), 10);
        assert_eq!(results[0].entry.id, 2);
        assert_eq!(results[0].bucket, Bucket::A);
    }

    #[test]
    fn truncates_to_limit() {
        let engine = RankingEngine::new(Configuration::default_for_search()).unwrap();
        let entries = (0..5)
            .map(|i| entry(i, "猫", "ねこ", "neko", Some(100 + i), 0))
            .collect();
        let results = engine.rank(entries, &request("猫"), 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn ties_break_by_created_at_then_id() {
        let engine = RankingEngine::new(Configuration::default_for_search()).unwrap();
        let entries = vec![
            entry(2, "犬", "いぬ", "inu", None, 100),
            entry(1, "犬", "いぬ", "inu", None, 50),
        ];
        let results = engine.rank(entries, &request("犬"), 10);
        assert_eq!(results[0].entry.id, 1);
    }
}
