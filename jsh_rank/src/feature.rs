//! The pluggable scoring features from spec.md §4.5. One tagged variant
//! with a `calculate` method, rather than a protocol/interface list
//! (spec.md §9).

use jsh_model::{Entry, MatchType, ScoringContext};

/// A single scoring feature. Each variant's `calculate` returns a raw,
/// unclamped value; [`crate::config::FeatureConfig`] clamps it to the
/// configured `range` and multiplies by `weight` before it's summed into
/// a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    ExactMatch,
    PrefixMatch,
    ContainsMatch,
    Frequency,
    PosWeight,
    KatakanaDemotion,
    CanonicalNative,
    ParentheticalHint,
}

impl Feature {
    pub fn name(&self) -> &'static str {
        match self {
            Feature::ExactMatch => "exact_match",
            Feature::PrefixMatch => "prefix_match",
            Feature::ContainsMatch => "contains_match",
            Feature::Frequency => "frequency",
            Feature::PosWeight => "pos_weight",
            Feature::KatakanaDemotion => "katakana_demotion",
            Feature::CanonicalNative => "canonical_native",
            Feature::ParentheticalHint => "parenthetical_hint",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exact_match" => Some(Feature::ExactMatch),
            "prefix_match" => Some(Feature::PrefixMatch),
            "contains_match" => Some(Feature::ContainsMatch),
            "frequency" => Some(Feature::Frequency),
            "pos_weight" => Some(Feature::PosWeight),
            "katakana_demotion" => Some(Feature::KatakanaDemotion),
            "canonical_native" => Some(Feature::CanonicalNative),
            "parenthetical_hint" => Some(Feature::ParentheticalHint),
            _ => None,
        }
    }

    pub fn default_weight(&self) -> f64 {
        match self {
            Feature::ExactMatch => 2.0,
            Feature::PrefixMatch => 1.2,
            Feature::ContainsMatch => 0.8,
            Feature::Frequency => 1.0,
            Feature::PosWeight => 1.0,
            Feature::KatakanaDemotion => 1.0,
            Feature::CanonicalNative => 2.0,
            Feature::ParentheticalHint => 1.5,
        }
    }

    pub fn default_range(&self) -> (f64, f64) {
        match self {
            Feature::ExactMatch => (0.0, 100.0),
            Feature::PrefixMatch => (0.0, 60.0),
            Feature::ContainsMatch => (0.0, 30.0),
            Feature::Frequency => (0.0, 40.0),
            Feature::PosWeight => (-20.0, 20.0),
            Feature::KatakanaDemotion => (-30.0, 0.0),
            Feature::CanonicalNative => (0.0, 80.0),
            Feature::ParentheticalHint => (0.0, 40.0),
        }
    }

    /// The raw feature value for `entry` under `ctx`. Pure and
    /// synchronous (spec.md §5): no I/O, no mutation.
    pub fn calculate(&self, entry: &Entry, ctx: &ScoringContext) -> f64 {
        match self {
            Feature::ExactMatch => calculate_exact_match(ctx),
            Feature::PrefixMatch => calculate_prefix_match(entry, ctx),
            Feature::ContainsMatch => calculate_contains_match(entry, ctx),
            Feature::Frequency => calculate_frequency(entry),
            Feature::PosWeight => calculate_pos_weight(entry),
            Feature::KatakanaDemotion => calculate_katakana_demotion(entry, ctx),
            Feature::CanonicalNative => calculate_canonical_native(entry, ctx),
            Feature::ParentheticalHint => calculate_parenthetical_hint(entry, ctx),
        }
    }
}

fn calculate_exact_match(ctx: &ScoringContext) -> f64 {
    if ctx.is_exact_match {
        100.0
    } else {
        0.0
    }
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

fn calculate_prefix_match(entry: &Entry, ctx: &ScoringContext) -> f64 {
    match ctx.match_type {
        MatchType::Exact | MatchType::Prefix => 60.0,
        MatchType::Contains => {
            let query_len = ctx.query.chars().count().max(1) as f64;
            let best = [&entry.headword, &entry.reading_hiragana, &entry.reading_romaji]
                .iter()
                .map(|field| common_prefix_len(field, &ctx.query))
                .max()
                .unwrap_or(0) as f64;
            60.0 * (best / query_len)
        }
    }
}

fn is_token_boundary_contains(field: &str, query: &str) -> bool {
    field
        .split(|c: char| c.is_whitespace() || matches!(c, '・' | '/' | '、' | ','))
        .any(|token| token.starts_with(query))
}

fn calculate_contains_match(entry: &Entry, ctx: &ScoringContext) -> f64 {
    if ctx.match_type != MatchType::Contains || ctx.query.is_empty() {
        return 0.0;
    }
    let boundary_hit = [&entry.headword, &entry.reading_hiragana, &entry.reading_romaji]
        .iter()
        .any(|field| is_token_boundary_contains(field, &ctx.query));
    if boundary_hit {
        30.0
    } else {
        15.0
    }
}

fn calculate_frequency(entry: &Entry) -> f64 {
    match entry.frequency_rank {
        Some(rank) => {
            let rank = rank.max(1) as f64;
            (40.0 - rank.log2()).max(0.0)
        }
        None => 0.0,
    }
}

fn calculate_pos_weight(entry: &Entry) -> f64 {
    let Some(primary) = entry.senses.first() else {
        return 0.0;
    };
    if primary.part_of_speech.is_verb_or_i_adjective() {
        20.0
    } else if primary.part_of_speech.is_common_noun() {
        5.0
    } else if primary.part_of_speech.is_proper_archaic_or_rare() {
        0.0
    } else {
        -10.0
    }
}

fn calculate_katakana_demotion(entry: &Entry, ctx: &ScoringContext) -> f64 {
    if ctx.is_english_reverse && entry.is_pure_katakana() {
        -30.0
    } else {
        0.0
    }
}

fn calculate_canonical_native(entry: &Entry, ctx: &ScoringContext) -> f64 {
    match &ctx.canonical_headwords {
        Some(set) if set.contains(&entry.headword) => 80.0,
        _ => 0.0,
    }
}

fn calculate_parenthetical_hint(entry: &Entry, ctx: &ScoringContext) -> f64 {
    let Some(hint) = &ctx.hint else {
        return 0.0;
    };
    let hint = hint.to_lowercase();
    let hit = entry.senses.iter().any(|sense| {
        sense
            .definition_english
            .to_lowercase()
            .split_whitespace()
            .any(|word| word.trim_matches(|c: char| !c.is_alphanumeric()) == hint)
    });
    if hit {
        40.0
    } else {
        0.0
    }
}
