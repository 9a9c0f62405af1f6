//! Parsed part-of-speech variant.
//!
//! `word_senses.part_of_speech` is stored as a comma-separated tag string
//! (e.g. `"ichidan verb,transitive"`, `"noun (common) (futsuumeishi)"`).
//! Per the redesign note in the specification, we parse it once at load
//! time into a tagged variant that the ranking engine consumes directly,
//! while keeping the raw string around for presentation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerbKind {
    Ichidan,
    Godan,
    Suru,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjectiveKind {
    I,
    Na,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NounKind {
    Common,
    ProperNoun,
    Archaic,
    Rare,
}

/// Parsed classification of a sense's `part_of_speech` tag string.
///
/// The raw string is never discarded -- see [`Sense::part_of_speech_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Verb(VerbKind),
    Adjective(AdjectiveKind),
    Noun(NounKind),
    Other(String),
}

impl PartOfSpeech {
    /// Parse a comma-separated tag string into a single coarse
    /// classification. Never panics; an unrecognized tag set becomes
    /// `Other(raw)`.
    pub fn parse(raw: &str) -> Self {
        let tags: HashSet<&str> = raw.split(',').map(|t| t.trim()).collect();

        for tag in &tags {
            let lower = tag.to_ascii_lowercase();
            if lower.starts_with("ichidan") {
                return PartOfSpeech::Verb(VerbKind::Ichidan);
            }
            if lower.starts_with("godan") {
                return PartOfSpeech::Verb(VerbKind::Godan);
            }
            if lower.starts_with("suru") {
                return PartOfSpeech::Verb(VerbKind::Suru);
            }
            if lower.starts_with("verb") {
                return PartOfSpeech::Verb(VerbKind::Other);
            }
            if lower.starts_with("adj-i") {
                return PartOfSpeech::Adjective(AdjectiveKind::I);
            }
            if lower.starts_with("adj-na") {
                return PartOfSpeech::Adjective(AdjectiveKind::Na);
            }
        }

        for tag in &tags {
            let lower = tag.to_ascii_lowercase();
            if lower.contains("archaic") {
                return PartOfSpeech::Noun(NounKind::Archaic);
            }
            if lower.contains("rare") {
                return PartOfSpeech::Noun(NounKind::Rare);
            }
            if lower.contains("proper") {
                return PartOfSpeech::Noun(NounKind::ProperNoun);
            }
            if lower.starts_with("noun") {
                return PartOfSpeech::Noun(NounKind::Common);
            }
        }

        PartOfSpeech::Other(raw.to_string())
    }

    pub fn is_verb_or_i_adjective(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Verb(_) | PartOfSpeech::Adjective(AdjectiveKind::I)
        )
    }

    pub fn is_common_noun(&self) -> bool {
        matches!(self, PartOfSpeech::Noun(NounKind::Common))
    }

    pub fn is_proper_archaic_or_rare(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun(NounKind::ProperNoun)
                | PartOfSpeech::Noun(NounKind::Archaic)
                | PartOfSpeech::Noun(NounKind::Rare)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verb_tags() {
        assert_eq!(
            PartOfSpeech::parse("ichidan verb,transitive"),
            PartOfSpeech::Verb(VerbKind::Ichidan)
        );
        assert_eq!(
            PartOfSpeech::parse("godan verb with ru ending"),
            PartOfSpeech::Verb(VerbKind::Godan)
        );
        assert_eq!(
            PartOfSpeech::parse("suru verb - special class"),
            PartOfSpeech::Verb(VerbKind::Suru)
        );
    }

    #[test]
    fn parses_adjective_tags() {
        assert_eq!(
            PartOfSpeech::parse("adj-i"),
            PartOfSpeech::Adjective(AdjectiveKind::I)
        );
        assert_eq!(
            PartOfSpeech::parse("adj-na"),
            PartOfSpeech::Adjective(AdjectiveKind::Na)
        );
    }

    #[test]
    fn parses_noun_tags() {
        assert_eq!(
            PartOfSpeech::parse("noun (common) (futsuumeishi)"),
            PartOfSpeech::Noun(NounKind::Common)
        );
        assert_eq!(
            PartOfSpeech::parse("noun, proper"),
            PartOfSpeech::Noun(NounKind::ProperNoun)
        );
        assert_eq!(
            PartOfSpeech::parse("archaic form"),
            PartOfSpeech::Noun(NounKind::Archaic)
        );
    }

    #[test]
    fn unrecognized_tag_falls_back_to_other() {
        let raw = "interjection";
        assert_eq!(
            PartOfSpeech::parse(raw),
            PartOfSpeech::Other(raw.to_string())
        );
    }

    #[test]
    fn parse_never_panics_on_empty_string() {
        let _ = PartOfSpeech::parse("");
    }
}
