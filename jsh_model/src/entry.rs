use serde::{Deserialize, Serialize};

use crate::pos::PartOfSpeech;

/// A dictionary headword with its senses, loaded once from the bundled
/// artifact. Immutable at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub headword: String,
    pub reading_hiragana: String,
    pub reading_romaji: String,
    pub frequency_rank: Option<i64>,
    pub pitch_accent: Option<String>,
    /// Unix timestamp. Used only as a deterministic ordering tie-breaker;
    /// never interpreted as wall-clock time within the ranking engine.
    pub created_at: i64,
    pub senses: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub id: i64,
    pub entry_id: i64,
    pub definition_english: String,
    pub definition_chinese_simplified: Option<String>,
    pub definition_chinese_traditional: Option<String>,
    pub part_of_speech: PartOfSpeech,
    /// The original comma-separated tag string, kept for presentation.
    pub part_of_speech_raw: String,
    pub usage_notes: Option<String>,
    pub sense_order: i64,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: i64,
    pub sense_id: i64,
    pub japanese_text: String,
    pub english_translation: String,
    pub chinese_translation: Option<String>,
    pub example_order: i64,
}

impl Entry {
    pub fn is_pure_katakana(&self) -> bool {
        !self.headword.is_empty()
            && self
                .headword
                .chars()
                .all(|c| jsh_ja_script_is_katakana(c))
    }
}

/// Local copy of the katakana range test so `jsh_model` has no dependency
/// on `jsh_ja` (which itself depends on `jsh_model` for [`crate::ScriptType`]).
/// Ranges must match `jsh_ja::chars::is_katakana` exactly -- spec.md §4.1
/// defines one katakana class, not two.
fn jsh_ja_script_is_katakana(c: char) -> bool {
    matches!(c,
        '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF65}'..='\u{FF9F}'
    )
}
