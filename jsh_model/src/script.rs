use serde::{Deserialize, Serialize};

/// Script classification of a sanitized query. Drives pipeline routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptType {
    Hiragana,
    Katakana,
    Kanji,
    /// Kana and kanji mixed, or no other rule applied.
    Mixed,
    Romaji,
    /// ASCII letters that did not resolve to romaji (no internal vowel) --
    /// routed to reverse search. See `jsh_ja::script` for how this is
    /// distinguished from [`ScriptType::Romaji`].
    LatinForeign,
}
