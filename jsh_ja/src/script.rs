//! Script Detector (spec.md §4.1).
//!
//! Pure and deterministic: never mutates the query, always terminates in
//! one of the six [`ScriptType`] variants.

use jsh_model::ScriptType;

use crate::chars::{is_ascii_letter_extended, is_ascii_vowel, is_hiragana, is_kanji, is_katakana};

/// Classify an already-trimmed, non-empty query.
///
/// Rule order follows spec.md §4.1 exactly through rule 5. Rule 6 ("else
/// -> mixed") is refined one step further than the prose: a remainder
/// that is purely ASCII letters (just lacking an internal vowel, e.g.
/// "sky", "rhythm") is classified [`ScriptType::LatinForeign`] rather
/// than `Mixed`, since spec.md §2 and §4.6 both require the detector to
/// be able to produce `latin-foreign` and nothing else in the rule list
/// can. Anything that mixes scripts, contains digits, or contains other
/// Unicode remains `Mixed`. See DESIGN.md for this decision.
pub fn detect(query: &str) -> ScriptType {
    let chars: Vec<char> = query.chars().filter(|c| !c.is_whitespace()).collect();
    debug_assert!(!chars.is_empty(), "detect() expects a non-empty query");

    if chars.iter().all(|&c| is_hiragana(c)) {
        return ScriptType::Hiragana;
    }
    if chars.iter().all(|&c| is_katakana(c)) {
        return ScriptType::Katakana;
    }

    let has_kanji = chars.iter().any(|&c| is_kanji(c));
    let has_kana = chars.iter().any(|&c| is_hiragana(c) || is_katakana(c));
    if has_kanji && has_kana {
        return ScriptType::Mixed;
    }
    if has_kanji && chars.iter().all(|&c| is_kanji(c)) {
        return ScriptType::Kanji;
    }

    if chars.iter().all(|&c| is_ascii_letter_extended(c)) {
        if chars.iter().any(|&c| is_ascii_vowel(c)) {
            return ScriptType::Romaji;
        }
        return ScriptType::LatinForeign;
    }

    ScriptType::Mixed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn all_hiragana() {
        assert_eq!(detect("たべる"), ScriptType::Hiragana);
    }

    #[test]
    fn all_katakana_including_prolonged_mark() {
        assert_eq!(detect("スター"), ScriptType::Katakana);
    }

    #[test]
    fn halfwidth_katakana_counts_as_katakana() {
        assert_eq!(detect("ｽﾀｰ"), ScriptType::Katakana);
    }

    #[test]
    fn all_kanji() {
        assert_eq!(detect("食"), ScriptType::Kanji);
        assert_eq!(detect("日本語"), ScriptType::Kanji);
    }

    #[test]
    fn kanji_and_kana_mixed() {
        assert_eq!(detect("食べる"), ScriptType::Mixed);
    }

    #[test]
    fn romaji_with_vowel() {
        assert_eq!(detect("taberu"), ScriptType::Romaji);
        assert_eq!(detect("ki-rudo"), ScriptType::Romaji);
    }

    #[test]
    fn ascii_without_vowel_is_latin_foreign() {
        assert_eq!(detect("sky"), ScriptType::LatinForeign);
        assert_eq!(detect("rhythm"), ScriptType::LatinForeign);
    }

    #[test]
    fn digits_fall_through_to_mixed() {
        assert_eq!(detect("123"), ScriptType::Mixed);
    }
}
