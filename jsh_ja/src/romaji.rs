//! Romaji normalization and romaji->kana conversion (spec.md §4.2).
//!
//! Grounded on `ricardobm-kotoba-old`'s `kana::to::to_hiragana` --
//! greedy longest-prefix-match against a static mora table, with the
//! doubled-consonant -> small tsu (っ) rule handled before table lookup.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Kunrei -> Hepburn digraph/trigraph rewrites, applied longest-match
/// first so e.g. "sya" doesn't get caught by a "si" rule first.
const KUNREI_TO_HEPBURN: &[(&str, &str)] = &[
    ("sya", "sha"),
    ("syu", "shu"),
    ("syo", "sho"),
    ("tya", "cha"),
    ("tyu", "chu"),
    ("tyo", "cho"),
    ("jya", "ja"),
    ("jyu", "ju"),
    ("jyo", "jo"),
    ("si", "shi"),
    ("ti", "chi"),
    ("tu", "tsu"),
    ("hu", "fu"),
    ("zi", "ji"),
    ("di", "ji"),
];

/// Doubled-vowel / long-vowel digraphs collapsed into a single internal
/// macron-bearing representation. This is a canonical *matching* form --
/// it is never used for kana conversion, where long vowels must still be
/// spelled out literally (e.g. とうきょう, not とーきょー).
const LONG_VOWELS: &[(&str, char)] = &[
    ("aa", 'ā'),
    ("ii", 'ī'),
    ("uu", 'ū'),
    ("ee", 'ē'),
    ("oo", 'ō'),
    ("ou", 'ō'),
];

/// Apply the deterministic Kunrei->Hepburn consonant rewrites from
/// spec.md §4.2, lowercasing along the way. This is the basis for both
/// [`canonical_romaji_form`] and [`romaji_to_hiragana`].
pub fn rewrite_kunrei_to_hepburn(input: &str) -> String {
    let mut s = input.to_ascii_lowercase();
    for (from, to) in KUNREI_TO_HEPBURN {
        s = s.replace(from, to);
    }
    s
}

/// The single internal representation used to match romaji queries
/// against stored Hepburn romaji, per spec.md §4.2. Idempotent:
/// re-normalizing an already-normalized string is a no-op, since the
/// output never contains the digraphs being matched against.
pub fn canonical_romaji_form(input: &str) -> String {
    let mut s = rewrite_kunrei_to_hepburn(input);
    for (from, to) in LONG_VOWELS {
        s = s.replace(from, &to.to_string());
    }
    s
}

lazy_static! {
    static ref ROMAJI_TO_HIRAGANA: HashMap<&'static str, &'static str> = {
        let pairs: &[(&str, &str)] = &[
            ("a", "あ"), ("i", "い"), ("u", "う"), ("e", "え"), ("o", "お"),
            ("ka", "か"), ("ki", "き"), ("ku", "く"), ("ke", "け"), ("ko", "こ"),
            ("ga", "が"), ("gi", "ぎ"), ("gu", "ぐ"), ("ge", "げ"), ("go", "ご"),
            ("sa", "さ"), ("shi", "し"), ("su", "す"), ("se", "せ"), ("so", "そ"),
            ("za", "ざ"), ("ji", "じ"), ("zu", "ず"), ("ze", "ぜ"), ("zo", "ぞ"),
            ("ta", "た"), ("chi", "ち"), ("tsu", "つ"), ("te", "て"), ("to", "と"),
            ("da", "だ"), ("de", "で"), ("do", "ど"),
            ("na", "な"), ("ni", "に"), ("nu", "ぬ"), ("ne", "ね"), ("no", "の"),
            ("ha", "は"), ("hi", "ひ"), ("fu", "ふ"), ("he", "へ"), ("ho", "ほ"),
            ("ba", "ば"), ("bi", "び"), ("bu", "ぶ"), ("be", "べ"), ("bo", "ぼ"),
            ("pa", "ぱ"), ("pi", "ぴ"), ("pu", "ぷ"), ("pe", "ぺ"), ("po", "ぽ"),
            ("ma", "ま"), ("mi", "み"), ("mu", "む"), ("me", "め"), ("mo", "も"),
            ("ya", "や"), ("yu", "ゆ"), ("yo", "よ"),
            ("ra", "ら"), ("ri", "り"), ("ru", "る"), ("re", "れ"), ("ro", "ろ"),
            ("wa", "わ"), ("wo", "を"), ("n", "ん"),
            ("kya", "きゃ"), ("kyu", "きゅ"), ("kyo", "きょ"),
            ("gya", "ぎゃ"), ("gyu", "ぎゅ"), ("gyo", "ぎょ"),
            ("sha", "しゃ"), ("shu", "しゅ"), ("sho", "しょ"),
            ("ja", "じゃ"), ("ju", "じゅ"), ("jo", "じょ"),
            ("cha", "ちゃ"), ("chu", "ちゅ"), ("cho", "ちょ"),
            ("nya", "にゃ"), ("nyu", "にゅ"), ("nyo", "にょ"),
            ("hya", "ひゃ"), ("hyu", "ひゅ"), ("hyo", "ひょ"),
            ("bya", "びゃ"), ("byu", "びゅ"), ("byo", "びょ"),
            ("pya", "ぴゃ"), ("pyu", "ぴゅ"), ("pyo", "ぴょ"),
            ("mya", "みゃ"), ("myu", "みゅ"), ("myo", "みょ"),
            ("rya", "りゃ"), ("ryu", "りゅ"), ("ryo", "りょ"),
        ];
        pairs.into_iter().copied().collect()
    };
}

const MAX_CHUNK: usize = 3;

fn is_consonant(c: u8) -> bool {
    matches!(
        c,
        b'k' | b'g' | b's' | b'z' | b't' | b'd' | b'h' | b'b' | b'p' | b'm' | b'r' | b'y' | b'w' | b'c' | b'j' | b'f'
    )
}

/// Convert a romaji string to hiragana using greedy longest-prefix
/// matching against a static mora table. Unrecognized characters pass
/// through unchanged so the caller can still fall back to romaji-column
/// search.
pub fn romaji_to_hiragana(input: &str) -> String {
    let normalized = rewrite_kunrei_to_hepburn(input);
    let bytes = normalized.as_bytes();
    let mut out = String::with_capacity(normalized.len());
    let mut i = 0;

    while i < bytes.len() {
        // Doubled consonant -> small tsu, e.g. "kk" in "gakkou".
        if i + 1 < bytes.len()
            && bytes[i] == bytes[i + 1]
            && is_consonant(bytes[i])
            && bytes[i] != b'n'
        {
            out.push('っ');
            i += 1;
            continue;
        }

        let mut matched = false;
        for len in (1..=MAX_CHUNK.min(bytes.len() - i)).rev() {
            let chunk = &normalized[i..i + len];
            if let Some(kana) = ROMAJI_TO_HIRAGANA.get(chunk) {
                out.push_str(kana);
                i += len;
                matched = true;
                break;
            }
        }

        if !matched {
            // Pass the byte through as-is (ASCII-only input by this point).
            out.push(bytes[i] as char);
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kunrei_digraphs_rewrite_to_hepburn() {
        assert_eq!(rewrite_kunrei_to_hepburn("sinbun"), "shinbun");
        assert_eq!(rewrite_kunrei_to_hepburn("tya"), "cha");
        assert_eq!(rewrite_kunrei_to_hepburn("huku"), "fuku");
    }

    #[test]
    fn long_vowels_collapse_in_canonical_form() {
        assert_eq!(canonical_romaji_form("obaasan"), "ob\u{101}san");
        assert_eq!(canonical_romaji_form("toukyou"), "t\u{14d}ky\u{14d}");
    }

    #[test]
    fn canonical_form_is_idempotent() {
        let once = canonical_romaji_form("toukyou desita");
        let twice = canonical_romaji_form(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn converts_taberu_to_hiragana() {
        assert_eq!(romaji_to_hiragana("taberu"), "たべる");
    }

    #[test]
    fn converts_double_consonant_to_small_tsu() {
        assert_eq!(romaji_to_hiragana("gakkou"), "がっこう");
    }

    #[test]
    fn converts_long_vowel_literally_not_as_macron() {
        assert_eq!(romaji_to_hiragana("toukyou"), "とうきょう");
    }

    #[test]
    fn converts_youon() {
        assert_eq!(romaji_to_hiragana("kyabetsu"), "きゃべつ");
    }
}
