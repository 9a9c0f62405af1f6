//! Character-class predicates used by script detection and normalization.
//!
//! Grounded on the teacher's own kana-range tables (`HIRA_START`/`KATA_START`
//! and the `KANJI_REGEX`/`ALL_JA_REGEX` pair) generalized to also recognize
//! halfwidth katakana, since spec.md §4.1 explicitly folds that into the
//! katakana class.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref KANJI_REGEX: Regex =
        Regex::new(r"\p{Unified_Ideograph}").expect("failed to build kanji regex");
}

pub const HIRA_START: char = '\u{3041}';
pub const HIRA_END: char = '\u{309F}';
pub const KATA_START: char = '\u{30A0}';
pub const KATA_END: char = '\u{30FF}';
pub const KATA_PHONETIC_EXT_START: char = '\u{31F0}';
pub const KATA_PHONETIC_EXT_END: char = '\u{31FF}';
pub const HALFWIDTH_KATA_START: char = '\u{FF65}';
pub const HALFWIDTH_KATA_END: char = '\u{FF9F}';

#[inline]
pub fn is_hiragana(c: char) -> bool {
    (HIRA_START..=HIRA_END).contains(&c)
}

#[inline]
pub fn is_katakana(c: char) -> bool {
    (KATA_START..=KATA_END).contains(&c)
        || (KATA_PHONETIC_EXT_START..=KATA_PHONETIC_EXT_END).contains(&c)
        || (HALFWIDTH_KATA_START..=HALFWIDTH_KATA_END).contains(&c)
}

#[inline]
pub fn is_kanji(c: char) -> bool {
    // Most kanji are 3 bytes long in UTF-8, but not all (e.g. U+27614 𧘔).
    let mut buf = [0; 4];
    let s = c.encode_utf8(&mut buf);
    KANJI_REGEX.is_match(s)
}

#[inline]
pub fn is_ascii_letter_extended(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-' || c == '\''
}

#[inline]
pub fn is_ascii_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'i' | 'u' | 'e' | 'o')
}
