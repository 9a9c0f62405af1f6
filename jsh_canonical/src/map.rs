//! Compile-time English -> canonical Japanese headword table (spec.md
//! §4.3). Coverage is deliberately small and curated, not exhaustive;
//! expanding it is future, data-driven work outside this crate.

use std::collections::HashSet;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// `lowercase_english_word -> set<headword>`, built once at first use.
pub struct CanonicalMap {
    entries: HashMap<&'static str, &'static [&'static str]>,
}

lazy_static! {
    pub static ref CANONICAL_MAP: CanonicalMap = CanonicalMap::new();
}

impl CanonicalMap {
    fn new() -> Self {
        let mut entries: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        for (word, headwords) in RAW_ENTRIES {
            entries.insert(word, headwords);
        }
        Self { entries }
    }

    /// O(1) lookup of the canonical headword set for a lowercase English
    /// word, or `None` if it isn't covered.
    pub fn headwords(&self, english: &str) -> Option<HashSet<String>> {
        self.entries
            .get(english.to_lowercase().as_str())
            .map(|words| words.iter().map(|w| w.to_string()).collect())
    }

    /// Whether `english` is covered at all, irrespective of the headword
    /// set's contents. Used by the search service's forward/reverse
    /// disambiguation for romaji queries (spec.md §4.6).
    pub fn contains(&self, english: &str) -> bool {
        self.entries.contains_key(english.to_lowercase().as_str())
    }
}

/// Look up the canonical headword set for an English word.
pub fn canonical_headwords(english: &str) -> Option<HashSet<String>> {
    CANONICAL_MAP.headwords(english)
}

/// ~70 high-frequency English nouns/verbs mapped to their canonical
/// native Japanese headword(s). Loanword/katakana alternatives are
/// deliberately omitted here: they are retrieved by FTS on their own
/// merits and demoted by the `katakana_demotion` ranking feature rather
/// than promoted here.
const RAW_ENTRIES: &[(&str, &[&str])] = &[
    ("star", &["星"]),
    ("go", &["行く"]),
    ("language", &["言語"]),
    ("japanese", &["日本語", "邦文", "日語"]),
    ("water", &["水"]),
    ("fire", &["火"]),
    ("tree", &["木"]),
    ("mountain", &["山"]),
    ("river", &["川"]),
    ("sea", &["海"]),
    ("sky", &["空"]),
    ("rain", &["雨"]),
    ("snow", &["雪"]),
    ("wind", &["風"]),
    ("sun", &["太陽"]),
    ("moon", &["月"]),
    ("earth", &["地球"]),
    ("person", &["人"]),
    ("man", &["男", "男性"]),
    ("woman", &["女", "女性"]),
    ("child", &["子供"]),
    ("friend", &["友達"]),
    ("family", &["家族"]),
    ("house", &["家"]),
    ("school", &["学校"]),
    ("book", &["本"]),
    ("word", &["言葉"]),
    ("name", &["名前"]),
    ("time", &["時間"]),
    ("day", &["日"]),
    ("year", &["年"]),
    ("morning", &["朝"]),
    ("night", &["夜"]),
    ("food", &["食べ物"]),
    ("eat", &["食べる"]),
    ("drink", &["飲む"]),
    ("see", &["見る"]),
    ("hear", &["聞く"]),
    ("speak", &["話す"]),
    ("read", &["読む"]),
    ("write", &["書く"]),
    ("walk", &["歩く"]),
    ("run", &["走る"]),
    ("come", &["来る"]),
    ("buy", &["買う"]),
    ("sell", &["売る"]),
    ("love", &["愛"]),
    ("heart", &["心"]),
    ("hand", &["手"]),
    ("eye", &["目"]),
    ("dog", &["犬"]),
    ("cat", &["猫"]),
    ("bird", &["鳥"]),
    ("fish", &["魚"]),
    ("flower", &["花"]),
    ("color", &["色"]),
    ("red", &["赤"]),
    ("blue", &["青"]),
    ("white", &["白"]),
    ("black", &["黒"]),
    ("big", &["大きい"]),
    ("small", &["小さい"]),
    ("good", &["良い"]),
    ("bad", &["悪い"]),
    ("new", &["新しい"]),
    ("old", &["古い"]),
    ("car", &["車"]),
    ("road", &["道"]),
    ("town", &["町"]),
    ("country", &["国"]),
    ("world", &["世界"]),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn looks_up_known_entries_case_insensitively() {
        let headwords = canonical_headwords("Star").unwrap();
        assert!(headwords.contains("星"));
    }

    #[test]
    fn returns_all_headwords_for_multi_entry_words() {
        let headwords = canonical_headwords("japanese").unwrap();
        assert_eq!(headwords.len(), 3);
        assert!(headwords.contains("日本語"));
    }

    #[test]
    fn unknown_word_is_none() {
        assert!(canonical_headwords("xenomorphic").is_none());
    }

    #[test]
    fn contains_matches_lookup() {
        assert!(CANONICAL_MAP.contains("go"));
        assert!(!CANONICAL_MAP.contains("gogogo"));
    }
}
