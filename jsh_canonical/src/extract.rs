//! `base (hint)` query splitting (spec.md §4.3).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARENTHETICAL: Regex = Regex::new(r"\s*\(([^)]*)\)\s*").expect("valid regex");
}

/// Strip every `(...)` group (and the whitespace around it) from `q`,
/// trimming the result. `"japanese (language)"` -> `"japanese"`.
pub fn extract_base(q: &str) -> String {
    PARENTHETICAL.replace_all(q, " ").trim().to_string()
}

/// The first parenthetical's contents, lowercased and trimmed, or
/// `None` if `q` has none. `"japanese (language)"` -> `Some("language")`.
pub fn extract_hint(q: &str) -> Option<String> {
    PARENTHETICAL.captures(q).map(|caps| caps[1].trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extracts_base_without_parenthetical() {
        assert_eq!(extract_base("japanese (language)"), "japanese");
    }

    #[test]
    fn extracts_hint_lowercased_and_trimmed() {
        assert_eq!(
            extract_hint("japanese (Language)"),
            Some("language".to_string())
        );
    }

    #[test]
    fn no_parenthetical_yields_none_hint_and_unchanged_base() {
        assert_eq!(extract_base("star"), "star");
        assert_eq!(extract_hint("star"), None);
    }

    #[test]
    fn strips_multiple_parentheticals() {
        assert_eq!(extract_base("go (verb) (to move)"), "go");
    }
}
