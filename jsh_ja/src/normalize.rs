//! Query Normalizer (spec.md §4.2).

use jsh_model::ScriptType;

use crate::error::Error;
use crate::romaji::{canonical_romaji_form, romaji_to_hiragana};

const MAX_QUERY_LEN: usize = 100;

/// The outcome of normalizing a non-empty, already-length-checked query.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// The sanitized query, suitable for building an FTS MATCH expression.
    pub text: String,
    /// Present only when `script` is `Romaji`: the same query converted
    /// to hiragana, for matching against `reading_kana`.
    pub kana_form: Option<String>,
    /// Present only when `script` is `Romaji`: the canonical matching
    /// form (Hepburn, long vowels collapsed), for matching against
    /// `reading_romaji`.
    pub romaji_form: Option<String>,
}

/// Reject queries over the 100-code-point limit. Checked before any
/// other work, per spec.md §7 (`BadQuery` is returned synchronously
/// before database access).
pub fn check_length(query: &str) -> Result<(), Error> {
    let len = query.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(Error::QueryTooLong { len });
    }
    Ok(())
}

/// Strip every character outside the permitted set: CJK, kana, ASCII
/// letters/digits, `(`, `)`, hyphen, apostrophe, whitespace.
fn strip_disallowed(query: &str) -> String {
    query
        .chars()
        .filter(|&c| {
            c.is_whitespace()
                || c.is_ascii_alphanumeric()
                || matches!(c, '(' | ')' | '-' | '\'')
                || crate::chars::is_hiragana(c)
                || crate::chars::is_katakana(c)
                || crate::chars::is_kanji(c)
        })
        .collect()
}

/// Escape/remove FTS5 meta-characters so the normalized text can be
/// embedded in a MATCH expression without being interpreted as FTS5
/// query syntax: `"`, `*`, `:`, and `-` when it sits at a token boundary
/// (leading a token, where FTS5 reads it as a column-exclusion prefix).
pub fn escape_fts_meta_characters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_token_boundary = true;
    for c in text.chars() {
        match c {
            '"' | '*' | ':' => continue,
            '-' if at_token_boundary => continue,
            _ => {}
        }
        out.push(c);
        at_token_boundary = c.is_whitespace();
    }
    out
}

/// Sanitize step (spec.md §4.2 step 3): strip disallowed characters,
/// escape FTS5 meta-characters, and trim. Script detection (step 4) runs
/// on this sanitized text, not the raw query. Returns `InvalidCharacters`
/// if nothing survives.
pub fn sanitize(query: &str) -> Result<String, Error> {
    let stripped = strip_disallowed(query);
    let escaped = escape_fts_meta_characters(&stripped);
    let trimmed = escaped.trim().to_string();

    if trimmed.is_empty() {
        return Err(Error::InvalidCharacters);
    }

    Ok(trimmed)
}

/// Run the normalizer's sanitize + script-dependent transliteration
/// steps over an already length-checked, non-empty query. `script` must
/// have been detected from the sanitized text (see [`sanitize`]), per
/// spec.md §4.2/§4.6's step order.
pub fn normalize(query: &str, script: ScriptType) -> Result<Normalized, Error> {
    let trimmed = sanitize(query)?;

    let (kana_form, romaji_form) = match script {
        ScriptType::Romaji | ScriptType::LatinForeign => (
            Some(romaji_to_hiragana(&trimmed)),
            Some(canonical_romaji_form(&trimmed)),
        ),
        _ => (None, None),
    };

    Ok(Normalized {
        text: trimmed,
        kana_form,
        romaji_form,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rejects_queries_over_100_code_points() {
        let q: String = std::iter::repeat('あ').take(101).collect();
        assert_eq!(check_length(&q), Err(Error::QueryTooLong { len: 101 }));
    }

    #[test]
    fn accepts_queries_at_the_limit() {
        let q: String = std::iter::repeat('あ').take(100).collect();
        assert_eq!(check_length(&q), Ok(()));
    }

    #[test]
    fn strips_meta_characters_used_for_sql_injection_attempts() {
        let result = normalize("'; DROP TABLE dictionary_entries; --", ScriptType::Mixed);
        let normalized = result.unwrap();
        assert!(!normalized.text.contains('"'));
        assert!(!normalized.text.contains('*'));
        assert!(!normalized.text.contains(':'));
        // the apostrophe is a permitted character (used in e.g. "don't");
        // what matters for injection-safety is that the value is always
        // bound as a parameter, never interpolated into SQL text.
    }

    #[test]
    fn empty_after_sanitize_is_invalid_characters() {
        let result = normalize("@@@###", ScriptType::Mixed);
        assert_eq!(result.unwrap_err(), Error::InvalidCharacters);
    }

    #[test]
    fn romaji_query_gets_kana_and_romaji_forms() {
        let normalized = normalize("taberu", ScriptType::Romaji).unwrap();
        assert_eq!(normalized.kana_form.as_deref(), Some("たべる"));
        assert_eq!(normalized.romaji_form.as_deref(), Some("taberu"));
    }

    #[test]
    fn non_romaji_query_has_no_transliteration_forms() {
        let normalized = normalize("食", ScriptType::Kanji).unwrap();
        assert_eq!(normalized.kana_form, None);
        assert_eq!(normalized.romaji_form, None);
    }
}
