//! `search_forward` (spec.md §4.4): FTS MATCH against the bundled
//! artifact's `lemma`/`reading_kana`/`reading_romaji` columns.
//!
//! The SQL `ORDER BY` here is a coarse, cheap pre-sort used only to pick
//! which rows make it past the DB-layer cap; `jsh_rank` re-sorts the
//! returned entries with the full, configurable feature set and is the
//! authoritative ordering (spec.md §4.5-§4.6).

use jsh_model::Entry;
use sqlx::SqlitePool;

use crate::error::Error;
use crate::retry::retry_once_on_busy;
use crate::rows::{assemble_entries, EntryRow};

/// Candidates fetched per call, independent of the caller's requested
/// `limit`: generous enough that the ranking engine has real choices to
/// make within a bucket, capped so a broad query can't pull the whole
/// table.
const FETCH_CAP: i64 = 200;

fn fts_quote_token(token: &str) -> String {
    format!("{token}*")
}

fn build_match_expression(forms: &[&str]) -> String {
    forms
        .iter()
        .filter(|f| !f.trim().is_empty())
        .map(|form| {
            let tokens: Vec<String> =
                form.split_whitespace().map(fts_quote_token).collect();
            format!("({})", tokens.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// `normalized_query` is the sanitized original text; `kana_form` and
/// `romaji_form` are the romaji normalizer's alternate representations
/// (spec.md §4.2), present only when the detected script was `romaji` or
/// `latin-foreign`.
pub async fn search_forward(
    pool: &SqlitePool,
    normalized_query: &str,
    kana_form: Option<&str>,
    romaji_form: Option<&str>,
    limit: i64,
) -> Result<Vec<Entry>, Error> {
    let mut forms = vec![normalized_query];
    if let Some(kana) = kana_form {
        forms.push(kana);
    }
    if let Some(romaji) = romaji_form {
        forms.push(romaji);
    }
    let match_expr = build_match_expression(&forms);
    if match_expr.is_empty() {
        return Ok(Vec::new());
    }

    let fetch_cap = limit.clamp(1, FETCH_CAP);

    let sql = "SELECT e.id, e.headword, e.reading_hiragana, e.reading_romaji, \
               e.frequency_rank, e.pitch_accent, e.created_at \
               FROM dictionary_fts f \
               JOIN dictionary_entries e ON e.id = f.rowid \
               WHERE dictionary_fts MATCH ?1 \
               ORDER BY \
                 CASE WHEN e.headword = ?2 OR e.reading_hiragana = ?2 THEN 0 ELSE 1 END, \
                 COALESCE(e.frequency_rank, 999999), \
                 e.created_at, \
                 e.id \
               LIMIT ?3";

    let entry_rows: Vec<EntryRow> = retry_once_on_busy(|| {
        sqlx::query_as::<_, EntryRow>(sql)
            .bind(&match_expr)
            .bind(normalized_query)
            .bind(fetch_cap)
            .fetch_all(pool)
    })
    .await
    .map_err(|source| Error::QueryFailed { source })?;

    assemble_entries(pool, entry_rows).await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builds_or_joined_prefix_expression_across_forms() {
        let expr = build_match_expression(&["taberu", "たべる"]);
        assert_eq!(expr, "(taberu*) OR (たべる*)");
    }

    #[test]
    fn multi_token_form_ands_each_token() {
        let expr = build_match_expression(&["日本 語"]);
        assert_eq!(expr, "(日本* 語*)");
    }

    #[test]
    fn empty_forms_are_skipped() {
        let expr = build_match_expression(&["", "food"]);
        assert_eq!(expr, "(food*)");
    }
}
