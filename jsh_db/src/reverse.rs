//! `search_reverse` (spec.md §4.4): foreign-gloss -> headword search,
//! joining `word_senses`' definition columns against a LIKE clause.
//!
//! As with [`crate::forward::search_forward`], the SQL `ORDER BY` here
//! is a coarse pre-sort; `jsh_rank` applies the full feature set
//! (including `pos_weight` and `parenthetical_hint`, which need the
//! parsed `PartOfSpeech` and sense text that only exist in-process) and
//! is the authoritative ordering.

use std::collections::HashSet;

use jsh_model::Entry;
use sqlx::SqlitePool;

use crate::error::Error;
use crate::retry::retry_once_on_busy;
use crate::rows::{assemble_entries, placeholder_list, EntryRow};

const FETCH_CAP: i64 = 200;

/// Escape `%` and `_` so a user-supplied gloss can't widen its own LIKE
/// pattern; the value is still always bound as a parameter, never
/// interpolated into SQL text.
fn escape_like(value: &str) -> String {
    value.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// `base` is the query with any parenthetical hint already stripped
/// (`jsh_canonical::extract_base`); `hint`, if present, is the lowercased
/// parenthetical content; `canonical` is the headword set returned by
/// `jsh_canonical::canonical_headwords(base)`, if any.
pub async fn search_reverse(
    pool: &SqlitePool,
    base: &str,
    limit: i64,
    is_english: bool,
    hint: Option<&str>,
    canonical: Option<&HashSet<String>>,
) -> Result<Vec<Entry>, Error> {
    if base.trim().is_empty() {
        return Ok(Vec::new());
    }

    let fetch_cap = limit.clamp(1, FETCH_CAP);
    let like_pattern = format!("%{}%", escape_like(base));

    let gloss_clause = if is_english {
        "s.definition_english LIKE ?1 ESCAPE '\\'".to_string()
    } else {
        "(s.definition_chinese_simplified LIKE ?1 ESCAPE '\\' \
          OR s.definition_chinese_traditional LIKE ?1 ESCAPE '\\')"
            .to_string()
    };

    let canonical_list: Vec<String> = canonical.map(|set| set.iter().cloned().collect()).unwrap_or_default();
    let canonical_clause = if canonical_list.is_empty() {
        "1".to_string()
    } else {
        format!("CASE WHEN e.headword IN ({}) THEN 0 ELSE 1 END", placeholder_list(canonical_list.len()))
    };

    let hint_pattern = hint.map(|h| format!("%{}%", escape_like(h)));
    let hint_clause = if hint_pattern.is_some() {
        "CASE WHEN EXISTS (SELECT 1 FROM word_senses hs WHERE hs.entry_id = e.id \
          AND hs.definition_english LIKE ? ESCAPE '\\') THEN 0 ELSE 1 END"
            .to_string()
    } else {
        "0".to_string()
    };

    let sql = format!(
        "SELECT DISTINCT e.id, e.headword, e.reading_hiragana, e.reading_romaji, \
         e.frequency_rank, e.pitch_accent, e.created_at \
         FROM word_senses s \
         JOIN dictionary_entries e ON e.id = s.entry_id \
         WHERE {gloss_clause} \
         ORDER BY \
           {canonical_clause}, \
           {hint_clause}, \
           CASE WHEN e.frequency_rank <= 5000 THEN 0 ELSE 1 END, \
           CASE WHEN e.headword GLOB '[ァ-ヶー]*' THEN 1 ELSE 0 END, \
           COALESCE(e.frequency_rank, 999999), \
           e.created_at, \
           e.id \
         LIMIT {fetch_cap}"
    );

    let entry_rows: Vec<EntryRow> = retry_once_on_busy(|| {
        let mut query = sqlx::query_as::<_, EntryRow>(&sql).bind(&like_pattern);
        for headword in &canonical_list {
            query = query.bind(headword);
        }
        if let Some(pattern) = &hint_pattern {
            query = query.bind(pattern);
        }
        query.fetch_all(pool)
    })
    .await
    .map_err(|source| Error::QueryFailed { source })?;

    assemble_entries(pool, entry_rows).await
}
