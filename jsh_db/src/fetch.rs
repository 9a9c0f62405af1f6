//! `fetch_entry` (spec.md §4.4): a single entry with all of its senses
//! and examples, fully materialized.

use jsh_model::Entry;
use sqlx::SqlitePool;

use crate::error::Error;
use crate::retry::retry_once_on_busy;
use crate::rows::{assemble_entries, EntryRow};

pub async fn fetch_entry(pool: &SqlitePool, id: i64) -> Result<Option<Entry>, Error> {
    let row: Option<EntryRow> = retry_once_on_busy(|| {
        sqlx::query_as::<_, EntryRow>(
            "SELECT id, headword, reading_hiragana, reading_romaji, frequency_rank, \
             pitch_accent, created_at FROM dictionary_entries WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
    })
    .await
    .map_err(|source| Error::QueryFailed { source })?;

    let Some(row) = row else {
        return Ok(None);
    };

    let entries = assemble_entries(pool, vec![row]).await?;
    Ok(entries.into_iter().next())
}
