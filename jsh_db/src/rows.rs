//! Row <-> model assembly. Optional columns are parsed once here, as a
//! default value rather than an alternate code path (spec.md §9).

use std::collections::HashMap;

use jsh_model::{Entry, Example, PartOfSpeech, Sense};
use sqlx::{FromRow, SqlitePool};

use crate::error::Error;

#[derive(Debug, FromRow)]
pub(crate) struct EntryRow {
    pub id: i64,
    pub headword: String,
    pub reading_hiragana: String,
    pub reading_romaji: String,
    pub frequency_rank: Option<i64>,
    pub pitch_accent: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, FromRow)]
pub(crate) struct SenseRow {
    pub id: i64,
    pub entry_id: i64,
    pub definition_english: String,
    pub definition_chinese_simplified: Option<String>,
    pub definition_chinese_traditional: Option<String>,
    pub part_of_speech: String,
    pub usage_notes: Option<String>,
    pub sense_order: i64,
}

#[derive(Debug, FromRow)]
pub(crate) struct ExampleRow {
    pub id: i64,
    pub sense_id: i64,
    pub japanese_text: String,
    pub english_translation: String,
    pub chinese_translation: Option<String>,
    pub example_order: i64,
}

impl From<SenseRow> for Sense {
    fn from(row: SenseRow) -> Self {
        Sense {
            id: row.id,
            entry_id: row.entry_id,
            definition_english: row.definition_english,
            definition_chinese_simplified: row.definition_chinese_simplified,
            definition_chinese_traditional: row.definition_chinese_traditional,
            part_of_speech: PartOfSpeech::parse(&row.part_of_speech),
            part_of_speech_raw: row.part_of_speech,
            usage_notes: row.usage_notes,
            sense_order: row.sense_order,
            examples: Vec::new(),
        }
    }
}

impl From<ExampleRow> for Example {
    fn from(row: ExampleRow) -> Self {
        Example {
            id: row.id,
            sense_id: row.sense_id,
            japanese_text: row.japanese_text,
            english_translation: row.english_translation,
            chinese_translation: row.chinese_translation,
            example_order: row.example_order,
        }
    }
}

impl EntryRow {
    fn into_entry(self, senses: Vec<Sense>) -> Entry {
        Entry {
            id: self.id,
            headword: self.headword,
            reading_hiragana: self.reading_hiragana,
            reading_romaji: self.reading_romaji,
            frequency_rank: self.frequency_rank,
            pitch_accent: self.pitch_accent,
            created_at: self.created_at,
            senses,
        }
    }
}

/// Materialize full `Entry` values (senses sorted by `sense_order`,
/// examples sorted by `example_order`) for a set of entry rows,
/// preserving `entry_rows`' order. Three round trips total regardless of
/// how many entries are requested: entries are already in hand, one
/// query each for senses and examples keyed by the entries' ids.
pub(crate) async fn assemble_entries(
    pool: &SqlitePool,
    entry_rows: Vec<EntryRow>,
) -> Result<Vec<Entry>, Error> {
    if entry_rows.is_empty() {
        return Ok(Vec::new());
    }

    let entry_ids: Vec<i64> = entry_rows.iter().map(|r| r.id).collect();
    let placeholders = placeholder_list(entry_ids.len());

    let sense_sql = format!(
        "SELECT id, entry_id, definition_english, definition_chinese_simplified, \
         definition_chinese_traditional, part_of_speech, usage_notes, sense_order \
         FROM word_senses WHERE entry_id IN ({placeholders}) ORDER BY entry_id, sense_order"
    );
    let mut query = sqlx::query_as::<_, SenseRow>(&sense_sql);
    for id in &entry_ids {
        query = query.bind(id);
    }
    let sense_rows = query.fetch_all(pool).await.map_err(|source| Error::QueryFailed { source })?;

    let sense_ids: Vec<i64> = sense_rows.iter().map(|r| r.id).collect();
    let mut examples_by_sense: HashMap<i64, Vec<Example>> = HashMap::new();
    if !sense_ids.is_empty() {
        let ph = placeholder_list(sense_ids.len());
        let example_sql = format!(
            "SELECT id, sense_id, japanese_text, english_translation, chinese_translation, \
             example_order FROM example_sentences WHERE sense_id IN ({ph}) \
             ORDER BY sense_id, example_order"
        );
        let mut query = sqlx::query_as::<_, ExampleRow>(&example_sql);
        for id in &sense_ids {
            query = query.bind(id);
        }
        let example_rows =
            query.fetch_all(pool).await.map_err(|source| Error::QueryFailed { source })?;
        for row in example_rows {
            examples_by_sense.entry(row.sense_id).or_default().push(row.into());
        }
    }

    let mut senses_by_entry: HashMap<i64, Vec<Sense>> = HashMap::new();
    for row in sense_rows {
        let sense_id = row.id;
        let mut sense: Sense = row.into();
        sense.examples = examples_by_sense.remove(&sense_id).unwrap_or_default();
        senses_by_entry.entry(sense.entry_id).or_default().push(sense);
    }

    Ok(entry_rows
        .into_iter()
        .map(|row| {
            let senses = senses_by_entry.remove(&row.id).unwrap_or_default();
            row.into_entry(senses)
        })
        .collect())
}

pub(crate) fn placeholder_list(n: usize) -> String {
    std::iter::repeat("?").take(n).collect::<Vec<_>>().join(", ")
}
