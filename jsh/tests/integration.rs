//! End-to-end scenarios from spec.md §8, each against a minimal,
//! purpose-built fixture.

use jsh::{RankingConfiguration, ServiceConfig};
use jsh_db::Catalog;
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;

async fn fixture_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.expect("open in-memory sqlite");
    jsh_db::MIGRATOR.run(&pool).await.expect("run migrations");
    pool
}

async fn insert_entry(
    pool: &SqlitePool,
    id: i64,
    headword: &str,
    hiragana: &str,
    romaji: &str,
    freq: Option<i64>,
    created_at: i64,
) {
    sqlx::query(
        "INSERT INTO dictionary_entries \
         (id, headword, reading_hiragana, reading_romaji, frequency_rank, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(id)
    .bind(headword)
    .bind(hiragana)
    .bind(romaji)
    .bind(freq)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("insert entry");

    sqlx::query("INSERT INTO dictionary_fts (rowid, lemma, reading_kana, reading_romaji) VALUES (?1, ?2, ?3, ?4)")
        .bind(id)
        .bind(headword)
        .bind(hiragana)
        .bind(romaji)
        .execute(pool)
        .await
        .expect("insert fts row");
}

async fn insert_sense(pool: &SqlitePool, id: i64, entry_id: i64, definition_english: &str, pos: &str, order: i64) {
    sqlx::query(
        "INSERT INTO word_senses (id, entry_id, definition_english, part_of_speech, sense_order) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(id)
    .bind(entry_id)
    .bind(definition_english)
    .bind(pos)
    .bind(order)
    .execute(pool)
    .await
    .expect("insert sense");
}

async fn service(pool: SqlitePool) -> jsh::SearchService {
    let catalog = Catalog::from_pool(pool).await.expect("verify fixture catalog");
    jsh::SearchService::with_catalog(
        catalog,
        ServiceConfig { ranking: RankingConfiguration::default_for_search(), ..ServiceConfig::new("unused") },
    )
    .expect("build search service")
}

#[tokio::test]
async fn scenario_1_kanji_forward_search() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "食", "しょく", "shoku", Some(3000), 0).await;
    insert_entry(&pool, 2, "食べる", "たべる", "taberu", Some(500), 0).await;
    insert_entry(&pool, 3, "食べ物", "たべもの", "tabemono", Some(2000), 0).await;
    let service = service(pool).await;

    let results = service.search("食", 20).await.expect("search succeeds");
    assert!(!results.is_empty());
    for result in &results {
        assert!(result.entry.headword.contains('食'));
    }
    assert_eq!(results[0].entry.headword, "食");
    assert_eq!(results[0].bucket, jsh_model::Bucket::A);
}

#[tokio::test]
async fn scenario_2_hiragana_exact_reading_is_bucket_a() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "食べる", "たべる", "taberu", Some(500), 0).await;
    let service = service(pool).await;

    let results = service.search("たべる", 20).await.expect("search succeeds");
    assert!(results.iter().any(|r| r.entry.reading_hiragana == "たべる"));
    assert_eq!(results[0].bucket, jsh_model::Bucket::A);
}

#[tokio::test]
async fn scenario_3_romaji_normalizes_to_same_top_entry_as_hiragana() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "食べる", "たべる", "taberu", Some(500), 0).await;
    let service = service(pool).await;

    let hiragana_results = service.search("たべる", 20).await.expect("search succeeds");
    let romaji_results = service.search("taberu", 20).await.expect("search succeeds");
    assert_eq!(romaji_results[0].entry.id, hiragana_results[0].entry.id);
}

#[tokio::test]
async fn scenario_4_reverse_native_outranks_katakana_loanword() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "星", "ほし", "hoshi", Some(800), 0).await;
    insert_sense(&pool, 1, 1, "a star in the night sky", "noun (common) (futsuumeishi)", 0).await;
    insert_entry(&pool, 2, "スター", "すたー", "sutaa", Some(1500), 0).await;
    insert_sense(&pool, 2, 2, "a star (celebrity, loanword)", "noun (common) (futsuumeishi)", 0).await;
    insert_entry(&pool, 3, "えとわーる", "えとわーる", "etowaaru", None, 0).await;
    insert_sense(&pool, 3, 3, "star (from French etoile)", "noun (common) (futsuumeishi)", 0).await;
    let service = service(pool).await;

    let results = service.search("star", 20).await.expect("search succeeds");
    assert_eq!(results[0].entry.headword, "星");
    assert!(results.iter().any(|r| r.entry.headword == "スター"));
}

#[tokio::test]
async fn scenario_5_reverse_verb_outranks_homographic_noun() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "行く", "いく", "iku", Some(100), 0).await;
    insert_sense(&pool, 1, 1, "to go; to move", "godan verb,intransitive", 0).await;
    insert_entry(&pool, 2, "囲碁", "いご", "igo", Some(5000), 0).await;
    insert_sense(&pool, 2, 2, "the board game of go", "noun (common) (futsuumeishi)", 0).await;
    let service = service(pool).await;

    let results = service.search("go", 20).await.expect("search succeeds");
    assert_eq!(results[0].entry.headword, "行く");
}

#[tokio::test]
async fn scenario_6_reverse_parenthetical_hint_breaks_canonical_tie() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "言語", "げんご", "gengo", Some(1000), 0).await;
    insert_sense(&pool, 1, 1, "language; speech", "noun (common) (futsuumeishi)", 0).await;
    insert_entry(&pool, 2, "ランゲージ", "らんげーじ", "rangeeji", Some(8000), 0).await;
    insert_sense(&pool, 2, 2, "language (loanword)", "noun (common) (futsuumeishi)", 0).await;
    let service = service(pool).await;

    let results = service.search("language", 20).await.expect("search succeeds");
    assert_eq!(results[0].entry.headword, "言語");

    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "日本語", "にほんご", "nihongo", Some(200), 0).await;
    insert_sense(&pool, 1, 1, "the Japanese language", "noun (common) (futsuumeishi)", 0).await;
    insert_entry(&pool, 2, "邦文", "ほうぶん", "houbun", Some(9000), 0).await;
    insert_sense(&pool, 2, 2, "Japanese writing", "noun (common) (futsuumeishi)", 0).await;
    insert_entry(&pool, 3, "日語", "にちご", "nichigo", Some(9500), 0).await;
    insert_sense(&pool, 3, 3, "Japanese (colloquial)", "noun (common) (futsuumeishi)", 0).await;
    let service = service(pool).await;

    let results = service.search("japanese (language)", 20).await.expect("search succeeds");
    assert_eq!(results[0].entry.headword, "日本語");
}

#[tokio::test]
async fn scenario_7_sql_injection_guard_does_not_corrupt_later_searches() {
    let pool = fixture_pool().await;
    insert_entry(&pool, 1, "食", "しょく", "shoku", Some(3000), 0).await;
    let service = service(pool).await;

    let injected = service.search("'; DROP TABLE dictionary_entries; --", 20).await;
    assert!(injected.is_ok());

    let results = service.search("食", 20).await.expect("search still succeeds after injection attempt");
    assert!(!results.is_empty());
}
