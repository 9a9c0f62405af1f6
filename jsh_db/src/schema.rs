//! Catalog open/verify: the PRAGMAs and integrity checks from spec.md
//! §4.4 run once, at process start, before any query is served.

use std::str::FromStr;

use snafu::ResultExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::{info, instrument};

use crate::error::{
    CorruptedDatabase, Error, FtsOutOfSync, InvalidConfiguration, SchemaMismatch,
    SeedDatabaseNotFound, SeedDatabaseNotReadable, UnsupportedSchemaVersion,
};

/// Bumped whenever the on-disk schema changes in a way existing readers
/// can't tolerate. Stored in `PRAGMA user_version` by the bundling
/// pipeline (out of scope here; see spec.md §1).
pub const SCHEMA_VERSION: i64 = 1;

const REQUIRED_TABLES: &[&str] = &[
    "dictionary_entries",
    "dictionary_fts",
    "word_senses",
    "example_sentences",
];

/// Open the bundled artifact read-only, with the PRAGMAs spec.md §4.4
/// requires. Does not run migrations or verify the schema -- that is
/// [`verify`]'s job, called once by `Catalog::open`.
#[instrument]
pub async fn connect_read_only(database_path: &str) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(database_path)
        .context(SeedDatabaseNotFound { path: database_path.to_string() })?
        .read_only(true)
        .pragma("query_only", "ON")
        .pragma("temp_store", "MEMORY")
        .pragma("cache_size", "-8000")
        .pragma("mmap_size", "268435456");

    SqlitePoolOptions::new()
        .max_connections(8)
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .context(SeedDatabaseNotReadable { path: database_path.to_string() })
}

/// Verify an opened pool against the invariants spec.md §4.4 and §3
/// require: `integrity_check = ok`, presence of every required table,
/// the FTS row count matching the entry row count, and a known schema
/// version. Any failure here is fatal and non-retryable.
#[instrument(skip(pool))]
pub async fn verify(pool: &SqlitePool) -> Result<(), Error> {
    let integrity: String = sqlx::query_scalar("PRAGMA integrity_check")
        .fetch_one(pool)
        .await
        .map_err(|source| Error::QueryFailed { source })?;
    if integrity != "ok" {
        return Err(Error::CorruptedDatabase { detail: integrity });
    }

    let present: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type IN ('table', 'view')")
            .fetch_all(pool)
            .await
            .map_err(|source| Error::QueryFailed { source })?;
    for table in REQUIRED_TABLES {
        if !present.iter().any(|name| name == table) {
            return Err(Error::SchemaMismatch { table: table.to_string() });
        }
    }

    let entry_count: i64 = sqlx::query_scalar("SELECT count(*) FROM dictionary_entries")
        .fetch_one(pool)
        .await
        .map_err(|source| Error::QueryFailed { source })?;
    let fts_count: i64 = sqlx::query_scalar("SELECT count(*) FROM dictionary_fts")
        .fetch_one(pool)
        .await
        .map_err(|source| Error::QueryFailed { source })?;
    if entry_count != fts_count {
        return Err(Error::FtsOutOfSync { fts_count, entry_count });
    }

    let version_row = sqlx::query("PRAGMA user_version")
        .fetch_one(pool)
        .await
        .map_err(|source| Error::QueryFailed { source })?;
    let version: i64 = version_row.try_get(0).map_err(|source| Error::QueryFailed { source })?;
    if version != SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion { found: version, expected: SCHEMA_VERSION });
    }

    info!(entry_count, "catalog verified");
    Ok(())
}

/// Reject a blank database path before ever touching sqlx; surfaced as
/// `InvalidConfiguration`, the one `NotReady` variant that never reaches
/// the SQL layer at all.
pub fn require_nonempty_path(database_path: &str) -> Result<(), Error> {
    if database_path.trim().is_empty() {
        return InvalidConfiguration { reason: "database path is empty".to_string() }.fail();
    }
    Ok(())
}
