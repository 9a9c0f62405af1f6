use snafu::Snafu;

/// The `NotReady` / `Corruption` / `QueryFailed` error families from
/// spec.md §7. `NotReady` and `Corruption` are fatal: they are surfaced
/// once at catalog-open time and never retried. `QueryFailed` wraps a
/// per-query SQL failure; the core has already retried once on a
/// transient "database is locked" condition before this is raised.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum Error {
    #[snafu(display("seed database not found at {path}"))]
    SeedDatabaseNotFound { path: String, source: sqlx::Error },

    #[snafu(display("seed database at {path} could not be opened: {source}"))]
    SeedDatabaseNotReadable { path: String, source: sqlx::Error },

    #[snafu(display("invalid catalog configuration: {reason}"))]
    InvalidConfiguration { reason: String },

    #[snafu(display("integrity_check failed: {detail}"))]
    CorruptedDatabase { detail: String },

    #[snafu(display("expected table {table} is missing from the bundled artifact"))]
    SchemaMismatch { table: String },

    #[snafu(display(
        "dictionary_fts has {fts_count} rows but dictionary_entries has {entry_count}"
    ))]
    FtsOutOfSync { fts_count: i64, entry_count: i64 },

    #[snafu(display("unsupported schema version {found}, expected {expected}"))]
    UnsupportedSchemaVersion { found: i64, expected: i64 },

    #[snafu(display("query failed: {source}"))]
    QueryFailed { source: sqlx::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
