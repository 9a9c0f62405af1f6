//! `Catalog`: the process-wide, read-only database handle (spec.md §3,
//! §5, §9). Explicit and caller-owned rather than a singleton -- the
//! outer binary decides how to construct and share it.

use std::collections::HashSet;

use jsh_model::Entry;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::error::Error;
use crate::schema::{connect_read_only, require_nonempty_path, verify};
use crate::{fetch, forward, reverse};

/// A verified, read-only handle onto the bundled SQLite artifact. Cheap
/// to clone (the pool is reference-counted); intended to be opened once
/// and shared for the process lifetime.
#[derive(Clone)]
pub struct Catalog {
    pool: SqlitePool,
}

impl Catalog {
    /// Open the artifact at `database_path`, apply the read-only
    /// PRAGMAs, and run every verification spec.md §4.4 requires. Fails
    /// fast and fatally: see [`crate::Error`]'s `NotReady`/`Corruption`
    /// variants.
    #[instrument]
    pub async fn open(database_path: &str) -> Result<Self, Error> {
        require_nonempty_path(database_path)?;
        let pool = connect_read_only(database_path).await?;
        verify(&pool).await?;
        Ok(Self { pool })
    }

    /// Wrap an already-connected, already-migrated pool without running
    /// `connect_read_only`'s PRAGMA setup -- used by test fixtures that
    /// build an in-memory database and then hand it to `Catalog` for
    /// verification and querying. Still runs the same [`verify`] checks.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, Error> {
        verify(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn search_forward(
        &self,
        normalized_query: &str,
        kana_form: Option<&str>,
        romaji_form: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Entry>, Error> {
        forward::search_forward(&self.pool, normalized_query, kana_form, romaji_form, limit).await
    }

    pub async fn search_reverse(
        &self,
        base: &str,
        limit: i64,
        is_english: bool,
        hint: Option<&str>,
        canonical: Option<&HashSet<String>>,
    ) -> Result<Vec<Entry>, Error> {
        reverse::search_reverse(&self.pool, base, limit, is_english, hint, canonical).await
    }

    pub async fn fetch_entry(&self, id: i64) -> Result<Option<Entry>, Error> {
        fetch::fetch_entry(&self.pool, id).await
    }
}
