//! `SearchService`: the single public entry point (spec.md §4.6).

use jsh_canonical::{canonical_headwords, extract_base, extract_hint, CANONICAL_MAP};
use jsh_db::Catalog;
use jsh_ja::{Route, ScriptDetectionMonitor, ScriptDetectionSnapshot};
use jsh_model::{Entry, ScriptType, SearchResult};
use jsh_rank::{RankRequest, RankingEngine};
use snafu::ResultExt;
use tracing::instrument;

use crate::config::ServiceConfig;
use crate::error::{BadQuery, Configuration as ConfigurationSnafu, Database, Error};

/// Results are truncated to this no matter what the caller asks for
/// (spec.md §4.5/§4.6).
const MAX_RESULTS: usize = 100;

pub struct SearchService {
    catalog: Catalog,
    engine: RankingEngine,
    monitor: ScriptDetectionMonitor,
}

impl SearchService {
    pub async fn connect(config: ServiceConfig) -> Result<Self, Error> {
        let catalog = Catalog::open(&config.database_path).await.context(Database)?;
        Self::with_catalog(catalog, config)
    }

    /// Build a service from an already-open `Catalog`, e.g. one a test
    /// fixture assembled over an in-memory database.
    pub fn with_catalog(catalog: Catalog, config: ServiceConfig) -> Result<Self, Error> {
        let engine = RankingEngine::new(config.ranking).context(ConfigurationSnafu)?;
        let monitor = ScriptDetectionMonitor::new(config.romaji_outlier_threshold);
        Ok(Self { catalog, engine, monitor })
    }

    pub fn diagnostics(&self) -> ScriptDetectionSnapshot {
        self.monitor.snapshot()
    }

    pub async fn fetch_entry(&self, id: i64) -> Result<Option<Entry>, Error> {
        self.catalog.fetch_entry(id).await.context(Database)
    }

    /// Steps 1-7 of spec.md §4.6.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>, Error> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        jsh_ja::check_length(trimmed).context(BadQuery)?;
        let sanitized = jsh_ja::sanitize(trimmed).context(BadQuery)?;
        let script = jsh_ja::detect(&sanitized);
        let normalized = jsh_ja::normalize(&sanitized, script).context(BadQuery)?;
        let limit = (max_results.min(MAX_RESULTS)) as i64;

        let (entries, route, request) = match script {
            ScriptType::LatinForeign => {
                let (entries, request) = self.run_reverse(&normalized.text, script, limit).await?;
                (entries, Route::Reverse, request)
            }
            ScriptType::Romaji => {
                let base = extract_base(&normalized.text).to_lowercase();
                if CANONICAL_MAP.contains(&base) {
                    let (entries, request) = self.run_reverse(&normalized.text, script, limit).await?;
                    (entries, Route::Reverse, request)
                } else {
                    let entries = self
                        .catalog
                        .search_forward(
                            &normalized.text,
                            normalized.kana_form.as_deref(),
                            normalized.romaji_form.as_deref(),
                            limit,
                        )
                        .await
                        .context(Database)?;
                    let request = RankRequest {
                        query: normalized.kana_form.clone().unwrap_or_else(|| normalized.text.clone()),
                        script,
                        is_reverse: false,
                        is_english_reverse: false,
                        canonical_headwords: None,
                        hint: None,
                    };
                    (entries, Route::Forward, request)
                }
            }
            _ => {
                let entries = self
                    .catalog
                    .search_forward(&normalized.text, None, None, limit)
                    .await
                    .context(Database)?;
                let request = RankRequest {
                    query: normalized.text.clone(),
                    script,
                    is_reverse: false,
                    is_english_reverse: false,
                    canonical_headwords: None,
                    hint: None,
                };
                (entries, Route::Forward, request)
            }
        };

        self.monitor.record(script, route, trimmed);

        Ok(self.engine.rank(entries, &request, limit as usize))
    }

    async fn run_reverse(
        &self,
        normalized_text: &str,
        script: ScriptType,
        limit: i64,
    ) -> Result<(Vec<Entry>, RankRequest), Error> {
        let base = extract_base(normalized_text);
        let hint = extract_hint(normalized_text);
        let canonical = canonical_headwords(&base);

        let entries = self
            .catalog
            .search_reverse(&base, limit, true, hint.as_deref(), canonical.as_ref())
            .await
            .context(Database)?;

        let request = RankRequest {
            query: base,
            script,
            is_reverse: true,
            is_english_reverse: true,
            canonical_headwords: canonical,
            hint,
        };
        Ok((entries, request))
    }
}

