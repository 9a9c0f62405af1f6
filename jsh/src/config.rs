//! Top-level service configuration. Construction is the caller's job
//! (spec.md §9: no process-wide singleton); this is the bundle of knobs
//! `SearchService::new` needs.

use jsh_rank::Configuration as RankingConfiguration;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Path (or `sqlite::memory:`-style URI) to the bundled artifact.
    pub database_path: String,
    /// The ranking feature set; `Configuration::default_for_search()`
    /// reproduces spec.md §4.5's documented defaults.
    pub ranking: RankingConfiguration,
    /// Occurrence count a single romaji query must exceed, on the
    /// reverse route, before the diagnostics monitor flags it.
    pub romaji_outlier_threshold: u64,
}

impl ServiceConfig {
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            ranking: RankingConfiguration::default_for_search(),
            romaji_outlier_threshold: 10,
        }
    }
}
