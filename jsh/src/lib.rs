//! The query core of an offline Japanese<->multilingual dictionary
//! (spec.md §1): script detection, normalization, FTS retrieval, and
//! deterministic ranking behind a single `SearchService::search` call.

mod config;
mod error;
mod service;

pub use config::ServiceConfig;
pub use error::Error;
pub use service::SearchService;

pub use jsh_db::Catalog;
pub use jsh_ja::ScriptDetectionSnapshot;
pub use jsh_model::{Entry, Example, SearchResult, Sense};
pub use jsh_rank::Configuration as RankingConfiguration;
