//! Shared data types for the dictionary query core: the entities loaded
//! from the bundled SQLite artifact, the parsed part-of-speech variant,
//! and the records threaded through search and ranking.

mod entry;
mod pos;
mod result;
mod script;
mod scoring_context;

pub use entry::{Entry, Example, Sense};
pub use pos::{AdjectiveKind, NounKind, PartOfSpeech, VerbKind};
pub use result::{Bucket, GroupType, MatchType, SearchResult};
pub use script::ScriptType;
pub use scoring_context::ScoringContext;
