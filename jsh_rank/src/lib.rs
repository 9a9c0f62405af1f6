//! The ranking engine: bucketization plus a pluggable, weighted feature
//! set (spec.md §4.5).

mod bucket;
mod config;
mod engine;
mod feature;

pub use bucket::bucketize;
pub use config::{build_from_names, Configuration, Error, FeatureConfig};
pub use engine::{RankRequest, RankingEngine};
pub use feature::Feature;
