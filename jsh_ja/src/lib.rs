//! Japanese text handling: script detection, query normalization, and
//! romaji transliteration (spec.md §4.1, §4.2).

mod chars;
mod error;
mod monitor;
mod normalize;
mod romaji;
mod script;

pub use error::Error;
pub use monitor::{RomajiOutlier, Route, ScriptDetectionMonitor, ScriptDetectionSnapshot};
pub use normalize::{check_length, escape_fts_meta_characters, normalize, sanitize, Normalized};
pub use romaji::{canonical_romaji_form, rewrite_kunrei_to_hepburn, romaji_to_hiragana};
pub use script::detect;
