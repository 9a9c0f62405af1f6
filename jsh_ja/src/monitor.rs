//! Script-detection diagnostics monitor (spec.md §4.1, §6).
//!
//! "An adjacent monitor records `(script, route)` counters and flags
//! 'romaji -> reverse-search' decisions above a configurable threshold
//! for QA." Process-wide, write-serialized behind a `Mutex`, read out as
//! a canonically-ordered snapshot for logging/export.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;
use jsh_model::ScriptType;
use serde::Serialize;

/// Which half of a search a `(script, route)` counter observation came
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Route {
    Forward,
    Reverse,
}

impl Route {
    fn as_str(&self) -> &'static str {
        match self {
            Route::Forward => "forward",
            Route::Reverse => "reverse",
        }
    }
}

fn script_key(script: ScriptType) -> &'static str {
    match script {
        ScriptType::Hiragana => "hiragana",
        ScriptType::Katakana => "katakana",
        ScriptType::Kanji => "kanji",
        ScriptType::Mixed => "mixed",
        ScriptType::Romaji => "romaji",
        ScriptType::LatinForeign => "latin-foreign",
    }
}

/// A single query that crossed the romaji-reverse-search outlier
/// threshold, flagged for QA review.
#[derive(Debug, Clone, Serialize)]
pub struct RomajiOutlier {
    pub query: String,
    pub route: String,
    pub occurrences: u64,
    pub timestamp: i64,
}

/// Canonical, serializable snapshot of accumulated monitor state.
/// `counts` is a `BTreeMap` so `serde_json::to_string` always emits keys
/// in sorted order, matching spec.md §6's "canonical JSON" requirement.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptDetectionSnapshot {
    pub counts: BTreeMap<String, u64>,
    pub romaji_outliers: Vec<RomajiOutlier>,
}

struct State {
    counts: BTreeMap<String, u64>,
    romaji_reverse_counts: BTreeMap<String, u64>,
    outliers: Vec<RomajiOutlier>,
}

/// Process-wide `(script, route)` counter and romaji-reverse-search
/// outlier tracker. Every mutating method serializes through a single
/// `Mutex`; reads take a fresh lock and clone out a snapshot.
pub struct ScriptDetectionMonitor {
    state: Mutex<State>,
    outlier_threshold: u64,
}

impl ScriptDetectionMonitor {
    /// `outlier_threshold` is the occurrence count a single romaji query
    /// must exceed, on the reverse route, before it is flagged.
    pub fn new(outlier_threshold: u64) -> Self {
        Self {
            state: Mutex::new(State {
                counts: BTreeMap::new(),
                romaji_reverse_counts: BTreeMap::new(),
                outliers: Vec::new(),
            }),
            outlier_threshold,
        }
    }

    /// Record one `(script, route)` observation, and -- if this is a
    /// romaji query taking the reverse route -- bump its per-query
    /// counter, flagging it as an outlier the first time it crosses
    /// `outlier_threshold`.
    pub fn record(&self, script: ScriptType, route: Route, query: &str) {
        let mut state = self.state.lock().expect("monitor mutex poisoned");
        let key = format!("{}:{}", script_key(script), route.as_str());
        *state.counts.entry(key).or_insert(0) += 1;

        if script != ScriptType::Romaji || route != Route::Reverse {
            return;
        }

        let occurrences = {
            let entry = state.romaji_reverse_counts.entry(query.to_string()).or_insert(0);
            *entry += 1;
            *entry
        };

        if occurrences == self.outlier_threshold + 1 {
            state.outliers.push(RomajiOutlier {
                query: query.to_string(),
                route: route.as_str().to_string(),
                occurrences,
                timestamp: Utc::now().timestamp(),
            });
        }
    }

    /// Take a point-in-time, canonically-ordered copy of the current
    /// state.
    pub fn snapshot(&self) -> ScriptDetectionSnapshot {
        let state = self.state.lock().expect("monitor mutex poisoned");
        ScriptDetectionSnapshot {
            counts: state.counts.clone(),
            romaji_outliers: state.outliers.clone(),
        }
    }
}

impl Default for ScriptDetectionMonitor {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_bucket_by_script_and_route() {
        let monitor = ScriptDetectionMonitor::new(10);
        monitor.record(ScriptType::Hiragana, Route::Forward, "たべる");
        monitor.record(ScriptType::Hiragana, Route::Forward, "のむ");
        monitor.record(ScriptType::Kanji, Route::Reverse, "食");

        let snapshot = monitor.snapshot();
        assert_eq!(snapshot.counts.get("hiragana:forward"), Some(&2));
        assert_eq!(snapshot.counts.get("kanji:reverse"), Some(&1));
    }

    #[test]
    fn flags_romaji_reverse_outlier_past_threshold() {
        let monitor = ScriptDetectionMonitor::new(2);
        for _ in 0..2 {
            monitor.record(ScriptType::Romaji, Route::Reverse, "neko");
        }
        assert!(monitor.snapshot().romaji_outliers.is_empty());

        monitor.record(ScriptType::Romaji, Route::Reverse, "neko");
        let snapshot = monitor.snapshot();
        assert_eq!(snapshot.romaji_outliers.len(), 1);
        assert_eq!(snapshot.romaji_outliers[0].query, "neko");
        assert_eq!(snapshot.romaji_outliers[0].occurrences, 3);
    }

    #[test]
    fn does_not_flag_non_romaji_or_forward_route() {
        let monitor = ScriptDetectionMonitor::new(0);
        monitor.record(ScriptType::Hiragana, Route::Reverse, "たべる");
        monitor.record(ScriptType::Romaji, Route::Forward, "taberu");
        assert!(monitor.snapshot().romaji_outliers.is_empty());
    }

    #[test]
    fn snapshot_serializes_with_sorted_keys() {
        let monitor = ScriptDetectionMonitor::new(10);
        monitor.record(ScriptType::Romaji, Route::Forward, "taberu");
        monitor.record(ScriptType::Kanji, Route::Forward, "食");
        let snapshot = monitor.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let kanji_pos = json.find("kanji:forward").unwrap();
        let romaji_pos = json.find("romaji:forward").unwrap();
        assert!(kanji_pos < romaji_pos);
    }
}
