//! `Configuration`: the ordered, validated feature list that drives
//! scoring (spec.md §4.5, §9). Validation is a pure function over the
//! list, not tied to any one feature's implementation.

use snafu::Snafu;

use crate::feature::Feature;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(context(suffix(false)))]
pub enum Error {
    #[snafu(display("unknown feature name: {name}"))]
    UnknownFeature { name: String },

    #[snafu(display("feature {name} has an invalid range: lo {lo} > hi {hi}"))]
    InvalidRange { name: String, lo: f64, hi: f64 },

    #[snafu(display("feature {name} has weight {weight} outside [0, 10]"))]
    InvalidWeight { name: String, weight: f64 },

    #[snafu(display("feature {name} is configured more than once"))]
    DuplicateFeature { name: String },
}

/// One feature's configuration: whether it participates, its weight,
/// and the range its raw value is clamped to before the weight is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureConfig {
    pub feature: Feature,
    pub enabled: bool,
    pub weight: f64,
    pub range: (f64, f64),
}

impl FeatureConfig {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            enabled: true,
            weight: feature.default_weight(),
            range: feature.default_range(),
        }
    }

    /// Clamp `raw` to this feature's range, then apply its weight. Zero
    /// when the feature is disabled.
    pub fn score(&self, raw: f64) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        let (lo, hi) = self.range;
        raw.clamp(lo, hi) * self.weight
    }
}

/// The ordered list of features a [`crate::engine::RankingEngine`]
/// applies to every candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub features: Vec<FeatureConfig>,
}

impl Configuration {
    /// The eight features from spec.md §4.5, all enabled at their
    /// documented default weight and range.
    pub fn default_for_search() -> Self {
        let features = [
            Feature::ExactMatch,
            Feature::PrefixMatch,
            Feature::ContainsMatch,
            Feature::Frequency,
            Feature::PosWeight,
            Feature::KatakanaDemotion,
            Feature::CanonicalNative,
            Feature::ParentheticalHint,
        ]
        .into_iter()
        .map(FeatureConfig::new)
        .collect();
        Self { features }
    }

    /// Reject `range.lo > range.hi`, `weight < 0 || weight > 10`, and
    /// duplicate feature entries. "Unknown feature names" is checked by
    /// [`build_from_names`] at the string-parsing boundary, before a
    /// `Configuration` value even exists.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = std::collections::HashSet::new();
        for fc in &self.features {
            let name = fc.feature.name();
            if !seen.insert(name) {
                return Err(Error::DuplicateFeature { name: name.to_string() });
            }
            let (lo, hi) = fc.range;
            if lo > hi {
                return Err(Error::InvalidRange { name: name.to_string(), lo, hi });
            }
            if !(0.0..=10.0).contains(&fc.weight) {
                return Err(Error::InvalidWeight { name: name.to_string(), weight: fc.weight });
            }
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::default_for_search()
    }
}

/// Build a `Configuration` from external `(name, weight)` pairs,
/// rejecting any name that isn't a known [`Feature`]. Ranges are left at
/// each feature's default; only `weight` is externally driven.
pub fn build_from_names(overrides: &[(&str, f64)]) -> Result<Configuration, Error> {
    let mut config = Configuration::default_for_search();
    for (name, weight) in overrides {
        let feature = Feature::from_name(name).ok_or_else(|| Error::UnknownFeature { name: name.to_string() })?;
        if let Some(fc) = config.features.iter_mut().find(|fc| fc.feature == feature) {
            fc.weight = *weight;
        }
    }
    config.validate()?;
    Ok(config)
}
