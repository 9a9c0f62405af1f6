//! Bucketization (spec.md §4.5): the coarse tier that dominates
//! ordering before per-candidate feature scores break ties.

use jsh_model::{Bucket, Entry, MatchType};

const COMMON_PREFIX_FREQUENCY_CEILING: i64 = 5000;

/// Entries at or below this rank are never considered "specialized"
/// purely on frequency grounds; above it, absent a common-noun/verb tag,
/// a match falls to bucket D. Not named in spec.md's table directly --
/// chosen higher than the commonPrefixMatch ceiling so B and D don't
/// overlap. See DESIGN.md.
const SPECIALIZED_FREQUENCY_FLOOR: i64 = 20_000;

/// `is_exact_match` covers both literal headword/reading equality and
/// (when available) lemma-of-inflected-form equality; this crate only
/// ever receives the former, since no morphological analyzer is in
/// scope here (see DESIGN.md).
pub fn bucketize(entry: &Entry, match_type: MatchType, is_exact_match: bool) -> Bucket {
    if is_exact_match {
        return Bucket::A;
    }

    if match_type == MatchType::Prefix
        && entry.frequency_rank.is_some_and(|rank| rank <= COMMON_PREFIX_FREQUENCY_CEILING)
    {
        return Bucket::B;
    }

    let low_frequency = entry.frequency_rank.map_or(true, |rank| rank > SPECIALIZED_FREQUENCY_FLOOR);
    let specialized_pos = entry
        .senses
        .first()
        .is_some_and(|sense| sense.part_of_speech.is_proper_archaic_or_rare());

    if low_frequency || specialized_pos {
        Bucket::D
    } else {
        Bucket::C
    }
}
