//! Pair classification and the run driver.

use log::debug;

use crate::analyze::{analyze_pair, PairAnalysis};
use crate::inventory::CharInventory;
use crate::merge::merge_pair;
use crate::normalize::normalize_lexemes;
use crate::types::{MinimalPairSets, PairClass};

/// Classify one pair of normalized word-forms.
///
/// Returns `None` for identical forms, incomparable forms, and forms with
/// more than one segmental difference. Tonal classification requires zero
/// segmental differences and at least one tonal one. A single segmental
/// difference is vocalic or consonantal when both differing characters sit
/// in the corresponding inventory set, otherwise `Other`.
pub fn classify_pair(x: &str, y: &str, inventory: &CharInventory) -> Option<PairClass> {
    match analyze_pair(x, y, inventory) {
        PairAnalysis::Aligned {
            segmental_diffs: 1,
            last_diff: Some((cx, cy)),
            ..
        } => {
            if inventory.is_vowel(cx) && inventory.is_vowel(cy) {
                Some(PairClass::Vocalic)
            } else if inventory.is_consonant(cx) && inventory.is_consonant(cy) {
                Some(PairClass::Consonantal)
            } else {
                Some(PairClass::Other)
            }
        }
        PairAnalysis::Aligned {
            segmental_diffs: 0,
            tonal_diffs,
            ..
        } if tonal_diffs > 0 => Some(PairClass::Tonal),
        _ => None,
    }
}

/// Classify one pair and route it into the run context.
///
/// Discarded pairs leave `sets` untouched. For `Other` pairs, any differing
/// character found in neither the vowel nor the consonant set is recorded as
/// unrecognized before the pair is merged into its bucket.
fn submit_pair(sets: &mut MinimalPairSets, x: &str, y: &str, inventory: &CharInventory) {
    let Some(class) = classify_pair(x, y, inventory) else {
        return;
    };

    if class == PairClass::Other {
        if let PairAnalysis::Aligned {
            last_diff: Some((cx, cy)),
            ..
        } = analyze_pair(x, y, inventory)
        {
            for ch in [cx, cy] {
                if !inventory.is_vowel(ch) && !inventory.is_consonant(ch) {
                    sets.record_unrecognized(ch);
                }
            }
        }
    }

    merge_pair(sets.bucket_mut(class), x, y, inventory);
}

/// Run the full extraction: normalize the lexemes, compare every unordered
/// pair, and collect the classified groups.
///
/// Self-pairs (i == j) are visited and always discarded as identical. The
/// scan is strictly sequential; the merger mutates the run context and must
/// not interleave.
pub fn generate_minimal_pairs(lexemes: &[String], inventory: &CharInventory) -> MinimalPairSets {
    let normalized = normalize_lexemes(lexemes);
    let mut sets = MinimalPairSets::new();

    for i in 0..normalized.len() {
        for j in i..normalized.len() {
            submit_pair(&mut sets, &normalized[i], &normalized[j], inventory);
        }
    }

    debug!(
        "classified {} lexemes into {} groups ({} vocalic, {} consonantal, {} tonal, {} other), {} unrecognized characters",
        normalized.len(),
        sets.group_count(),
        sets.vocalic.len(),
        sets.consonantal.len(),
        sets.tonal.len(),
        sets.other.len(),
        sets.unrecognized.len(),
    );

    sets
}
