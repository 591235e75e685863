//! Pairwise comparison of normalized word-forms.

use rayon::prelude::*;

use crate::inventory::CharInventory;
use crate::normalize::strip_tones;

/// Outcome of comparing two word-forms position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairAnalysis {
    /// Toneless skeletons have different lengths; no positional alignment
    /// exists and the pair can never be classified.
    Incomparable,
    /// Skeletons align; counts of differing positions.
    Aligned {
        /// Positions where the toneless characters differ.
        segmental_diffs: usize,
        /// Positions where the characters match but the tones do not.
        tonal_diffs: usize,
        /// The two characters at the last segmental mismatch, if any.
        last_diff: Option<(char, char)>,
    },
}

impl PairAnalysis {
    /// True when the analysis amounts to a valid minimal or tonal pair:
    /// exactly one segmental difference, or none with at least one tonal
    /// difference. This is the predicate the set merger re-checks when
    /// extending a group.
    pub fn is_minimal_or_tonal(&self) -> bool {
        match *self {
            PairAnalysis::Incomparable => false,
            PairAnalysis::Aligned {
                segmental_diffs,
                tonal_diffs,
                ..
            } => segmental_diffs == 1 || (segmental_diffs == 0 && tonal_diffs > 0),
        }
    }
}

/// Compare two normalized word-forms.
///
/// Both forms are tone-stripped first. When the toneless skeletons differ in
/// length the result is [`PairAnalysis::Incomparable`]. Otherwise each
/// aligned position contributes to at most one counter: a segmental
/// difference when the toneless characters differ (the differing characters
/// are recorded, last mismatch wins), else a tonal difference when the tone
/// signatures disagree at that position.
pub fn analyze_pair(x: &str, y: &str, inventory: &CharInventory) -> PairAnalysis {
    let (toneless_x, tones_x) = strip_tones(x, inventory);
    let (toneless_y, tones_y) = strip_tones(y, inventory);

    let chars_x: Vec<char> = toneless_x.chars().collect();
    let chars_y: Vec<char> = toneless_y.chars().collect();
    if chars_x.len() != chars_y.len() {
        return PairAnalysis::Incomparable;
    }

    let mut segmental_diffs = 0;
    let mut tonal_diffs = 0;
    let mut last_diff = None;
    for i in 0..chars_x.len() {
        if chars_x[i] != chars_y[i] {
            segmental_diffs += 1;
            last_diff = Some((chars_x[i], chars_y[i]));
        } else if tones_x[i] != tones_y[i] {
            tonal_diffs += 1;
        }
    }

    PairAnalysis::Aligned {
        segmental_diffs,
        tonal_diffs,
        last_diff,
    }
}

/// Analyze many pairs in parallel. The analyzer is pure, so the pairs are
/// independent; results come back in input order.
pub fn batch_analyze(pairs: &[(String, String)], inventory: &CharInventory) -> Vec<PairAnalysis> {
    pairs
        .par_iter()
        .map(|(x, y)| analyze_pair(x, y, inventory))
        .collect()
}
