//! Shared data structures for minimal-pair extraction.

use serde::{Deserialize, Serialize};

/// Phonological category assigned to a minimal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairClass {
    /// The two forms differ in one vowel segment.
    Vocalic,
    /// The two forms differ in one consonant segment.
    Consonantal,
    /// Segmentally identical forms differing only in tone.
    Tonal,
    /// Mixed pairs (vowel vs. consonant) or pairs involving a character
    /// outside the configured inventory.
    Other,
}

/// A group of word-forms merged by transitive minimal-pair relations.
///
/// Starts life as a pair and grows one member at a time: a candidate is
/// appended only when it forms a valid minimal or tonal pair with every
/// existing member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairGroup {
    pub members: Vec<String>,
}

impl PairGroup {
    /// Create a fresh two-member group.
    pub fn from_pair(a: &str, b: &str) -> Self {
        Self {
            members: vec![a.to_string(), b.to_string()],
        }
    }

    pub fn contains(&self, form: &str) -> bool {
        self.members.iter().any(|m| m == form)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Result of one classification run: the four bucket collections plus the
/// characters that could not be classified.
///
/// This is the explicit run context — built fresh by
/// [`generate_minimal_pairs`](crate::classify::generate_minimal_pairs) and
/// returned to the caller, never shared between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalPairSets {
    pub vocalic: Vec<PairGroup>,
    pub consonantal: Vec<PairGroup>,
    pub tonal: Vec<PairGroup>,
    pub other: Vec<PairGroup>,
    /// Characters seen as the differing segment of some pair but absent from
    /// both the vowel and consonant inventories, in first-seen order.
    pub unrecognized: Vec<char>,
}

impl MinimalPairSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for a given classification, mutable.
    pub(crate) fn bucket_mut(&mut self, class: PairClass) -> &mut Vec<PairGroup> {
        match class {
            PairClass::Vocalic => &mut self.vocalic,
            PairClass::Consonantal => &mut self.consonantal,
            PairClass::Tonal => &mut self.tonal,
            PairClass::Other => &mut self.other,
        }
    }

    /// Record a character outside the vowel/consonant inventories.
    /// Duplicates are not re-added.
    pub(crate) fn record_unrecognized(&mut self, ch: char) {
        if !self.unrecognized.contains(&ch) {
            self.unrecognized.push(ch);
        }
    }

    /// Total number of groups across all four buckets.
    pub fn group_count(&self) -> usize {
        self.vocalic.len() + self.consonantal.len() + self.tonal.len() + self.other.len()
    }

    /// Serialize the full result to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
