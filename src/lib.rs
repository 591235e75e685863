//! Minimal-pair extraction from lexicon word lists.
//!
//! Given a list of lexemes (extracted from a LIFT lexicon export or supplied
//! directly), finds every pair of word-forms differing by exactly one
//! phonological segment and classifies it as vocalic, consonantal, or tonal,
//! with a fourth bucket for mixed pairs and pairs involving characters
//! outside the configured inventory. Transitively related pairs (a~b, b~c)
//! are merged into multi-member groups.
//!
//! ```
//! use minpair_core::{generate_minimal_pairs, CharInventory};
//!
//! let inventory = CharInventory::new("aeiou", "ptk", "").unwrap();
//! let lexemes = vec!["pat".to_string(), "pet".to_string(), "pit".to_string()];
//! let sets = generate_minimal_pairs(&lexemes, &inventory);
//!
//! assert_eq!(sets.vocalic.len(), 1);
//! assert_eq!(sets.vocalic[0].members, vec!["pat", "pet", "pit"]);
//! ```

pub mod analyze;
pub mod classify;
pub mod error;
pub mod inventory;
pub mod lift;
pub mod merge;
pub mod normalize;
pub mod report;
pub mod types;

pub use analyze::{analyze_pair, batch_analyze, PairAnalysis};
pub use classify::{classify_pair, generate_minimal_pairs};
pub use error::MinPairError;
pub use inventory::{CharInventory, DEFAULT_CONSONANTS, DEFAULT_TONES, DEFAULT_VOWELS};
pub use lift::{extract_lexemes, extract_lexemes_from_file};
pub use normalize::{normalize_form, normalize_lexemes, strip_tones};
pub use report::{render_report, write_report};
pub use types::{MinimalPairSets, PairClass, PairGroup};
