//! Error types for inventory validation and lexicon I/O.
//!
//! The classification core itself never fails: incomparable pairs and
//! unrecognized characters are semantic outcomes, not errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinPairError {
    /// The character inventory cannot support classification.
    #[error("invalid character inventory: {0}")]
    InvalidInventory(String),

    /// The lexicon document does not look like a LIFT export.
    #[error("malformed lexicon: {0}")]
    MalformedLexicon(String),

    /// The lexicon file could not be read.
    #[error("failed to read lexicon file {path}: {source}")]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be written.
    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
