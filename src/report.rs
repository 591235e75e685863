//! Plain-text rendering of a classification run.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::warn;

use crate::error::MinPairError;
use crate::types::{MinimalPairSets, PairGroup};

fn render_section(out: &mut String, title: &str, groups: &[PairGroup]) {
    let _ = writeln!(out, "{title}:");
    out.push('\n');
    for group in groups {
        let _ = writeln!(out, "{}.", group.members.join(", "));
    }
    out.push('\n');
}

/// Render the four buckets and the unrecognized-character set as a
/// human-readable report. One group per line, members comma-separated.
pub fn render_report(sets: &MinimalPairSets) -> String {
    let mut out = String::new();
    render_section(&mut out, "Vocalic minimal pairs", &sets.vocalic);
    render_section(&mut out, "Consonantal minimal pairs", &sets.consonantal);
    render_section(&mut out, "Tonal minimal pairs", &sets.tonal);
    render_section(
        &mut out,
        "Other pairs (mixed pairs and pairs involving unrecognized characters)",
        &sets.other,
    );

    if !sets.unrecognized.is_empty() {
        let listed: Vec<String> = sets.unrecognized.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "Unrecognized characters: {}.", listed.join(", "));
    }

    out
}

/// Write the report to a file, overwriting any existing one.
pub fn write_report(sets: &MinimalPairSets, path: &Path) -> Result<(), MinPairError> {
    if !sets.unrecognized.is_empty() {
        warn!(
            "{} characters were not recognized; affected pairs were placed in the other bucket",
            sets.unrecognized.len()
        );
    }
    fs::write(path, render_report(sets)).map_err(|source| MinPairError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
