//! Lexeme extraction from LIFT lexicon exports.
//!
//! LIFT files are XML documents exported from lexicography tools such as
//! FieldWorks. Extraction is a lightweight regex scan, not a full XML parse:
//! each `<entry>` block is located, its first
//! `<lexical-unit><form><text>...</text>` is taken as the lexeme, and when a
//! dialect label is requested only entries carrying the matching
//! `dialect-labels` trait are kept.

use std::fs;
use std::path::Path;

use log::debug;
use regex::Regex;

use crate::error::MinPairError;

/// Escape the five XML special characters, so a dialect label is matched the
/// way the export encodes it.
fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn entry_regex() -> Regex {
    Regex::new(r"(?s)<\s*entry[^>]*?>.*?</\s*entry\s*>").expect("hardcoded pattern compiles")
}

fn lexeme_regex() -> Regex {
    Regex::new(
        r"(?s)<\s*lexical-unit[^>]*?>\s*<\s*form[^>]*?>\s*<\s*text[^>]*?>(.*?)</\s*text\s*>\s*</\s*form\s*>.*?</\s*lexical-unit\s*>",
    )
    .expect("hardcoded pattern compiles")
}

fn dialect_regex(dialect: &str) -> Regex {
    let value = regex::escape(&xml_escape(dialect));
    Regex::new(&format!(
        r#"<\s*trait\s*name\s*=\s*"dialect-labels"\s*value\s*=\s*"{value}"\s*/>"#
    ))
    .expect("escaped pattern compiles")
}

/// Extract the ordered list of lexemes from LIFT document contents.
///
/// With a dialect given, entries whose `dialect-labels` trait does not match
/// are skipped. Entries without a lexical unit are skipped silently. A
/// document containing no `<entry>` elements at all is rejected as
/// malformed.
pub fn extract_lexemes(contents: &str, dialect: Option<&str>) -> Result<Vec<String>, MinPairError> {
    let entries: Vec<&str> = entry_regex()
        .find_iter(contents)
        .map(|m| m.as_str())
        .collect();
    if entries.is_empty() {
        return Err(MinPairError::MalformedLexicon(
            "no <entry> elements found".to_string(),
        ));
    }

    let lexeme_re = lexeme_regex();
    let dialect_re = dialect.map(dialect_regex);

    let mut lexemes = Vec::new();
    for entry in &entries {
        let Some(captures) = lexeme_re.captures(entry) else {
            continue;
        };
        let in_dialect = match &dialect_re {
            Some(re) => re.is_match(entry),
            None => true,
        };
        if in_dialect {
            lexemes.push(captures[1].to_string());
        }
    }

    debug!(
        "extracted {} lexemes from {} entries{}",
        lexemes.len(),
        entries.len(),
        dialect.map_or(String::new(), |d| format!(" (dialect {d:?})")),
    );

    Ok(lexemes)
}

/// Read a LIFT file and extract its lexemes.
pub fn extract_lexemes_from_file(
    path: &Path,
    dialect: Option<&str>,
) -> Result<Vec<String>, MinPairError> {
    let contents = fs::read_to_string(path).map_err(|source| MinPairError::LexiconRead {
        path: path.to_path_buf(),
        source,
    })?;
    extract_lexemes(&contents, dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lexeme: &str, dialect: Option<&str>) -> String {
        let trait_line = dialect.map_or(String::new(), |d| {
            format!(r#"<trait name="dialect-labels" value="{d}"/>"#)
        });
        format!(
            "<entry id=\"{lexeme}\">\n  <lexical-unit>\n    <form lang=\"xx\">\n      \
             <text>{lexeme}</text>\n    </form>\n  </lexical-unit>\n  {trait_line}\n</entry>"
        )
    }

    #[test]
    fn test_extracts_all_lexemes_in_order() {
        let doc = format!(
            "<lift>{}{}{}</lift>",
            entry("pat", None),
            entry("pet", None),
            entry("pit", None)
        );
        let lexemes = extract_lexemes(&doc, None).unwrap();
        assert_eq!(lexemes, vec!["pat", "pet", "pit"]);
    }

    #[test]
    fn test_dialect_filter() {
        let doc = format!(
            "<lift>{}{}{}</lift>",
            entry("pat", Some("North")),
            entry("pet", Some("South")),
            entry("pit", Some("North"))
        );
        let lexemes = extract_lexemes(&doc, Some("North")).unwrap();
        assert_eq!(lexemes, vec!["pat", "pit"]);
    }

    #[test]
    fn test_dialect_with_special_characters() {
        let doc = format!("<lift>{}</lift>", entry("pat", Some("M&apos;bottiny")));
        let lexemes = extract_lexemes(&doc, Some("M'bottiny")).unwrap();
        assert_eq!(lexemes, vec!["pat"]);
    }

    #[test]
    fn test_entry_without_lexical_unit_skipped() {
        let doc = format!(
            "<lift><entry id=\"empty\"></entry>{}</lift>",
            entry("pat", None)
        );
        let lexemes = extract_lexemes(&doc, None).unwrap();
        assert_eq!(lexemes, vec!["pat"]);
    }

    #[test]
    fn test_no_entries_is_malformed() {
        assert!(matches!(
            extract_lexemes("<lift></lift>", None),
            Err(MinPairError::MalformedLexicon(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = extract_lexemes_from_file(Path::new("/nonexistent/lexicon.lift"), None);
        assert!(matches!(err, Err(MinPairError::LexiconRead { .. })));
    }
}
