use minpair_core::*;

#[test]
fn test_vocalic_chain_merges_into_one_group() {
    let inventory = CharInventory::new("aeiou", "ptk", "").unwrap();
    let lexemes = vec!["pat".to_string(), "pet".to_string(), "pit".to_string()];

    let sets = generate_minimal_pairs(&lexemes, &inventory);

    // pat~pet differ only in a/e, pet~pit only in e/i: one group of three.
    assert_eq!(sets.vocalic.len(), 1);
    assert_eq!(sets.vocalic[0].members, vec!["pat", "pet", "pit"]);
    assert!(sets.consonantal.is_empty());
    assert!(sets.tonal.is_empty());
    assert!(sets.other.is_empty());
    assert!(sets.unrecognized.is_empty());
}

#[test]
fn test_tonal_pair() {
    let inventory = CharInventory::default();
    // Same skeleton "ta", differing only in the double-acute tone mark.
    let lexemes = vec!["ta".to_string(), "ta\u{30B}".to_string()];

    let sets = generate_minimal_pairs(&lexemes, &inventory);

    assert_eq!(sets.tonal.len(), 1);
    assert_eq!(sets.tonal[0].members, vec!["ta", "ta\u{30B}"]);
    assert!(sets.vocalic.is_empty());
    assert!(sets.consonantal.is_empty());
}

#[test]
fn test_consonantal_pair_and_unrecognized_character() {
    let inventory = CharInventory::new("aeiou", "ptkb", "").unwrap();
    let lexemes = vec!["pat".to_string(), "bat".to_string(), "xat".to_string()];

    let sets = generate_minimal_pairs(&lexemes, &inventory);

    assert_eq!(sets.consonantal.len(), 1);
    assert_eq!(sets.consonantal[0].members, vec!["pat", "bat"]);
    // pat~xat and bat~xat both land in "other"; x is reported once.
    assert_eq!(sets.other.len(), 1);
    assert_eq!(sets.unrecognized, vec!['x']);
}

#[test]
fn test_self_and_incomparable_pairs_discarded() {
    let inventory = CharInventory::new("aeiou", "ptk", "").unwrap();
    let lexemes = vec!["pat".to_string(), "pat".to_string(), "pata".to_string()];

    let sets = generate_minimal_pairs(&lexemes, &inventory);

    assert_eq!(sets.group_count(), 0);
    assert!(sets.unrecognized.is_empty());
}

#[test]
fn test_duplicate_pair_suppressed_across_orderings() {
    let inventory = CharInventory::new("aeiou", "ptk", "").unwrap();
    let mut bucket = Vec::new();
    merge::merge_pair(&mut bucket, "pat", "pet", &inventory);
    merge::merge_pair(&mut bucket, "pet", "pat", &inventory);

    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].members, vec!["pat", "pet"]);
}

#[test]
fn test_analyzer_sentinel_on_length_mismatch() {
    let inventory = CharInventory::default();
    assert_eq!(
        analyze_pair("pat", "pata", &inventory),
        PairAnalysis::Incomparable
    );
    assert_eq!(classify_pair("pat", "pata", &inventory), None);
}

#[test]
fn test_self_comparison_is_clean() {
    let inventory = CharInventory::default();
    assert_eq!(
        analyze_pair("ba\u{301}ta", "ba\u{301}ta", &inventory),
        PairAnalysis::Aligned {
            segmental_diffs: 0,
            tonal_diffs: 0,
            last_diff: None,
        }
    );
}

#[test]
fn test_toneless_stripping_roundtrip() {
    let inventory = CharInventory::default();
    let (toneless, signature) = strip_tones("patak", &inventory);
    assert_eq!(toneless, "patak");
    assert_eq!(signature, vec![None; 5]);
}

#[test]
fn test_precomposed_vowels_classify_tonally() {
    let inventory = CharInventory::default();
    // "bá" normalizes to b + a + combining acute, making it a tonal pair
    // with plain "ba" rather than a vocalic a/á pair.
    let lexemes = vec!["ba".to_string(), "bá".to_string()];

    let sets = generate_minimal_pairs(&lexemes, &inventory);

    assert_eq!(sets.tonal.len(), 1);
    assert!(sets.vocalic.is_empty());
}

#[test]
fn test_end_to_end_lift_to_report() {
    let lift = r#"<?xml version="1.0" encoding="UTF-8"?>
<lift version="0.13">
  <entry id="1">
    <lexical-unit><form lang="xx"><text>Pat</text></form></lexical-unit>
    <trait name="dialect-labels" value="North"/>
  </entry>
  <entry id="2">
    <lexical-unit><form lang="xx"><text>pet</text></form></lexical-unit>
    <trait name="dialect-labels" value="North"/>
  </entry>
  <entry id="3">
    <lexical-unit><form lang="xx"><text>tok</text></form></lexical-unit>
    <trait name="dialect-labels" value="South"/>
  </entry>
</lift>"#;

    let lexemes = extract_lexemes(lift, Some("North")).unwrap();
    assert_eq!(lexemes, vec!["Pat", "pet"]);

    let inventory = CharInventory::new("aeiou", "ptk", "").unwrap();
    let sets = generate_minimal_pairs(&lexemes, &inventory);
    assert_eq!(sets.vocalic.len(), 1);
    assert_eq!(sets.vocalic[0].members, vec!["pat", "pet"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minimal_pairs.txt");
    write_report(&sets, &path).unwrap();
    let report = std::fs::read_to_string(&path).unwrap();
    assert!(report.contains("Vocalic minimal pairs:"));
    assert!(report.contains("pat, pet."));
}

#[test]
fn test_batch_analyze_matches_sequential() {
    let inventory = CharInventory::default();
    let pairs = vec![
        ("pat".to_string(), "pet".to_string()),
        ("ta".to_string(), "ta\u{301}".to_string()),
        ("pat".to_string(), "pata".to_string()),
    ];

    let batched = batch_analyze(&pairs, &inventory);

    assert_eq!(batched.len(), 3);
    for (result, (x, y)) in batched.iter().zip(&pairs) {
        assert_eq!(*result, analyze_pair(x, y, &inventory));
    }
}

#[test]
fn test_run_context_does_not_leak_between_runs() {
    let inventory = CharInventory::new("aeiou", "ptk", "").unwrap();
    let lexemes = vec!["pat".to_string(), "xat".to_string()];

    let first = generate_minimal_pairs(&lexemes, &inventory);
    let second = generate_minimal_pairs(&lexemes, &inventory);

    assert_eq!(first, second);
    assert_eq!(second.unrecognized, vec!['x']);
}
