//! Word-form normalization and tone stripping.
//!
//! Comparison works per Unicode code point, one phonological unit per
//! position. Precomposed tone-bearing vowels (á, ō, ǔ, ...) would hide the
//! tone inside a single code point, so normalization splits them into a
//! plain vowel followed by a combining tone mark before any comparison
//! happens.

use crate::inventory::CharInventory;

/// Split a precomposed tone-bearing vowel into (base vowel, combining mark).
///
/// Characters outside the table pass through unchanged, including already
/// decomposed sequences and unrecognized letters.
fn decompose_tone_vowel(ch: char) -> Option<(char, char)> {
    let (base, mark) = match ch {
        'à' => ('a', '\u{300}'),
        'á' => ('a', '\u{301}'),
        'â' => ('a', '\u{302}'),
        'ā' => ('a', '\u{304}'),
        'ǎ' => ('a', '\u{30C}'),
        'ȁ' => ('a', '\u{30F}'),
        'ǽ' => ('æ', '\u{301}'),
        'ǣ' => ('æ', '\u{304}'),
        'è' => ('e', '\u{300}'),
        'é' => ('e', '\u{301}'),
        'ê' => ('e', '\u{302}'),
        'ē' => ('e', '\u{304}'),
        'ě' => ('e', '\u{30C}'),
        'ȅ' => ('e', '\u{30F}'),
        'ì' => ('i', '\u{300}'),
        'í' => ('i', '\u{301}'),
        'î' => ('i', '\u{302}'),
        'ī' => ('i', '\u{304}'),
        'ǐ' => ('i', '\u{30C}'),
        'ȉ' => ('i', '\u{30F}'),
        'ò' => ('o', '\u{300}'),
        'ó' => ('o', '\u{301}'),
        'ô' => ('o', '\u{302}'),
        'ō' => ('o', '\u{304}'),
        'ő' => ('o', '\u{30B}'),
        'ǒ' => ('o', '\u{30C}'),
        'ȍ' => ('o', '\u{30F}'),
        'ǿ' => ('ø', '\u{301}'),
        'ù' => ('u', '\u{300}'),
        'ú' => ('u', '\u{301}'),
        'û' => ('u', '\u{302}'),
        'ū' => ('u', '\u{304}'),
        'ű' => ('u', '\u{30B}'),
        'ǔ' => ('u', '\u{30C}'),
        'ȕ' => ('u', '\u{30F}'),
        _ => return None,
    };
    Some((base, mark))
}

/// Normalize one word-form: lowercase, then split precomposed tone vowels.
pub fn normalize_form(form: &str) -> String {
    let lowered = form.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match decompose_tone_vowel(ch) {
            Some((base, mark)) => {
                out.push(base);
                out.push(mark);
            }
            None => out.push(ch),
        }
    }
    out
}

/// Normalize an ordered sequence of word-forms. Order preserved, no entries
/// dropped.
pub fn normalize_lexemes(lexemes: &[String]) -> Vec<String> {
    lexemes.iter().map(|l| normalize_form(l)).collect()
}

/// Strip tone marks from a normalized word-form.
///
/// Returns the toneless skeleton and a parallel tone signature of equal
/// length: one entry per skeleton position, `Some(mark)` when a tone mark
/// followed that character, `None` otherwise. A tone mark overwrites the
/// signature slot of the character before it, so of several consecutive
/// marks only the last survives. A leading tone mark has no slot to fill
/// and is discarded.
pub fn strip_tones(form: &str, inventory: &CharInventory) -> (String, Vec<Option<char>>) {
    let mut toneless = String::with_capacity(form.len());
    let mut signature: Vec<Option<char>> = Vec::new();
    for ch in form.chars() {
        if inventory.is_tone(ch) {
            if let Some(last) = signature.last_mut() {
                *last = Some(ch);
            }
        } else {
            toneless.push(ch);
            signature.push(None);
        }
    }
    (toneless, signature)
}
