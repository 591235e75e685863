//! Character inventories driving classification and tone stripping.
//!
//! Three sets of characters: vowels and consonants decide whether a minimal
//! pair is vocalic or consonantal; tones are folded out of word-forms before
//! segmental comparison. The defaults cover the common IPA inventories; pass
//! custom sets when a lexicon uses a character differently (e.g. y as a
//! consonant).

use ahash::AHashSet;

use crate::error::MinPairError;

/// Default IPA vowel characters.
pub const DEFAULT_VOWELS: &str =
    "aɑɐɒæeɛɜəɤiɪɨıuʉʊʌʏɯɞʚᴀᴁᴂᴇᴈᴏoᴐɔᴑᴒᴓᴔᶏᶐᶒᶓᶔᶕᶖᶗŒɵøœɶˑːɩɷᴕᴜᴝᴞᵫI";

/// Default IPA consonant characters.
pub const DEFAULT_CONSONANTS: &str =
    "bʙɓβcçƈɕdðɗɖfɡɢɠʛɣhʜɦħʰˠɧjɟʝʄᴊʲkƙlʟɬɭɮɫˡmɰnɴŋɲɳⁿpƥɸqʠrɹʀʁɾɽɺɻsʃʂtθƭʈvʋwʍʷxχʎɥzʒʐʑʔʡʕʢˤǃʘǀǁǂčʗđʤȡɘɚɝƕʱǰʞλƛƞȵƪϸπɼɿʵʳσʴʶšʆˢʇʧȶʮʯžƺʓƻʖʅƫʦʣʨʩʪʫʥʬʭˣʼ̊ᴃᴄᴅᴆᴉᴋᴌᴍᴎᴘᴙᴚᴛᴟᴠᴡᴢᴣᴤBGƓγHLNR!ᶀᶁᶂᶃᶄᶅᶆᶇᶈᶉᶊᶋᶌᶍᶎᶑᶘᶙᶚyʸY";

/// Default tone marks: combining grave, acute, circumflex, macron, caron,
/// double grave/acute, and the contour-tone combining marks.
pub const DEFAULT_TONES: &str =
    "\u{30B}\u{30F}\u{301}\u{304}\u{300}\u{30C}\u{302}\u{1DC4}\u{1DC5}\u{1DC8}\u{1DC6}\u{1DC7}";

/// Vowel, consonant, and tone character sets for one classification run.
#[derive(Debug, Clone)]
pub struct CharInventory {
    vowels: AHashSet<char>,
    consonants: AHashSet<char>,
    tones: AHashSet<char>,
}

impl CharInventory {
    /// Build an inventory from three character-set strings.
    ///
    /// Vowels and consonants must be non-empty (classification would be
    /// vacuous otherwise). A character may appear in both the vowel and
    /// consonant sets, but a tone mark may not double as a vowel or
    /// consonant: it would be stripped before classification could see it.
    /// Tones may be empty for toneless lexicons.
    pub fn new(vowels: &str, consonants: &str, tones: &str) -> Result<Self, MinPairError> {
        let vowels: AHashSet<char> = vowels.chars().collect();
        let consonants: AHashSet<char> = consonants.chars().collect();
        let tones: AHashSet<char> = tones.chars().collect();

        if vowels.is_empty() {
            return Err(MinPairError::InvalidInventory(
                "vowel set is empty".to_string(),
            ));
        }
        if consonants.is_empty() {
            return Err(MinPairError::InvalidInventory(
                "consonant set is empty".to_string(),
            ));
        }
        if let Some(ch) = tones
            .iter()
            .find(|c| vowels.contains(*c) || consonants.contains(*c))
        {
            return Err(MinPairError::InvalidInventory(format!(
                "tone mark {:?} also appears in the vowel or consonant set",
                ch
            )));
        }

        Ok(Self {
            vowels,
            consonants,
            tones,
        })
    }

    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&ch)
    }

    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(&ch)
    }

    pub fn is_tone(&self, ch: char) -> bool {
        self.tones.contains(&ch)
    }
}

impl Default for CharInventory {
    fn default() -> Self {
        Self::new(DEFAULT_VOWELS, DEFAULT_CONSONANTS, DEFAULT_TONES)
            .expect("default inventory is valid")
    }
}
