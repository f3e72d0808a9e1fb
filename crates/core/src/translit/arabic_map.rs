//! ARPABET-to-Arabic phoneme table.

use super::{PrefixMap, TranslitMap};

/// Phoneme to Arabic spelling. Vowels carry a short-vowel mark followed by a
/// long-vowel letter.
const ARABIC_TABLE: &[(&str, &str)] = &[
    ("AO0", "\u{064F}و"),
    ("UH0", "\u{064F}و"),
    ("UW0", "\u{064F}و"),
    ("OY0", "\u{064F}و"),
    ("OW0", "\u{064F}و"),
    ("UW1", "\u{064F}و"),
    ("OY1", "وي"),
    ("B", "ب"),
    ("P", "ب"),
    ("NG", "غ"),
    ("F", "ف"),
    ("V", "ف"),
    ("AA0", "\u{064E}ا"),
    ("AE0", "\u{064E}ا"),
    ("AH0", "\u{064E}ا"),
    ("EH0", "\u{064E}ا"),
    ("EH2", "\u{064E}ا"),
    ("AY0", "\u{064E}ي"),
    ("EY0", "\u{064E}ي"),
    ("AW0", "\u{064E}و"),
    ("IH0", "\u{0650}ي"),
    ("T", "ت"),
    ("CH", "تش"),
    ("G", "ج"),
    ("R", "ر"),
    ("K", "ك"),
    ("L", "ل"),
    ("M", "م"),
    ("HH", "ه"),
    ("W", "و"),
    ("N", "ن"),
    ("Y", "ي"),
    ("PH", "ف"),
    ("UX", "\u{064F}و"),
    ("ZH", "ج"),
    ("D", "د"),
    ("JH", "دج"),
    ("DH", "ذ"),
    ("ER0", "ر"),
    ("ER2", "ر"),
    ("Z", "ز"),
    ("S", "س"),
    ("SH", "ش"),
    ("IY0", "\u{0650}ي"),
    ("IX", "\u{0650}ي"),
    ("TH", "ث"),
    ("AH1", "أ\u{064F}"),
];

/// Arabic equivalents for ARPABET phonemes, with stressed or unstressed
/// variants falling back to the closest listed symbol.
#[derive(Debug, Clone)]
pub struct ArabicMap {
    table: PrefixMap,
}

impl ArabicMap {
    pub fn new() -> Self {
        Self {
            table: PrefixMap::new(ARABIC_TABLE.iter().copied()),
        }
    }

    pub fn table(&self) -> &PrefixMap {
        &self.table
    }
}

impl Default for ArabicMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslitMap for ArabicMap {
    fn get_equivalent(&self, phoneme: &str) -> &str {
        self.table.closest(phoneme)
    }
}
