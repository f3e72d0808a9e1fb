//! Phoneme-to-script mapping and orthographic correction.

pub mod arabic_map;
pub mod arabic_rules;
pub mod prefix_map;

pub use arabic_map::ArabicMap;
pub use arabic_rules::ArabicRules;
pub use prefix_map::PrefixMap;

/// Maps a single phoneme to its spelling in the target script.
pub trait TranslitMap: Send + Sync {
    /// Closest target-script equivalent of `phoneme`. Never fails.
    fn get_equivalent(&self, phoneme: &str) -> &str;
}

/// Orthographic rewrite rules applied to a raw transliteration.
pub trait TranslitRules: Send + Sync {
    fn apply(&self, text: &str) -> String;
}
