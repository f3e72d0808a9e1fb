use serde::{Deserialize, Serialize};

/// Outcome of transphonating a single word.
///
/// `transliteration` is `None` when no phonemes could be found for the word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transphonation {
    pub word: String,
    pub transliteration: Option<String>,
}

impl Transphonation {
    pub fn is_translated(&self) -> bool {
        self.transliteration.is_some()
    }
}
