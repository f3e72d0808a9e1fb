//! Phoneme retrieval: word in, ARPABET phonemes out.
//!
//! - DictionaryRetriever: CMU Pronouncing Dictionary with a fallback table
//! - ModelRetriever: any grapheme-to-phoneme model, output filtered to
//!   phoneme tokens

pub mod dictionary;
pub mod g2p;

use anyhow::{Context, Result, bail};

use crate::paths::DataPaths;

pub use dictionary::{DictionaryRetriever, FallbackDictionary, PhonemeDictionary};
pub use g2p::{GraphemeToPhoneme, LetterToSound, ModelRetriever};

/// Phoneme retriever trait.
pub trait PhonemeRetriever: Send + Sync {
    /// Retriever name for logging/display.
    fn name(&self) -> &str;

    /// Phonemes for `word`, or `None` if the word is unknown.
    ///
    /// An empty sequence means the same thing to the pipeline as `None`.
    fn get_phonemes(&self, word: &str) -> Option<Vec<String>>;
}

/// Strip trailing stress marker (0, 1, 2) from an ARPABET phoneme.
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Get a phoneme retriever by name.
///
/// Modes:
/// - "dict" — CMU dictionary at `paths.cmu_dict`, fallback at `paths.fallback_dict`.
/// - "g2p" — built-in letter-to-sound model, no files needed.
pub fn get_retriever(name: &str, paths: &DataPaths) -> Result<Box<dyn PhonemeRetriever>> {
    match name {
        "dict" => {
            let retriever = DictionaryRetriever::load(&paths.cmu_dict, Some(&paths.fallback_dict))
                .context("Could not build dictionary retriever")?;
            Ok(Box::new(retriever))
        }
        "g2p" => Ok(Box::new(ModelRetriever::new(LetterToSound))),
        _ => bail!("Unknown retriever: '{}'. Available: dict, g2p", name),
    }
}
