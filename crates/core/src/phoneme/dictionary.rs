//! Word-to-phoneme lookup tables loaded from pronunciation dictionary files.
//!
//! Format: one word per line, "WORD  PH1 PH2 PH3 ..."
//! Lines starting with ";;;" are comments. Alternative pronunciations are
//! written "WORD(2)  ..."; only the first pronunciation of a word is kept.

use std::collections::HashMap;
use std::path::Path;

use crate::error::DictionaryError;

use super::{PhonemeRetriever, strip_stress};

const COMMENT_MARKER: &str = ";;;";

/// Immutable map from lower-cased word to its phoneme sequence.
#[derive(Debug, Clone, Default)]
pub struct PhonemeDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl PhonemeDictionary {
    /// Load the CMU Pronouncing Dictionary.
    ///
    /// The file is ISO-8859-1 encoded. Stress digits are removed from every
    /// phoneme, so `AH0` is stored as `AH`.
    pub fn load_cmudict(path: &Path) -> Result<Self, DictionaryError> {
        let bytes = std::fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // ISO-8859-1: every byte is the code point of the same value
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        let dict = Self::parse(&text, true).map_err(|e| e.at(path))?;
        log::info!("Loaded {} entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Load a UTF-8 dictionary with phonemes kept exactly as written.
    pub fn load_plain(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::parse(&text, false).map_err(|e| e.at(path))?;
        log::info!("Loaded {} entries from {}", dict.len(), path.display());
        Ok(dict)
    }

    fn parse(text: &str, stressless: bool) -> Result<Self, LineError> {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let Some(word_raw) = tokens.next() else {
                continue;
            };
            let phonemes: Vec<String> = tokens
                .map(|p| if stressless { strip_stress(p) } else { p })
                .map(str::to_string)
                .collect();
            if phonemes.is_empty() {
                return Err(LineError {
                    line: idx + 1,
                    reason: format!("no phonemes for '{}'", word_raw),
                });
            }
            let word = strip_variant_marker(word_raw).to_lowercase();
            entries.entry(word).or_insert(phonemes);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: Into<String>> FromIterator<(W, Vec<String>)> for PhonemeDictionary {
    fn from_iter<I: IntoIterator<Item = (W, Vec<String>)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(word, phonemes)| (word.into().to_lowercase(), phonemes))
            .collect();
        Self { entries }
    }
}

/// Parse failure before the file path is known.
struct LineError {
    line: usize,
    reason: String,
}

impl LineError {
    fn at(self, path: &Path) -> DictionaryError {
        DictionaryError::Malformed {
            path: path.to_path_buf(),
            line: self.line,
            reason: self.reason,
        }
    }
}

/// Strip variant marker: WORD(2) -> WORD. Words that merely contain a
/// parenthesis, like "(PAREN", are left alone.
fn strip_variant_marker(word: &str) -> &str {
    if let Some(inner) = word.strip_suffix(')') {
        if let Some(open) = inner.rfind('(') {
            let digits = &inner[open + 1..];
            if open > 0 && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return &word[..open];
            }
        }
    }
    word
}

/// Secondary dictionary consulted when the primary one has no entry.
///
/// Loading never fails: an unreadable or malformed file leaves the table
/// empty and the reason is kept for inspection.
#[derive(Debug, Default)]
pub struct FallbackDictionary {
    dict: PhonemeDictionary,
    load_error: Option<DictionaryError>,
}

impl FallbackDictionary {
    pub fn load(path: &Path) -> Self {
        Self::from_result(PhonemeDictionary::load_plain(path))
    }

    pub fn from_result(result: Result<PhonemeDictionary, DictionaryError>) -> Self {
        match result {
            Ok(dict) => Self { dict, load_error: None },
            Err(e) => {
                log::warn!("Fallback dictionary unavailable, continuing without it: {}", e);
                Self {
                    dict: PhonemeDictionary::default(),
                    load_error: Some(e),
                }
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.dict.get(word)
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Why loading failed, if it did.
    pub fn load_error(&self) -> Option<&DictionaryError> {
        self.load_error.as_ref()
    }
}

impl From<PhonemeDictionary> for FallbackDictionary {
    fn from(dict: PhonemeDictionary) -> Self {
        Self { dict, load_error: None }
    }
}

/// CMU dictionary lookup with a fallback table.
///
/// Words are lower-cased before lookup. A miss in both tables returns `None`.
#[derive(Debug)]
pub struct DictionaryRetriever {
    primary: PhonemeDictionary,
    fallback: FallbackDictionary,
}

impl DictionaryRetriever {
    pub fn new(primary: PhonemeDictionary, fallback: FallbackDictionary) -> Self {
        Self { primary, fallback }
    }

    /// Load the primary CMU dictionary and, if given, the fallback file.
    ///
    /// Only a failure on the primary file is an error.
    pub fn load(cmu_dict: &Path, fallback: Option<&Path>) -> Result<Self, DictionaryError> {
        let primary = PhonemeDictionary::load_cmudict(cmu_dict)?;
        let fallback = fallback.map(FallbackDictionary::load).unwrap_or_default();
        Ok(Self::new(primary, fallback))
    }

    pub fn primary(&self) -> &PhonemeDictionary {
        &self.primary
    }

    pub fn fallback(&self) -> &FallbackDictionary {
        &self.fallback
    }
}

impl PhonemeRetriever for DictionaryRetriever {
    fn name(&self) -> &str {
        "dict"
    }

    fn get_phonemes(&self, word: &str) -> Option<Vec<String>> {
        let key = word.to_lowercase();
        self.primary
            .get(&key)
            .or_else(|| self.fallback.get(&key))
            .map(<[String]>::to_vec)
    }
}
