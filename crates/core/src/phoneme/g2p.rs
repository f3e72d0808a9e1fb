//! Model-backed phoneme retrieval.
//!
//! A grapheme-to-phoneme model may emit more than phonemes (spaces,
//! punctuation, pause markers). `ModelRetriever` keeps only tokens that look
//! like ARPABET symbols.

use regex::Regex;

use super::PhonemeRetriever;

lazy_static::lazy_static! {
    /// Uppercase letters, optionally followed by one stress digit.
    static ref PHONEME_TOKEN: Regex = Regex::new(r"^[A-Z]+[0-9]?$").unwrap();
}

/// True if `token` is shaped like an ARPABET phoneme (`K`, `AE1`, `NG`).
pub fn is_phoneme_token(token: &str) -> bool {
    PHONEME_TOKEN.is_match(token)
}

/// A grapheme-to-phoneme model.
pub trait GraphemeToPhoneme: Send + Sync {
    fn name(&self) -> &str;

    /// Raw model output for `word`, phonemes mixed with any other tokens.
    fn convert(&self, word: &str) -> Vec<String>;
}

/// Retriever that delegates to a grapheme-to-phoneme model.
///
/// Never returns `None`; a word the model cannot handle yields an empty list.
pub struct ModelRetriever<G> {
    model: G,
}

impl<G: GraphemeToPhoneme> ModelRetriever<G> {
    pub fn new(model: G) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &G {
        &self.model
    }
}

impl<G: GraphemeToPhoneme> PhonemeRetriever for ModelRetriever<G> {
    fn name(&self) -> &str {
        self.model.name()
    }

    fn get_phonemes(&self, word: &str) -> Option<Vec<String>> {
        let phonemes: Vec<String> = self
            .model
            .convert(word)
            .into_iter()
            .filter(|token| is_phoneme_token(token))
            .collect();
        if phonemes.is_empty() {
            log::debug!("{} produced no phonemes for '{}'", self.model.name(), word);
        }
        Some(phonemes)
    }
}

/// Rule-based English letter-to-sound conversion.
///
/// A best-effort approximation: digraphs first, then single letters.
/// Characters that are not ASCII letters come through as raw tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterToSound;

const DIGRAPHS: &[(&str, &[&str])] = &[
    ("th", &["TH"]),
    ("sh", &["SH"]),
    ("ch", &["CH"]),
    ("ng", &["NG"]),
    ("ph", &["F"]),
    ("wh", &["W"]),
    ("ck", &["K"]),
    ("ee", &["IY1"]),
    ("ea", &["IY1"]),
    ("oo", &["UW1"]),
    ("ou", &["AW1"]),
    ("ow", &["OW1"]),
    ("ai", &["EY1"]),
    ("ay", &["EY1"]),
    ("oi", &["OY1"]),
    ("oy", &["OY1"]),
];

impl GraphemeToPhoneme for LetterToSound {
    fn name(&self) -> &str {
        "g2p"
    }

    fn convert(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        let mut tokens: Vec<String> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if i + 1 < chars.len() {
                let pair: String = chars[i..i + 2].iter().collect();
                if let Some((_, phonemes)) = DIGRAPHS.iter().find(|(d, _)| *d == pair) {
                    tokens.extend(phonemes.iter().map(|p| p.to_string()));
                    i += 2;
                    continue;
                }
            }

            let next = chars.get(i + 1).copied();
            let phonemes: &[&str] = match chars[i] {
                'a' => &["AE1"],
                'b' => &["B"],
                // c before e/i/y = S, otherwise K
                'c' if matches!(next, Some('e' | 'i' | 'y')) => &["S"],
                'c' => &["K"],
                'd' => &["D"],
                // silent e at end of word
                'e' if next.is_none() && !tokens.is_empty() => &[],
                'e' => &["EH1"],
                'f' => &["F"],
                'g' => &["G"],
                'h' => &["HH"],
                'i' => &["IH1"],
                'j' => &["JH"],
                'k' | 'q' => &["K"],
                'l' => &["L"],
                'm' => &["M"],
                'n' => &["N"],
                'o' => &["AA1"],
                'p' => &["P"],
                'r' => &["R"],
                's' => &["S"],
                't' => &["T"],
                'u' => &["AH1"],
                'v' => &["V"],
                'w' => &["W"],
                'x' => &["K", "S"],
                'y' if tokens.is_empty() => &["Y"],
                'y' => &["IY1"],
                'z' => &["Z"],
                other => {
                    tokens.push(other.to_string());
                    i += 1;
                    continue;
                }
            };
            tokens.extend(phonemes.iter().map(|p| p.to_string()));
            i += 1;
        }

        tokens
    }
}
