//! Orthographic clean-up of raw Arabic transliterations.
//!
//! Each rule is a pure string rewrite. `ArabicRules::apply` runs them once
//! each, in order; no rule is revisited after a later one fires.

use super::TranslitRules;

const FATHA: char = '\u{064E}';
const DAMMA: char = '\u{064F}';
const KASRA: char = '\u{0650}';

const ALEF_HAMZA_ABOVE: char = 'أ';
const ALEF_HAMZA_BELOW: char = 'إ';
const NOON: char = 'ن';
const QAF: char = 'ق';
const GHAIN: char = 'غ';

const SHORT_VOWELS: &[char] = &[FATHA, DAMMA, KASRA];
const LONG_VOWELS: &[char] = &['ا', 'أ', 'و', 'ي', 'ى'];
const CONSONANTS: &[char] = &[
    'ب', 'ت', 'ث', 'ج', 'ح', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن',
    'ه',
];

/// A single rewrite step.
pub type Rule = fn(&str) -> String;

/// Rules in application order.
pub const RULES: &[(&str, Rule)] = &[
    ("initial_fatha_damma", initial_fatha_damma),
    ("initial_kasra", initial_kasra),
    ("final_short_vowel", final_short_vowel),
    ("leading_short_vowel", leading_short_vowel),
    ("final_noon_qaf", final_noon_qaf),
    ("medial_noon_qaf", medial_noon_qaf),
];

/// Long-vowel letter written in place of a short-vowel mark.
pub fn lengthen(short: char) -> Option<char> {
    match short {
        FATHA => Some('و'),
        DAMMA => Some('ا'),
        KASRA => Some('ي'),
        _ => None,
    }
}

fn is_short_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c)
}

fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

/// Swap the first character for `replacement` if `pred` holds for it.
fn replace_first(text: &str, pred: impl Fn(char) -> bool, replacement: char) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if pred(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(replacement);
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}

/// Word-initial fatha or damma becomes alef with hamza above.
pub fn initial_fatha_damma(text: &str) -> String {
    replace_first(text, |c| c == FATHA || c == DAMMA, ALEF_HAMZA_ABOVE)
}

/// Word-initial kasra becomes alef with hamza below.
pub fn initial_kasra(text: &str) -> String {
    replace_first(text, |c| c == KASRA, ALEF_HAMZA_BELOW)
}

/// A short vowel ending the word is written as its long vowel.
pub fn final_short_vowel(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if let Some(long) = chars.last().copied().and_then(lengthen) {
        if let Some(last) = chars.last_mut() {
            *last = long;
        }
    }
    chars.into_iter().collect()
}

/// Text opening with long vowel, consonant, short vowel has the short
/// vowel lengthened.
pub fn leading_short_vowel(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() >= 3 && LONG_VOWELS.contains(&chars[0]) && is_consonant(chars[1]) {
        if let Some(long) = lengthen(chars[2]) {
            chars[2] = long;
        }
    }
    chars.into_iter().collect()
}

/// Final noon-qaf is respelled noon-ghain.
pub fn final_noon_qaf(text: &str) -> String {
    match text.strip_suffix("نق") {
        Some(stem) => format!("{}{}{}", stem, NOON, GHAIN),
        None => text.to_string(),
    }
}

/// Noon-qaf directly before a consonant loses the qaf.
///
/// Left-to-right, non-overlapping; the consonant that licenses a match is
/// not consumed and may start the next one.
pub fn medial_noon_qaf(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let licensed = chars[i] == NOON
            && chars.get(i + 1) == Some(&QAF)
            && chars.get(i + 2).is_some_and(|&c| is_consonant(c));
        out.push(chars[i]);
        i += if licensed { 2 } else { 1 };
    }
    out
}

/// The Arabic rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicRules;

impl TranslitRules for ArabicRules {
    fn apply(&self, text: &str) -> String {
        RULES.iter().fold(text.to_string(), |acc, (name, rule)| {
            let out = rule(&acc);
            if out != acc {
                log::trace!("rule {}: {} -> {}", name, acc, out);
            }
            out
        })
    }
}
