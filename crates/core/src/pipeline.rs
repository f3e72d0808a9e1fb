//! Word -> phonemes -> per-phoneme spelling -> rule-corrected spelling.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::phoneme::PhonemeRetriever;
use crate::translit::{ArabicMap, ArabicRules, TranslitMap, TranslitRules};
use crate::types::Transphonation;

/// Three-stage transphonation pipeline.
///
/// Holds no mutable state, so one instance can serve many threads.
pub struct TranslitPipeline {
    retriever: Box<dyn PhonemeRetriever>,
    map: Box<dyn TranslitMap>,
    rules: Box<dyn TranslitRules>,
}

impl TranslitPipeline {
    pub fn new(
        retriever: Box<dyn PhonemeRetriever>,
        map: Box<dyn TranslitMap>,
        rules: Box<dyn TranslitRules>,
    ) -> Self {
        Self { retriever, map, rules }
    }

    /// English-to-Arabic pipeline around `retriever`.
    pub fn arabic(retriever: Box<dyn PhonemeRetriever>) -> Self {
        Self::new(retriever, Box::new(ArabicMap::new()), Box::new(ArabicRules))
    }

    pub fn retriever(&self) -> &dyn PhonemeRetriever {
        self.retriever.as_ref()
    }

    /// Transliterate `word`, or `None` if no phonemes were found for it.
    pub fn transphonate(&self, word: &str) -> Option<String> {
        let phonemes = match self.retriever.get_phonemes(word) {
            Some(p) if !p.is_empty() => p,
            _ => {
                log::debug!("No phonemes for '{}'", word);
                return None;
            }
        };

        let raw: String = phonemes
            .iter()
            .map(|p| self.map.get_equivalent(p))
            .collect();

        Some(self.rules.apply(&raw))
    }

    /// Transphonate every word, keeping input order.
    pub fn transphonate_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<Transphonation> {
        #[cfg(feature = "parallel")]
        let iter = words.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = words.iter();

        iter.map(|word| {
            let word = word.as_ref();
            Transphonation {
                word: word.to_string(),
                transliteration: self.transphonate(word),
            }
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::{
        DictionaryRetriever, FallbackDictionary, LetterToSound, ModelRetriever, PhonemeDictionary,
    };
    use crate::translit::PrefixMap;
    use std::io::Write;

    const CMU_SAMPLE: &str = ";;; sample
HELLO  HH AH0 L OW1
ULF  AH1 L F
KING  K IH1 NG
EMPTYISH  B
";

    fn arabic_from_cmu(fallback: FallbackDictionary) -> TranslitPipeline {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CMU_SAMPLE.as_bytes()).unwrap();
        let primary = PhonemeDictionary::load_cmudict(file.path()).unwrap();
        TranslitPipeline::arabic(Box::new(DictionaryRetriever::new(primary, fallback)))
    }

    /// Retriever that knows nothing.
    struct Silent;

    impl PhonemeRetriever for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        fn get_phonemes(&self, _word: &str) -> Option<Vec<String>> {
            Some(vec![])
        }
    }

    /// Rules that tag their input so tests can count invocations.
    struct Bracket;

    impl TranslitRules for Bracket {
        fn apply(&self, text: &str) -> String {
            format!("[{}]", text)
        }
    }

    struct Latin(PrefixMap);

    impl TranslitMap for Latin {
        fn get_equivalent(&self, phoneme: &str) -> &str {
            self.0.closest(phoneme)
        }
    }

    #[test]
    fn test_hello_literal() {
        let pipeline = arabic_from_cmu(FallbackDictionary::default());
        // HH AH L OW, no rule applies
        assert_eq!(
            pipeline.transphonate("hello").as_deref(),
            Some("ه\u{064E}ال\u{064F}و")
        );
    }

    #[test]
    fn test_case_insensitive() {
        let pipeline = arabic_from_cmu(FallbackDictionary::default());
        assert_eq!(pipeline.transphonate("Hello"), pipeline.transphonate("HELLO"));
    }

    #[test]
    fn test_unknown_word_is_none() {
        let pipeline = arabic_from_cmu(FallbackDictionary::default());
        assert_eq!(pipeline.transphonate("zzqx"), None);
    }

    #[test]
    fn test_known_words_are_non_empty() {
        let pipeline = arabic_from_cmu(FallbackDictionary::default());
        for word in ["hello", "ulf", "king", "emptyish"] {
            let out = pipeline.transphonate(word).unwrap();
            assert!(!out.is_empty(), "{}", word);
        }
    }

    #[test]
    fn test_stressless_ah_in_primary() {
        // AH (stress stripped) resolves to AH0, giving fatha + alef; the
        // initial fatha then becomes alef with hamza
        let pipeline = arabic_from_cmu(FallbackDictionary::default());
        assert_eq!(pipeline.transphonate("ulf").as_deref(), Some("أالف"));
    }

    #[test]
    fn test_fallback_keeps_stress() {
        let fallback: PhonemeDictionary =
            [("naruhito", ["N", "AH1"].map(String::from).to_vec())].into_iter().collect();
        let pipeline = arabic_from_cmu(fallback.into());
        // AH1 maps to alef-hamza + damma; the final damma is lengthened to alef
        assert_eq!(pipeline.transphonate("Naruhito").as_deref(), Some("نأا"));
    }

    #[test]
    fn test_missing_fallback_behaves_like_primary_only() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = FallbackDictionary::load(&dir.path().join("phonenems_en.txt"));
        let with_missing = arabic_from_cmu(fallback);
        let primary_only = arabic_from_cmu(FallbackDictionary::default());
        for word in ["hello", "ulf", "king", "zzqx"] {
            assert_eq!(with_missing.transphonate(word), primary_only.transphonate(word));
        }
    }

    #[test]
    fn test_empty_phonemes_short_circuit() {
        let pipeline = TranslitPipeline::new(
            Box::new(Silent),
            Box::new(ArabicMap::new()),
            Box::new(Bracket),
        );
        // rules never ran, otherwise we'd see "[]"
        assert_eq!(pipeline.transphonate("anything"), None);
    }

    #[test]
    fn test_rules_applied_once_to_concatenation() {
        let map = Latin(PrefixMap::new([("HH", "h"), ("AH0", "a"), ("L", "l"), ("OW0", "o")]));
        let pipeline = TranslitPipeline::new(
            Box::new(ModelRetriever::new(LetterToSound)),
            Box::new(map),
            Box::new(Bracket),
        );
        // "hal": HH AE1 L -> h, a (closest AH0), l
        assert_eq!(pipeline.transphonate("hal").as_deref(), Some("[hal]"));
    }

    #[test]
    fn test_model_retriever_pipeline() {
        let pipeline = TranslitPipeline::arabic(Box::new(ModelRetriever::new(LetterToSound)));
        assert!(pipeline.transphonate("kristersson").is_some());
        assert_eq!(pipeline.transphonate("!?"), None);
    }

    #[test]
    fn test_transphonate_all_keeps_order() {
        let pipeline = arabic_from_cmu(FallbackDictionary::default());
        let words = ["king", "zzqx", "hello", "ulf"];
        let results = pipeline.transphonate_all(&words[..]);
        assert_eq!(results.len(), 4);
        for (result, word) in results.iter().zip(words) {
            assert_eq!(result.word, word);
            assert_eq!(result.transliteration, pipeline.transphonate(word));
        }
        assert!(!results[1].is_translated());
    }
}
