//! Lookup table with closest-prefix resolution for unknown keys.

use std::collections::BTreeMap;

/// Phoneme table that resolves unseen symbols to the known symbol sharing
/// the longest prefix with them.
///
/// Ties go to the first candidate in lexicographic key order, so `AH` resolves
/// to `AH0` rather than `AH1`.
#[derive(Debug, Clone, Default)]
pub struct PrefixMap {
    table: BTreeMap<String, String>,
}

impl PrefixMap {
    pub fn new<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let table = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { table }
    }

    /// Value for the known symbol closest to `symbol`.
    ///
    /// An exact key always wins. An empty table yields `""`.
    pub fn closest(&self, symbol: &str) -> &str {
        if let Some(value) = self.table.get(symbol) {
            return value;
        }

        let mut best: Option<(&String, usize)> = None;
        for (key, value) in &self.table {
            let len = common_prefix_len(symbol, key);
            let better = match best {
                Some((_, best_len)) => len > best_len,
                None => true,
            };
            if better {
                best = Some((value, len));
            }
        }
        best.map_or("", |(value, _)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Every value the table can return.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.table.values().map(String::as_str)
    }
}

/// Number of leading characters `a` and `b` have in common.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vowels() -> PrefixMap {
        PrefixMap::new([("AH0", "a"), ("AH1", "A"), ("AO0", "o"), ("B", "b")])
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("AH1", "AH0"), 2);
        assert_eq!(common_prefix_len("AH", "AH0"), 2);
        assert_eq!(common_prefix_len("B", "AH0"), 0);
        assert_eq!(common_prefix_len("", "AH0"), 0);
    }

    #[test]
    fn test_exact_match() {
        let map = vowels();
        assert_eq!(map.closest("AH1"), "A");
        assert_eq!(map.closest("B"), "b");
    }

    #[test]
    fn test_tie_goes_to_first_sorted_key() {
        let map = vowels();
        // AH0 and AH1 both share two characters with AH2
        assert_eq!(map.closest("AH2"), "a");
        assert_eq!(map.closest("AH"), "a");
    }

    #[test]
    fn test_tie_break_independent_of_insertion_order() {
        let map = PrefixMap::new([("B", "b"), ("AH1", "A"), ("AO0", "o"), ("AH0", "a")]);
        assert_eq!(map.closest("AH2"), "a");
    }

    #[test]
    fn test_tie_break_is_stable() {
        let map = vowels();
        let first = map.closest("AH9").to_string();
        for _ in 0..10 {
            assert_eq!(map.closest("AH9"), first);
        }
    }

    #[test]
    fn test_no_shared_prefix_falls_to_first_key() {
        let map = vowels();
        assert_eq!(map.closest("ZH"), "a");
        assert_eq!(map.closest(""), "a");
    }

    #[test]
    fn test_result_always_from_value_set() {
        let map = vowels();
        let values: Vec<&str> = map.values().collect();
        for symbol in ["AH", "AO1", "AX", "BB", "Q", "ÄH", "12"] {
            assert!(values.contains(&map.closest(symbol)));
        }
    }

    #[test]
    fn test_empty_table() {
        let map = PrefixMap::default();
        assert!(map.is_empty());
        assert_eq!(map.closest("AH"), "");
    }
}
