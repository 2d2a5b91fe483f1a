//! Prepared search dictionary
//!
//! Raw word lists arrive as arbitrary text lines. Preparation normalizes
//! case, validates that both query words are present, then narrows the set
//! to words of the query length. The result is immutable for the lifetime
//! of a solve; repeated solves each prepare a fresh copy so they can never
//! interfere with each other.

use super::adjacency::is_adjacent;
use super::error::SolveError;
use super::word::Word;
use rustc_hash::FxHashSet;

/// A deduplicated, lowercase, length-filtered word set
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    word_len: usize,
}

impl Dictionary {
    /// Build a dictionary from raw lines for a specific source/destination pair
    ///
    /// Membership of the query words is checked against the normalized
    /// superset, before the length filter discards anything. Normalization
    /// has to come first because the raw list may differ in case from the
    /// query words.
    ///
    /// # Errors
    /// Returns `SolveError::InvalidDictionary` if the raw input is empty or
    /// if either query word is absent after normalization.
    pub fn prepare(
        raw_lines: &[String],
        source: &Word,
        destination: &Word,
    ) -> Result<Self, SolveError> {
        if raw_lines.is_empty() {
            return Err(SolveError::InvalidDictionary);
        }

        let normalized: Vec<String> = raw_lines
            .iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();

        let contains_query_words = normalized.iter().any(|word| word == source.as_str())
            && normalized.iter().any(|word| word == destination.as_str());
        if !contains_query_words {
            return Err(SolveError::InvalidDictionary);
        }

        let word_len = source.len();
        let words: FxHashSet<String> = normalized
            .into_iter()
            .filter(|word| word.len() == word_len)
            .collect();

        Ok(Self { words, word_len })
    }

    /// Check membership of a (normalized) word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the prepared set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the prepared set holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The common length of every member word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Iterate over the prepared words
    ///
    /// Iteration order is unspecified but stable for a given preparation.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Collect the words adjacent to the given word
    pub fn neighbors_of(&self, word: &str) -> Vec<&str> {
        self.iter().filter(|entry| is_adjacent(entry, word)).collect()
    }

    /// Remove a word from the set
    ///
    /// For strategies that track the source word separately from the
    /// dictionary. Returns true if the word was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn query(word: &str) -> Word {
        Word::new(word).unwrap()
    }

    #[test]
    fn prepare_filters_to_query_length() {
        let lines = raw(&["same", "came", "longer", "ox", "cost"]);
        let dictionary = Dictionary::prepare(&lines, &query("same"), &query("cost")).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("same"));
        assert!(dictionary.contains("came"));
        assert!(dictionary.contains("cost"));
        assert!(!dictionary.contains("longer"));
        assert!(!dictionary.contains("ox"));
        assert_eq!(dictionary.word_len(), 4);
    }

    #[test]
    fn prepare_normalizes_and_deduplicates() {
        let lines = raw(&["SAME", "Same", "same", "COST"]);
        let dictionary = Dictionary::prepare(&lines, &query("same"), &query("cost")).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("same"));
        assert!(dictionary.contains("cost"));
    }

    #[test]
    fn prepare_checks_membership_before_length_filter() {
        // "cost" would survive filtering either way; the membership test runs
        // against the normalized superset that still holds "verylongword"
        let lines = raw(&["verylongword", "same", "cost"]);
        let dictionary = Dictionary::prepare(&lines, &query("same"), &query("cost")).unwrap();

        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn prepare_rejects_empty_input() {
        let lines: Vec<String> = Vec::new();
        let result = Dictionary::prepare(&lines, &query("same"), &query("cost"));

        assert_eq!(result.unwrap_err(), SolveError::InvalidDictionary);
    }

    #[test]
    fn prepare_rejects_missing_source() {
        let lines = raw(&["came", "case", "cost"]);
        let result = Dictionary::prepare(&lines, &query("same"), &query("cost"));

        assert_eq!(result.unwrap_err(), SolveError::InvalidDictionary);
    }

    #[test]
    fn prepare_rejects_missing_destination() {
        let lines = raw(&["same", "came", "case"]);
        let result = Dictionary::prepare(&lines, &query("same"), &query("cost"));

        assert_eq!(result.unwrap_err(), SolveError::InvalidDictionary);
    }

    #[test]
    fn prepare_accepts_differently_cased_dictionary() {
        let lines = raw(&["SAME", "CAME", "COST"]);
        let dictionary = Dictionary::prepare(&lines, &query("same"), &query("cost")).unwrap();

        assert!(dictionary.contains("came"));
    }

    #[test]
    fn neighbors_of_finds_adjacent_words() {
        let lines = raw(&["same", "came", "case", "cast", "cost"]);
        let dictionary = Dictionary::prepare(&lines, &query("same"), &query("cost")).unwrap();

        let mut neighbors = dictionary.neighbors_of("case");
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["came", "cast"]);
    }

    #[test]
    fn remove_takes_word_out() {
        let lines = raw(&["same", "came", "cost"]);
        let mut dictionary = Dictionary::prepare(&lines, &query("same"), &query("cost")).unwrap();

        assert!(dictionary.remove("same"));
        assert!(!dictionary.contains("same"));
        assert!(!dictionary.remove("same"));
        assert_eq!(dictionary.len(), 2);
    }
}
