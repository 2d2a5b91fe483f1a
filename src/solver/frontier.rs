//! Single-ended level-order search
//!
//! Expands whole generations of candidate ladders: every path of length N is
//! examined before any path of length N + 1, so the first ladder to reach the
//! destination is a shortest one by construction. Sibling ladders share no
//! state and may revisit the same word within a generation; each ladder only
//! refuses words it already stepped on itself.

use super::strategy::Strategy;
use crate::core::{Dictionary, Word};

/// A growing candidate ladder, source word first
///
/// Extension clones the ladder, so superseded generations are never mutated.
#[derive(Debug, Clone)]
struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    fn start(source: &Word) -> Self {
        Self {
            words: vec![source.as_str().to_string()],
        }
    }

    /// The frontier word this ladder currently ends on
    fn current(&self) -> &str {
        self.words
            .last()
            .expect("a ladder always holds at least the source word")
    }

    fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|step| step == word)
    }

    fn extended(&self, word: &str) -> Self {
        let mut words = self.words.clone();
        words.push(word.to_string());
        Self { words }
    }

    fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// Level-order expansion from the source word only
pub struct FrontierStrategy;

impl Strategy for FrontierStrategy {
    fn search(&self, source: &Word, destination: &Word, dictionary: &Dictionary) -> Vec<String> {
        let mut frontier = vec![Ladder::start(source)];

        while !frontier.is_empty() {
            let mut next_generation = Vec::new();

            for ladder in frontier {
                let neighbors: Vec<&str> = dictionary
                    .neighbors_of(ladder.current())
                    .into_iter()
                    .filter(|word| !ladder.contains(word))
                    .collect();

                // First ladder to reach the destination wins the generation
                if neighbors.contains(&destination.as_str()) {
                    return ladder.extended(destination.as_str()).into_words();
                }

                for neighbor in neighbors {
                    next_generation.push(ladder.extended(neighbor));
                }
            }

            frontier = next_generation;
        }

        Vec::new()
    }
}
