//! Bidirectional breadth-first search
//!
//! Expands from the source and the destination at once, one node per side
//! per round, until a word shows up in both visited maps. Searching from
//! both ends halves the effective search depth.

use super::strategy::Strategy;
use crate::core::{Dictionary, Word, is_adjacent};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

const SOURCE_SIDE: usize = 0;
const DESTINATION_SIDE: usize = 1;

/// A discovered word and its distance in edges from the side's anchor
struct SearchNode {
    word: String,
    level: usize,
}

/// Per-direction traversal state
///
/// The two states live side by side in an array; each round addresses the
/// opposite side by index, so neither owns the other.
struct DirectionState {
    frontier: VecDeque<SearchNode>,
    visited: FxHashMap<String, usize>,
}

impl DirectionState {
    fn anchored(anchor: &Word) -> Self {
        let mut visited = FxHashMap::default();
        visited.insert(anchor.as_str().to_string(), 0);

        let mut frontier = VecDeque::new();
        frontier.push_back(SearchNode {
            word: anchor.as_str().to_string(),
            level: 0,
        });

        Self { frontier, visited }
    }
}

/// Meet-in-the-middle search from both endpoints
pub struct BidirectionalStrategy;

impl Strategy for BidirectionalStrategy {
    fn search(&self, source: &Word, destination: &Word, dictionary: &Dictionary) -> Vec<String> {
        let mut sides = [
            DirectionState::anchored(source),
            DirectionState::anchored(destination),
        ];

        while !sides[SOURCE_SIDE].frontier.is_empty()
            && !sides[DESTINATION_SIDE].frontier.is_empty()
        {
            // Source side first every round, for reproducible results
            for side in 0..sides.len() {
                let Some(node) = sides[side].frontier.pop_front() else {
                    continue;
                };

                for word in dictionary.iter() {
                    let is_unvisited_neighbor =
                        is_adjacent(&node.word, word) && !sides[side].visited.contains_key(word);
                    if is_unvisited_neighbor {
                        let level = node.level + 1;
                        sides[side].visited.insert(word.to_string(), level);
                        sides[side].frontier.push_back(SearchNode {
                            word: word.to_string(),
                            level,
                        });

                        // A word known to both sides joins the two half-paths
                        if sides[1 - side].visited.contains_key(word) {
                            return backtrack(word, &sides[SOURCE_SIDE], &sides[DESTINATION_SIDE]);
                        }
                    }
                }
            }
        }

        Vec::new()
    }
}

/// Rebuild the full ladder around the meeting word
///
/// Walks the source-anchored side for the forward half and the
/// destination-anchored side for the backward half, whichever direction
/// produced the meeting event.
fn backtrack(meeting: &str, forward: &DirectionState, backward: &DirectionState) -> Vec<String> {
    let mut ladder = chain_to_anchor(forward, meeting);
    ladder.reverse();

    ladder.push(meeting.to_string());
    ladder.extend(chain_to_anchor(backward, meeting));

    ladder
}

/// Walk one edge at a time from the meeting word down to the side's anchor
///
/// Every visited word at level L was discovered from some word at level
/// L - 1, so an adjacent predecessor always exists at each step. The chain
/// excludes the meeting word and ends on the anchor.
fn chain_to_anchor(state: &DirectionState, meeting: &str) -> Vec<String> {
    let meeting_level = *state
        .visited
        .get(meeting)
        .expect("meeting word is recorded on both sides");

    let mut chain = Vec::with_capacity(meeting_level);
    let mut current = meeting;

    for level in (0..meeting_level).rev() {
        let predecessor = state
            .visited
            .iter()
            .filter(|&(_, &visited_level)| visited_level == level)
            .map(|(word, _)| word.as_str())
            .find(|candidate| is_adjacent(candidate, current))
            .expect("every visited word has an adjacent predecessor one level closer");

        chain.push(predecessor.to_string());
        current = predecessor;
    }

    chain
}
