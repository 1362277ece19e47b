//! Exhaustive search for the best completion below a node.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

use super::node::{Terminal, TrieNode};

/// Returns the best-ranked terminal in the subtree rooted at `start`,
/// including `start` itself.
///
/// Every node below `start` is visited, so the result does not depend on
/// traversal order: ties on count always resolve to the lexicographically
/// smallest word (see [`Terminal::rank`]). The work stack grows on demand,
/// so neither depth nor fan-out is bounded.
pub fn best_terminal(start: &TrieNode) -> Option<&Terminal> {
    let mut best: Option<&Terminal> = None;
    let mut stack: SmallVec<[&TrieNode; 32]> = smallvec![start];
    while let Some(node) = stack.pop() {
        if let Some(candidate) = node.terminal() {
            if best.map_or(true, |b| candidate.rank(b) == Ordering::Greater) {
                best = Some(candidate);
            }
        }
        stack.extend(node.children().map(|(_, child)| child));
    }
    best
}
