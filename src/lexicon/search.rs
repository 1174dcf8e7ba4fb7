use std::collections::{BTreeSet, HashSet};

use crate::alphabet::normalize;
use crate::lexicon::node::Node;
use crate::lexicon::pattern::{Pattern, Symbol};
use crate::lexicon::trie::Lexicon;

impl Lexicon {
    /// Words of exactly the target's length that differ from it in at most
    /// `max_distance` positions. Only substitutions count; no insertions or
    /// deletions are considered.
    pub fn suggest(&self, target: &str, max_distance: usize) -> BTreeSet<String> {
        let target: Vec<char> = normalize(target).chars().collect();
        let mut results = BTreeSet::new();
        let mut path = String::with_capacity(target.len());
        Self::suggest_from(&self.root, &target, max_distance, &mut path, &mut results);
        results
    }

    // `target` holds the letters still to match, one per level below `node`.
    fn suggest_from(node: &Node,
                    target: &[char],
                    budget: usize,
                    path: &mut String,
                    results: &mut BTreeSet<String>) {
        let (expected, rest) = match target.split_first() {
            None => {
                if node.is_terminal() {
                    results.insert(path.clone());
                }
                return;
            }
            Some(x) => x,
        };

        for child in node.children() {
            let remaining = if child.character() == *expected {
                budget
            } else if budget > 0 {
                budget - 1
            } else {
                continue;
            };
            path.push(child.character());
            Self::suggest_from(child, rest, remaining, path, results);
            path.pop();
        }
    }

    /// Words matching a pattern of letters, `?`/`_` (one letter) and `*` (any
    /// run of letters, including none). The pattern is not validated.
    pub fn match_wildcard(&self, pattern: &str) -> BTreeSet<String> {
        self.match_pattern(&Pattern::unchecked(&normalize(pattern)))
    }

    pub fn match_pattern(&self, pattern: &Pattern) -> BTreeSet<String> {
        let mut results = BTreeSet::new();
        if pattern.is_literal() {
            let word: String = pattern.symbols().iter().filter_map(|x| match x {
                Symbol::Letter(c) => Some(*c),
                _ => None,
            }).collect();
            if self.contains(&word) {
                results.insert(word);
            }
            return results;
        }
        let mut walk = PatternWalk {
            pattern: pattern.symbols(),
            visited: HashSet::new(),
            path: String::new(),
            results,
        };
        walk.visit(&self.root, 0);
        walk.results
    }
}

/// Depth-first match of a pattern against the tree. A node fixes the path that
/// reaches it, so the words found from a (node, pattern position) pair never
/// change and each pair is expanded at most once.
struct PatternWalk<'a> {
    pattern: &'a [Symbol],
    visited: HashSet<(*const Node, usize)>,
    path: String,
    results: BTreeSet<String>,
}

impl<'a> PatternWalk<'a> {
    fn visit(&mut self, node: &Node, at: usize) {
        if !self.visited.insert((node as *const Node, at)) {
            return;
        }
        let symbol = match self.pattern.get(at) {
            None => {
                if node.is_terminal() {
                    self.results.insert(self.path.clone());
                }
                return;
            }
            Some(x) => *x,
        };

        match symbol {
            Symbol::Letter(c) => {
                if let Some(child) = node.child(c) {
                    self.descend(child, at + 1);
                }
            }
            Symbol::AnyOne => {
                for child in node.children() {
                    self.descend(child, at + 1);
                }
            }
            Symbol::AnyRun => {
                // zero letters here, or one more letter with the run still open
                self.visit(node, at + 1);
                for child in node.children() {
                    self.descend(child, at);
                }
            }
        }
    }

    fn descend(&mut self, child: &Node, at: usize) {
        self.path.push(child.character());
        self.visit(child, at);
        self.path.pop();
    }
}
