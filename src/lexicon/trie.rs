use std::fmt::{Debug, Formatter};
use std::str::Chars;

use tracing::trace;

use crate::alphabet::normalize;
use crate::lexicon::iterators::Words;
use crate::lexicon::node::Node;

/// A set of lowercase words stored as a prefix tree.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub(crate) root: Node,
    count: usize,
}

impl Lexicon {
    pub fn new() -> Lexicon {
        Default::default()
    }

    /// Adds `word` (lower-cased). Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if self.contains(&word) {
            trace!(word = %word, "already present");
            return false;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_insert(c);
        }
        current.mark_word();
        self.count += 1;
        trace!(word = %word, count = self.count, "inserted");
        true
    }

    /// Inserts every word, returning how many were new.
    pub fn insert_all<'f, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().filter(|x| self.insert(x)).count()
    }

    /// Removes `word`, pruning every node on its path that no longer leads to a
    /// word. Returns `false`, leaving the tree untouched, if it was absent.
    pub fn delete(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if !self.contains(&word) {
            trace!(word = %word, "not present");
            return false;
        }
        self.count -= 1;
        Self::unwind(&mut self.root, word.chars());
        trace!(word = %word, count = self.count, "deleted");
        true
    }

    /// Clears the terminal mark at the end of `rest` and reports whether `node`
    /// is now dead. Pruning stops at the first node that must be kept.
    fn unwind(node: &mut Node, mut rest: Chars) -> bool {
        match rest.next() {
            None => {
                node.unmark_word();
                node.is_leafless()
            }
            Some(c) => {
                let dead = match node.child_mut(c) {
                    Some(child) => Self::unwind(child, rest),
                    None => return false,
                };
                if !dead {
                    return false;
                }
                node.remove_child(c);
                node.is_leafless() && !node.is_terminal()
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(&normalize(word))
            .map(|x| x.is_terminal())
            .unwrap_or(false)
    }

    /// Whether any word starts with `prefix`. The empty prefix always matches.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.get_node(&normalize(prefix)).is_some()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All words in ascending order.
    pub fn words(&self) -> Words<'_> {
        self.root.words("")
    }

    /// All words starting with `prefix`, in ascending order.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let prefix = normalize(prefix);
        match self.get_node(&prefix) {
            Some(node) => node.words(&prefix),
            None => Words::empty(),
        }
    }

    /// Number of vertices below the root.
    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.root.traverse_prefix(&mut |_| n += 1);
        n - 1
    }

    pub(crate) fn get_node(&self, path: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in path.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }
}

impl<'f> Extend<&'f str> for Lexicon {
    fn extend<I: IntoIterator<Item=&'f str>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'f> FromIterator<&'f str> for Lexicon {
    fn from_iter<I: IntoIterator<Item=&'f str>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        lexicon.extend(iter);
        lexicon
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}

impl Debug for Lexicon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut |x| { l.entry(x); });
        l.finish()
    }
}
