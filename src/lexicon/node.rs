use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::lexicon::iterators::Words;

/// Letter carried by the root, which stands for the empty prefix.
pub(crate) const ROOT_SENTINEL: char = '\0';

/// One vertex of the trie. Children are keyed and ordered by their letter, so a
/// depth-first walk visits words in lexicographic order.
#[derive(new, Clone, PartialEq, Eq)]
pub struct Node {
    character: char,
    #[new(default)]
    children: BTreeMap<char, Node>,
    #[new(default)]
    terminal: bool,
}

impl Default for Node {
    fn default() -> Self {
        Node::new(ROOT_SENTINEL)
    }
}

impl Node {
    pub fn character(&self) -> char {
        self.character
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// No children left; a leafless node that is not terminal must be pruned.
    pub fn is_leafless(&self) -> bool {
        self.children.is_empty()
    }

    pub fn mark_word(&mut self) {
        self.terminal = true;
    }

    pub fn unmark_word(&mut self) {
        self.terminal = false;
    }

    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    pub fn child_mut(&mut self, c: char) -> Option<&mut Node> {
        self.children.get_mut(&c)
    }

    /// Adds a fresh child for `c`. The caller guarantees `c` is not present yet.
    pub fn add_child(&mut self, c: char) -> &mut Node {
        debug_assert!(!self.children.contains_key(&c), "duplicate child {:?}", c);
        self.children.entry(c).or_insert_with(|| Node::new(c))
    }

    pub fn child_or_insert(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_insert_with(|| Node::new(c))
    }

    /// Detaches the child for `c`. The caller guarantees it is dead.
    pub fn remove_child(&mut self, c: char) -> Option<Node> {
        let removed = self.children.remove(&c);
        debug_assert!(removed.as_ref().map_or(true, |x| x.is_leafless() && !x.is_terminal()),
                      "removed a live child {:?}", c);
        removed
    }

    pub fn children(&self) -> btree_map::Values<'_, char, Node> {
        self.children.values()
    }

    /// Every word in this subtree, in order, each spelled as `prefix` followed by
    /// the path below this node.
    pub fn words(&self, prefix: &str) -> Words<'_> {
        Words::new(self, prefix)
    }

    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&Node) {
        f(self);
        self.children().for_each(|x| x.traverse_prefix(f));
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("character", &self.character)
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexicon::node::{Node, ROOT_SENTINEL};

    fn sample() -> Node {
        let mut root = Node::default();
        for word in ["cat", "car", "cart", "dog"] {
            let mut current = &mut root;
            for c in word.chars() {
                current = current.child_or_insert(c);
            }
            current.mark_word();
        }
        root
    }

    #[test]
    fn children_stay_sorted() {
        let mut node = Node::new('a');
        node.add_child('m');
        node.add_child('c');
        node.add_child('x');
        node.add_child('b');
        let letters: Vec<char> = node.children().map(|x| x.character()).collect();
        assert_eq!(letters, vec!['b', 'c', 'm', 'x']);
    }

    #[test]
    fn get_and_remove_children() {
        let mut node = Node::new('a');
        node.add_child('z');
        assert_eq!(node.child('z').map(|x| x.character()), Some('z'));
        assert!(node.child('y').is_none());
        assert!(!node.is_leafless());

        let removed = node.remove_child('z');
        assert_eq!(removed.map(|x| x.character()), Some('z'));
        assert!(node.is_leafless());
        assert!(node.remove_child('z').is_none());
    }

    #[test]
    fn mark_and_unmark() {
        let mut node = Node::new('q');
        assert!(!node.is_terminal());
        node.mark_word();
        assert!(node.is_terminal());
        node.unmark_word();
        assert!(!node.is_terminal());
    }

    #[test]
    fn root_uses_sentinel() {
        assert_eq!(Node::default().character(), ROOT_SENTINEL);
    }

    #[test]
    fn subtree_words_carry_prefix() {
        let root = sample();
        let ca = root.child('c').and_then(|x| x.child('a')).unwrap();
        assert_eq!(ca.words("ca").collect::<Vec<_>>(), vec!["car", "cart", "cat"]);
        assert_eq!(root.words("").collect::<Vec<_>>(), vec!["car", "cart", "cat", "dog"]);
    }

    #[test]
    fn traverse_prefix_visits_every_node() {
        let root = sample();
        let mut letters = String::new();
        root.traverse_prefix(&mut |x| if x.character() != ROOT_SENTINEL { letters.push(x.character()) });
        assert_eq!(letters, "carttdog");
    }
}
