use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::lexicon::node::Node;

/// Lazy preorder walk over the words below a node.
///
/// A terminal node is yielded before any of its descendants and siblings are
/// visited in key order, so words come out sorted. The walk borrows the tree,
/// which keeps it from being mutated until the iterator is dropped. A clone
/// resumes from the same position; a new walk starts from `Node::words`.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    start: Option<&'a Node>,
    stack: Vec<btree_map::Values<'a, char, Node>>,
    path: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(node: &'a Node, prefix: &str) -> Words<'a> {
        Words { start: Some(node), stack: vec![], path: prefix.to_string() }
    }

    pub(crate) fn empty() -> Words<'a> {
        Words { start: None, stack: vec![], path: String::new() }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.start.take() {
            self.stack.push(node.children());
            if node.is_terminal() {
                return Some(self.path.clone());
            }
        }

        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(child) => {
                    self.path.push(child.character());
                    self.stack.push(child.children());
                    if child.is_terminal() {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // the starting node's own iterator added no letter
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}

impl FusedIterator for Words<'_> {}
