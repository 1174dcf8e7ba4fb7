use std::collections::BTreeSet;
use std::sync::Arc;

use delegate::delegate;
use parking_lot::RwLock;

use crate::lexicon::trie::Lexicon;

/// A lexicon shared between threads: one writer or many readers at a time.
/// Clones are handles onto the same tree.
#[derive(Clone, Default, Debug)]
pub struct SharedLexicon(Arc<RwLock<Lexicon>>);

impl SharedLexicon {
    pub fn new(lexicon: Lexicon) -> SharedLexicon {
        SharedLexicon(Arc::new(RwLock::new(lexicon)))
    }

    delegate! {
        to self.0.read() {
            pub fn contains(&self, word: &str) -> bool;
            pub fn has_prefix(&self, prefix: &str) -> bool;
            pub fn count(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn suggest(&self, target: &str, max_distance: usize) -> BTreeSet<String>;
            pub fn match_wildcard(&self, pattern: &str) -> BTreeSet<String>;
        }

        to self.0.write() {
            pub fn insert(&self, word: &str) -> bool;
            pub fn delete(&self, word: &str) -> bool;
        }
    }

    /// Copies out every word, in order, so the caller can iterate without
    /// holding the lock.
    pub fn snapshot(&self) -> Vec<String> {
        self.0.read().words().collect()
    }

    /// Runs `f` with shared access; writers wait until it returns.
    pub fn read<T, F>(&self, f: F) -> T
        where F: FnOnce(&Lexicon) -> T {
        f(&*self.0.read())
    }

    /// Runs `f` with exclusive access.
    pub fn write<T, F>(&self, f: F) -> T
        where F: FnOnce(&mut Lexicon) -> T {
        f(&mut *self.0.write())
    }

    /// Unwraps the lexicon if this is the last handle.
    pub fn try_unwrap(self) -> Result<Lexicon, SharedLexicon> {
        Arc::try_unwrap(self.0)
            .map(RwLock::into_inner)
            .map_err(SharedLexicon)
    }
}

impl From<Lexicon> for SharedLexicon {
    fn from(lexicon: Lexicon) -> Self {
        SharedLexicon::new(lexicon)
    }
}
