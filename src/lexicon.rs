pub mod iterators;
pub mod multithreaded_search;
pub mod node;
pub mod pattern;
pub mod search;
pub mod shared;
pub mod trie;
pub mod wordlist;
