//! A set of lowercase words stored in a prefix tree, with ordered enumeration,
//! substitution-distance suggestions and wildcard matching.
//!
//! ```
//! use lexicon::Lexicon;
//!
//! let mut lex = Lexicon::new();
//! lex.insert("cat");
//! lex.insert("cart");
//! assert!(lex.has_prefix("ca"));
//! assert_eq!(lex.words().collect::<Vec<_>>(), vec!["cart", "cat"]);
//! assert!(lex.match_wildcard("c*t").contains("cart"));
//! ```

pub mod alphabet;
pub mod error;
pub mod lexicon;

pub use crate::error::{LexiconError, Result};
pub use crate::lexicon::iterators::Words;
pub use crate::lexicon::node::Node;
pub use crate::lexicon::pattern::{Pattern, Symbol};
pub use crate::lexicon::shared::SharedLexicon;
pub use crate::lexicon::trie::Lexicon;
pub use crate::lexicon::wordlist::{FileFormat, LoadReport};
