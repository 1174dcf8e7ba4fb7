use std::collections::BTreeSet;

use lexicon::Lexicon;
use maplit::btreeset;

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|x| x.to_string()).collect()
}

#[test]
fn insert_enumerate_and_delete() {
    let mut lex = Lexicon::new();
    assert!(lex.insert("cat"));
    assert!(lex.insert("car"));
    assert!(lex.insert("cart"));
    assert_eq!(lex.count(), 3);
    assert_eq!(lex.words().collect::<Vec<_>>(), vec!["car", "cart", "cat"]);

    assert!(lex.has_prefix("ca"));
    assert!(!lex.contains("ca"));

    assert!(lex.delete("car"));
    assert_eq!(lex.count(), 2);
    assert!(!lex.contains("car"));
    assert!(lex.contains("cart"));
    assert!(!lex.delete("car"));
}

#[test]
fn suggestions_count_substitutions_only() {
    let lex: Lexicon = ["cat", "cot", "car", "bat"].into_iter().collect();
    assert_eq!(lex.suggest("cat", 1), set(&["bat", "car", "cat", "cot"]));
    assert_eq!(lex.suggest("cit", 1), set(&["cat", "cot"]));
    assert_eq!(lex.suggest("bot", 1), set(&["bat", "cot"]));
    assert_eq!(lex.suggest("bot", 2), set(&["bat", "cat", "cot"]));
}

#[test]
fn wildcard_scenarios() {
    let lex: Lexicon = ["cat", "cut", "cot", "chat"].into_iter().collect();
    assert_eq!(lex.match_wildcard("c_t"), btreeset! {
        "cat".to_string(), "cot".to_string(), "cut".to_string()
    });
    assert_eq!(lex.match_wildcard("c*t"), set(&["cat", "chat", "cot", "cut"]));
    assert_eq!(lex.match_wildcard("chat"), set(&["chat"]));
    assert!(lex.match_wildcard("chats").is_empty());
}

#[test]
fn autocomplete_with_prefix() {
    let mut lex = Lexicon::new();
    let report = lex.load_str("apple\napply\napt\nbanana\nApplet\n", &Default::default());
    assert_eq!(report.added, 5);
    assert_eq!(lex.words_with_prefix("app").collect::<Vec<_>>(), vec!["apple", "applet", "apply"]);
    assert_eq!(lex.words_with_prefix("APP").count(), 3);
}
