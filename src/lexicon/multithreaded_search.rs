use std::collections::BTreeSet;

use rayon::prelude::*;

use crate::lexicon::trie::Lexicon;

/// Batches of independent queries fanned out over the rayon pool. Queries only
/// read the tree, so they share it without locking. Results are in input order.
impl Lexicon {
    pub fn suggest_batch(&self, targets: &[&str], max_distance: usize) -> Vec<BTreeSet<String>> {
        targets.par_iter()
            .map(|target| self.suggest(target, max_distance))
            .collect()
    }

    pub fn match_batch(&self, patterns: &[&str]) -> Vec<BTreeSet<String>> {
        patterns.par_iter()
            .map(|pattern| self.match_wildcard(pattern))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexicon::trie::Lexicon;

    #[test]
    fn batch_results_follow_input_order() {
        let lex: Lexicon = ["cat", "cot", "dog", "dig", "chat"].into_iter().collect();
        let targets = ["dog", "cat", "zzz"];
        let batch = lex.suggest_batch(&targets, 1);
        assert_eq!(batch.len(), 3);
        for (target, result) in targets.iter().zip(&batch) {
            assert_eq!(result, &lex.suggest(target, 1));
        }
        assert!(batch[2].is_empty());
    }

    #[test]
    fn batch_matches_sequential() {
        let lex: Lexicon = ["cat", "cot", "dog", "dig", "chat"].into_iter().collect();
        let patterns = ["c*", "d_g", "*t", "x"];
        let batch = lex.match_batch(&patterns);
        let sequential: Vec<_> = patterns.iter().map(|x| lex.match_wildcard(x)).collect();
        assert_eq!(batch, sequential);
    }
}
