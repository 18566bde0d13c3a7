//! Per-category word statistics
//!
//! A [`Category`] holds the trained statistics for one label: the size of its
//! training token multiset, its vocabulary, and a memoized smoothed
//! conditional probability for every vocabulary word. Categories are built
//! once during [`ModelBuilder::optimize`](crate::ModelBuilder::optimize) and
//! read-only afterwards.

use std::cmp::Ordering;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::Label;

/// Trained statistics for a single label
#[derive(Debug, Clone)]
pub struct Category {
    /// The label this category models
    label: Label,
    /// Size of the (stopword-stripped) training token multiset.
    /// Pruning does not change this.
    token_count: usize,
    /// Distinct training tokens
    vocabulary: FxHashSet<String>,
    /// Memoized smoothed P(word | category); keys are always a subset of
    /// `vocabulary`
    word_probability: FxHashMap<String, f64>,
    /// Additive smoothing constant
    smoothing: f64,
    /// Global vocabulary size used as the smoothing denominator, threaded
    /// in at build time
    vocabulary_size: usize,
}

impl Category {
    /// Build a category from its stopword-stripped training tokens.
    ///
    /// Every probability uses the same denominator `|tokens| + vocabulary_size`
    /// where `vocabulary_size` is the size of the *global* vocabulary, so
    /// estimates are comparable across categories and never degenerate for a
    /// category with few tokens.
    pub(crate) fn build(
        label: Label,
        tokens: &[String],
        smoothing: f64,
        vocabulary_size: usize,
    ) -> Self {
        let token_count = tokens.len();

        let mut counts: FxHashMap<&String, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }

        let denominator = (token_count + vocabulary_size).max(1) as f64;
        let word_probability: FxHashMap<String, f64> = counts
            .iter()
            .map(|(&word, &count)| {
                (word.clone(), (count as f64 + smoothing) / denominator)
            })
            .collect();
        let vocabulary = word_probability.keys().cloned().collect();

        Self {
            label,
            token_count,
            vocabulary,
            word_probability,
            smoothing,
            vocabulary_size,
        }
    }

    /// The label this category models
    pub fn label(&self) -> Label {
        self.label
    }

    /// Number of training tokens after stopword stripping
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Number of distinct words remaining in the vocabulary
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `word` is in this category's vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Smoothed conditional probability P(word | category).
    ///
    /// Words in the vocabulary return the memoized table entry; anything else
    /// falls back to [`Self::fallback_probability`]. The result is always
    /// strictly positive: a hard zero would send the downstream log-sum to
    /// negative infinity.
    pub fn probability(&self, word: &str) -> f64 {
        match self.word_probability.get(word) {
            Some(&p) => p,
            None => self.fallback_probability(),
        }
    }

    /// Smoothing-only estimate for a word never observed in this category,
    /// i.e. the table formula with a count of zero.
    ///
    /// Well-defined even for a category with no training tokens; the
    /// denominator is clamped to 1 for the degenerate case of an entirely
    /// untrained model with an empty global vocabulary.
    pub fn fallback_probability(&self) -> f64 {
        let denominator = (self.token_count + self.vocabulary_size).max(1) as f64;
        self.smoothing / denominator
    }

    /// Remove the `n` highest-probability words from the vocabulary and the
    /// probability table, one at a time.
    ///
    /// Very frequent words within a category behave like category-specific
    /// stopwords. Ties are broken by taking the lexicographically smallest
    /// word, so pruning is deterministic regardless of hash-map iteration
    /// order.
    pub(crate) fn prune_most_frequent(&mut self, n: usize) {
        for _ in 0..n {
            let victim = self
                .word_probability
                .iter()
                .max_by(|(word_a, prob_a), (word_b, prob_b)| {
                    prob_a
                        .partial_cmp(prob_b)
                        .unwrap_or(Ordering::Equal)
                        // On equal probability the smaller word wins the max
                        .then_with(|| word_b.cmp(word_a))
                })
                .map(|(word, _)| word.clone());

            match victim {
                Some(word) => {
                    self.word_probability.remove(&word);
                    self.vocabulary.remove(&word);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_probability_table_formula() {
        // 3 tokens, global vocabulary of 3, alpha 0.2
        let category = Category::build(0, &owned(&["cat", "cat", "dog"]), 0.2, 3);

        assert!((category.probability("cat") - (2.0 + 0.2) / 6.0).abs() < 1e-12);
        assert!((category.probability("dog") - (1.0 + 0.2) / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_for_unseen_word() {
        let category = Category::build(0, &owned(&["cat", "cat", "dog"]), 0.2, 3);

        assert!(!category.contains("fish"));
        assert!((category.probability("fish") - 0.2 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_probability_always_in_open_unit_interval() {
        let category = Category::build(0, &owned(&["cat", "cat", "dog"]), 0.2, 3);

        for word in ["cat", "dog", "fish", ""] {
            let p = category.probability(word);
            assert!(p > 0.0, "probability of {word:?} must be positive");
            assert!(p < 1.0, "probability of {word:?} must be below one");
        }
    }

    #[test]
    fn test_empty_category_is_well_defined() {
        // Thin training data can leave a category with no tokens at all
        let category = Category::build(3, &[], 0.2, 5);

        assert_eq!(category.token_count(), 0);
        assert_eq!(category.vocabulary_len(), 0);
        let p = category.probability("anything");
        assert!((p - 0.2 / 5.0).abs() < 1e-12);
        assert!(p > 0.0);
    }

    #[test]
    fn test_degenerate_model_clamps_denominator() {
        // No tokens and an empty global vocabulary: the denominator clamps
        // to 1 instead of dividing by zero
        let category = Category::build(0, &[], 0.2, 0);

        let p = category.probability("anything");
        assert!(p.is_finite());
        assert!((p - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_higher_count_gives_strictly_higher_probability() {
        // Same multiset size and global vocabulary, different counts for "x"
        let once = Category::build(0, &owned(&["x", "y"]), 0.2, 10);
        let twice = Category::build(1, &owned(&["x", "x"]), 0.2, 10);

        assert!(twice.probability("x") > once.probability("x"));
    }

    #[test]
    fn test_prune_removes_exactly_the_most_frequent() {
        // 26 distinct words, word i appearing i+1 times
        let mut tokens = Vec::new();
        for i in 0..26 {
            for _ in 0..=i {
                tokens.push(format!("w{i:02}"));
            }
        }
        let mut category = Category::build(0, &tokens, 0.2, 26);
        assert_eq!(category.vocabulary_len(), 26);

        category.prune_most_frequent(6);

        assert_eq!(category.vocabulary_len(), 20);
        // The six highest-count words are gone
        for i in 20..26 {
            assert!(!category.contains(&format!("w{i:02}")));
        }
        // The rest survive
        for i in 0..20 {
            assert!(category.contains(&format!("w{i:02}")));
        }
        // A pruned word now takes the fallback path
        let pruned = category.probability("w25");
        assert!((pruned - category.fallback_probability()).abs() < 1e-12);
    }

    #[test]
    fn test_prune_tie_break_is_lexicographic() {
        let mut category =
            Category::build(0, &owned(&["alpha", "beta", "gamma"]), 0.2, 3);

        category.prune_most_frequent(2);

        assert!(!category.contains("alpha"));
        assert!(!category.contains("beta"));
        assert!(category.contains("gamma"));
    }

    #[test]
    fn test_prune_more_than_vocabulary_stops_cleanly() {
        let mut category = Category::build(0, &owned(&["a", "b"]), 0.2, 2);

        category.prune_most_frequent(10);

        assert_eq!(category.vocabulary_len(), 0);
    }

    #[test]
    fn test_prune_keeps_token_count() {
        let mut category = Category::build(0, &owned(&["a", "a", "b"]), 0.2, 2);
        let before = category.fallback_probability();

        category.prune_most_frequent(1);

        assert_eq!(category.token_count(), 3);
        assert!((category.fallback_probability() - before).abs() < 1e-12);
    }

    #[test]
    fn test_table_keys_stay_within_vocabulary() {
        let mut category =
            Category::build(0, &owned(&["a", "a", "b", "c", "c", "c"]), 0.2, 3);
        category.prune_most_frequent(1);

        for word in category.word_probability.keys() {
            assert!(category.vocabulary.contains(word));
        }
        assert_eq!(category.word_probability.len(), category.vocabulary.len());
    }
}
