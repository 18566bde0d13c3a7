//! Trained classifier — MAP scoring over per-category statistics
//!
//! [`NaiveBayesClassifier`] is the immutable, classify-only half of the model
//! lifecycle. Its probability tables and log-priors are fixed at
//! construction, so concurrent read-only classification needs no locking;
//! [`NaiveBayesClassifier::classify_batch`] exploits that with a rayon
//! parallel map over independent documents.

use rayon::prelude::*;

use crate::model::category::Category;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::Label;

use super::trace_op;

/// An immutable trained multinomial Naive Bayes classifier
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    /// One category per label, indexed by label
    categories: Vec<Category>,
    /// The same filter used during training, applied to every input document
    stopwords: StopwordFilter,
    /// Precomputed `ln P(label)` per label
    log_priors: Vec<f64>,
}

impl NaiveBayesClassifier {
    pub(crate) fn from_parts(
        categories: Vec<Category>,
        stopwords: StopwordFilter,
        log_priors: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(categories.len(), log_priors.len());
        Self {
            categories,
            stopwords,
            log_priors,
        }
    }

    /// Number of labels in the label space
    pub fn num_labels(&self) -> usize {
        self.categories.len()
    }

    /// The trained statistics for `label`, if it is in range
    pub fn category(&self, label: Label) -> Option<&Category> {
        self.categories.get(label)
    }

    /// Per-label log scores `ln P(label) + Σ ln P(word | label)` for a
    /// document, after stopword removal.
    ///
    /// Summing logs instead of multiplying raw probabilities keeps long
    /// documents out of floating-point underflow. The vector is indexed by
    /// label.
    pub fn log_scores<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<f64> {
        let kept: Vec<&str> = tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.stopwords.is_stopword(t))
            .collect();

        self.categories
            .iter()
            .zip(&self.log_priors)
            .map(|(category, &prior)| {
                kept.iter()
                    .fold(prior, |score, word| score + category.probability(word).ln())
            })
            .collect()
    }

    /// Classify a document: the maximum a posteriori label.
    ///
    /// Ties go to the lowest label. A document that is empty (or empty after
    /// stopword removal) reduces to the prior-only argmax and still returns a
    /// valid label.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Label {
        trace_op!("classify");

        let scores = self.log_scores(tokens);
        scores
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best, best_score), (label, &score)| {
                if score > best_score {
                    (label, score)
                } else {
                    (best, best_score)
                }
            })
            .0
    }

    /// Classify a batch of independent documents in parallel.
    ///
    /// Results are identical to mapping [`Self::classify`] over the slice
    /// sequentially, in the same order.
    pub fn classify_batch<S>(&self, documents: &[Vec<S>]) -> Vec<Label>
    where
        S: AsRef<str> + Sync,
    {
        trace_op!("classify_batch");

        documents.par_iter().map(|doc| self.classify(doc)).collect()
    }
}
