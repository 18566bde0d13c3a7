//! Training-phase model accumulation
//!
//! [`ModelBuilder`] is the mutable, ingest-only half of the model lifecycle.
//! It routes each training example's tokens to the per-label accumulator and
//! folds them into the global vocabulary. Calling [`ModelBuilder::optimize`]
//! consumes the builder and produces the immutable
//! [`NaiveBayesClassifier`](crate::NaiveBayesClassifier), so further ingestion
//! into a trained model is a compile error rather than a runtime one.

use rustc_hash::FxHashSet;

use crate::error::ClassifierError;
use crate::model::category::Category;
use crate::model::classifier::NaiveBayesClassifier;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{ClassifierConfig, Label, Prior};

use super::trace_op;

/// Accumulates labeled training tokens for a fixed label space
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    config: ClassifierConfig,
    stopwords: StopwordFilter,
    /// Per-label concatenation of all training tokens, in ingest order
    documents: Vec<Vec<String>>,
    /// Per-label number of ingested training examples
    document_counts: Vec<usize>,
    /// Every distinct token seen in training, stopwords included
    global_vocabulary: FxHashSet<String>,
}

impl ModelBuilder {
    /// Create a builder for `num_labels` categories with default
    /// configuration.
    ///
    /// # Panics
    ///
    /// Panics if `num_labels` is zero; a classifier needs at least one
    /// label to return.
    pub fn new(num_labels: usize, stopwords: StopwordFilter) -> Self {
        Self::unchecked(num_labels, stopwords, ClassifierConfig::default())
    }

    /// Create a builder with an explicit configuration.
    ///
    /// Fails with [`ClassifierError::InvalidConfig`] if the configuration
    /// would produce degenerate probability estimates.
    ///
    /// # Panics
    ///
    /// Panics if `num_labels` is zero.
    pub fn with_config(
        num_labels: usize,
        stopwords: StopwordFilter,
        config: ClassifierConfig,
    ) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Self::unchecked(num_labels, stopwords, config))
    }

    fn unchecked(
        num_labels: usize,
        stopwords: StopwordFilter,
        config: ClassifierConfig,
    ) -> Self {
        assert!(num_labels > 0, "label space must be non-empty");
        Self {
            config,
            stopwords,
            documents: vec![Vec::new(); num_labels],
            document_counts: vec![0; num_labels],
            global_vocabulary: FxHashSet::default(),
        }
    }

    /// Number of labels in the fixed label space
    pub fn num_labels(&self) -> usize {
        self.documents.len()
    }

    /// Number of training examples ingested for `label`
    pub fn document_count(&self, label: Label) -> Option<usize> {
        self.document_counts.get(label).copied()
    }

    /// Number of distinct tokens seen across all training examples
    pub fn global_vocabulary_len(&self) -> usize {
        self.global_vocabulary.len()
    }

    /// Ingest one training example.
    ///
    /// Appends `tokens` to the label's accumulator and folds every token
    /// into the global vocabulary. The label space is fixed at construction,
    /// so an out-of-range label is an error rather than a new category.
    pub fn ingest<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        label: Label,
    ) -> Result<(), ClassifierError> {
        if label >= self.documents.len() {
            return Err(ClassifierError::InvalidLabel {
                label,
                num_labels: self.documents.len(),
            });
        }

        for token in tokens {
            let token = token.as_ref();
            if !self.global_vocabulary.contains(token) {
                self.global_vocabulary.insert(token.to_string());
            }
            self.documents[label].push(token.to_string());
        }
        self.document_counts[label] += 1;
        Ok(())
    }

    /// Freeze the model: strip stopwords, build every category's smoothed
    /// probability table against the global vocabulary size, prune the most
    /// frequent words of over-threshold categories, and precompute the
    /// log-priors.
    ///
    /// Consumes the builder; the returned classifier is immutable.
    pub fn optimize(self) -> NaiveBayesClassifier {
        trace_op!("optimize");

        let Self {
            config,
            stopwords,
            documents,
            document_counts,
            global_vocabulary,
        } = self;

        let vocabulary_size = global_vocabulary.len();

        let mut categories = Vec::with_capacity(documents.len());
        for (label, tokens) in documents.into_iter().enumerate() {
            let kept = stopwords.strip(&tokens);
            let mut category =
                Category::build(label, &kept, config.smoothing, vocabulary_size);
            if category.vocabulary_len() > config.prune_threshold {
                category.prune_most_frequent(config.prune_count);
            }
            categories.push(category);
        }

        let log_priors = compute_log_priors(config.prior, &document_counts);

        NaiveBayesClassifier::from_parts(categories, stopwords, log_priors)
    }
}

/// Precompute `ln P(label)` for every label.
fn compute_log_priors(prior: Prior, document_counts: &[usize]) -> Vec<f64> {
    let num_labels = document_counts.len();
    let total: usize = document_counts.iter().sum();

    match prior {
        Prior::Empirical if total > 0 => document_counts
            .iter()
            .map(|&count| {
                if count == 0 {
                    // Never observed in training: this label cannot win
                    f64::NEG_INFINITY
                } else {
                    (count as f64 / total as f64).ln()
                }
            })
            .collect(),
        // Uniform, or empirical over an empty training set
        _ => vec![-(num_labels as f64).ln(); num_labels],
    }
}
