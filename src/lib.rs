//! Fast multinomial Naive Bayes classification for short text documents
//!
//! This crate trains a bag-of-words Naive Bayes model over a fixed label
//! space and classifies unseen documents by maximum a posteriori scoring.
//! Word probabilities are additively smoothed against the global training
//! vocabulary, so any word (seen or unseen) always contributes a strictly
//! positive probability.
//!
//! # Lifecycle
//!
//! The model is split into two types:
//!
//! - [`ModelBuilder`] — the mutable training phase. Feed it labeled token
//!   sequences with [`ModelBuilder::ingest`].
//! - [`NaiveBayesClassifier`] — the immutable classification phase, produced
//!   by [`ModelBuilder::optimize`]. Optimization strips stopwords from the
//!   per-category statistics and builds the smoothed probability tables,
//!   then prunes each large category's most frequent words.
//!
//! Because `optimize()` consumes the builder, "ingest after optimize" and
//! "classify before optimize" cannot be written at all.
//!
//! # Quick start
//!
//! ```
//! use rapid_textclass::{ModelBuilder, StopwordFilter};
//!
//! let mut builder = ModelBuilder::new(2, StopwordFilter::empty());
//! builder.ingest(&["cat", "cat", "dog"], 0)?;
//! builder.ingest(&["fish", "fish", "fish"], 1)?;
//!
//! let classifier = builder.optimize();
//! assert_eq!(classifier.classify(&["fish", "fish"]), 1);
//! # Ok::<(), rapid_textclass::ClassifierError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`] — category statistics, training, and MAP classification
//! - [`nlp`] — whitespace tokenization and stopword filtering
//! - [`corpus`] — `"text,label"` record parsing for training/testing files
//! - [`eval`] — accuracy tallies and phase timing
//!
//! # Feature flags
//!
//! - `tracing` — emit tracing spans around optimize/classify operations

pub mod corpus;
pub mod error;
pub mod eval;
pub mod model;
pub mod nlp;
pub mod types;

pub use error::ClassifierError;
pub use model::builder::ModelBuilder;
pub use model::category::Category;
pub use model::classifier::NaiveBayesClassifier;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::WhitespaceTokenizer;
pub use types::{ClassifierConfig, Label, Prior};

#[cfg(test)]
mod tests {
    use super::*;

    /// End-to-end: parse a corpus, train, evaluate, classify.
    #[test]
    fn test_full_pipeline() {
        let training = "\
the cat sat on the mat,0
a dog chased the cat,0
fish swim in the sea,1
the sea is full of fish,1
";
        let documents = corpus::read_documents(training.as_bytes()).unwrap();

        let stopwords = StopwordFilter::from_list(&["the", "a", "on", "in", "of", "is"]);
        let mut builder = ModelBuilder::new(2, stopwords);
        for doc in &documents {
            builder.ingest(&doc.tokens, doc.label).unwrap();
        }
        let classifier = builder.optimize();

        // The model reproduces its own training labels
        let evaluation = eval::evaluate(&classifier, &documents);
        assert!((evaluation.accuracy() - 1.0).abs() < 1e-12);

        // And generalizes to fresh word mixes
        assert_eq!(classifier.classify(&["cat", "mat"]), 0);
        assert_eq!(classifier.classify(&["fish", "sea"]), 1);
    }
}
