//! Naive Bayes model construction and classification
//!
//! The model has a two-type lifecycle: a mutable [`ModelBuilder`] accumulates
//! labeled training tokens via `ingest`, then `optimize()` consumes it into an
//! immutable [`NaiveBayesClassifier`]. Training a frozen model or classifying
//! with an untrained one is therefore impossible to express, not merely
//! checked at runtime.
//!
//! [`ModelBuilder`]: builder::ModelBuilder
//! [`NaiveBayesClassifier`]: classifier::NaiveBayesClassifier

pub mod builder;
pub mod category;
pub mod classifier;

/// Enter a tracing span for a model operation (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_op {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("model_op", op = $name).entered();
    };
}

pub(crate) use trace_op;
