//! Error types for model construction and training.

use thiserror::Error;

use crate::types::Label;

/// Errors surfaced by the classifier core.
///
/// The training/inference phase violations described by the original design
/// ("classify before optimize", "ingest after optimize") have no variants
/// here: the [`ModelBuilder`](crate::ModelBuilder) /
/// [`NaiveBayesClassifier`](crate::NaiveBayesClassifier) split makes those
/// states unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// A training example carried a label outside the fixed label space.
    #[error("unknown label {label} (label space is 0..{num_labels})")]
    InvalidLabel { label: Label, num_labels: usize },

    /// The configuration would produce degenerate probability estimates.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
