//! Core types shared across the crate
//!
//! This module defines the label type, the classifier configuration, and the
//! class-prior selection. Configuration types are serde-enabled so they can be
//! loaded from JSON alongside the rest of an application's settings.

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// A class label, dense in `0..num_labels`.
///
/// The label space has fixed cardinality decided when the
/// [`ModelBuilder`](crate::ModelBuilder) is constructed.
pub type Label = usize;

/// How the class prior `P(label)` is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prior {
    /// Every label gets `1 / num_labels`. The default.
    #[default]
    Uniform,
    /// Empirical document frequency: `count(label) / total_documents`.
    ///
    /// A label with no training documents scores negative infinity and can
    /// never win; a model trained on zero documents overall falls back to
    /// the uniform prior.
    Empirical,
}

/// Configuration for training a Naive Bayes classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additive smoothing constant (alpha). Must be positive and finite.
    ///
    /// Defaults to `0.2`. Larger values flatten the estimates of thinly
    /// trained categories; a full Laplace `1.0` is usually too strong for
    /// short documents.
    pub smoothing: f64,

    /// Vocabulary size above which a category has its most frequent words
    /// pruned after the probability table is built.
    pub prune_threshold: usize,

    /// How many of the highest-probability words to prune from an
    /// over-threshold category. A fixed count, never proportional.
    pub prune_count: usize,

    /// Class prior used during classification.
    pub prior: Prior,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.2,
            prune_threshold: 20,
            prune_count: 6,
            prior: Prior::Uniform,
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the additive smoothing constant.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the class prior.
    pub fn with_prior(mut self, prior: Prior) -> Self {
        self.prior = prior;
        self
    }

    /// Set the pruning policy (threshold, then fixed count).
    pub fn with_prune_policy(mut self, threshold: usize, count: usize) -> Self {
        self.prune_threshold = threshold;
        self.prune_count = count;
        self
    }

    /// Check the configuration for values that would corrupt probability
    /// estimates.
    ///
    /// A non-positive smoothing constant would allow zero (or negative)
    /// probabilities, which break log-sum scoring.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(ClassifierError::InvalidConfig {
                reason: format!(
                    "smoothing must be a positive finite value, got {}",
                    self.smoothing
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.smoothing, 0.2);
        assert_eq!(config.prune_threshold, 20);
        assert_eq!(config.prune_count, 6);
        assert_eq!(config.prior, Prior::Uniform);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClassifierConfig::new()
            .with_smoothing(1.0)
            .with_prior(Prior::Empirical)
            .with_prune_policy(50, 10);
        assert_eq!(config.smoothing, 1.0);
        assert_eq!(config.prior, Prior::Empirical);
        assert_eq!(config.prune_threshold, 50);
        assert_eq!(config.prune_count, 10);
    }

    #[test]
    fn test_validate_accepts_positive_smoothing() {
        assert!(ClassifierConfig::new().with_smoothing(0.01).validate().is_ok());
        assert!(ClassifierConfig::new().with_smoothing(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_smoothing() {
        assert!(ClassifierConfig::new().with_smoothing(0.0).validate().is_err());
        assert!(ClassifierConfig::new().with_smoothing(-0.5).validate().is_err());
        assert!(ClassifierConfig::new()
            .with_smoothing(f64::NAN)
            .validate()
            .is_err());
        assert!(ClassifierConfig::new()
            .with_smoothing(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{ "smoothing": 0.5 }"#).unwrap();
        assert_eq!(config.smoothing, 0.5);
        // Omitted fields inherit the defaults
        assert_eq!(config.prune_threshold, 20);
        assert_eq!(config.prior, Prior::Uniform);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ClassifierConfig::new().with_prior(Prior::Empirical);
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json["prior"], "empirical");
        let back: ClassifierConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
