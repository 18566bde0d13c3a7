//! Accuracy and timing bookkeeping
//!
//! The thin measurement layer around a train/test run. [`Scoreboard`]
//! tallies predictions against gold labels and [`PhaseClock`] times a
//! phase; [`evaluate`] combines them, running a trained classifier over a
//! labeled corpus in parallel.

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::corpus::LabeledDocument;
use crate::model::classifier::NaiveBayesClassifier;
use crate::types::Label;

/// Running tally of correct predictions
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    correct: usize,
    total: usize,
}

impl Scoreboard {
    /// Create an empty scoreboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one prediction against its gold label
    pub fn record(&mut self, predicted: Label, actual: Label) {
        self.total += 1;
        if predicted == actual {
            self.correct += 1;
        }
    }

    /// Number of correct predictions so far
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Number of predictions recorded so far
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of correct predictions; 0.0 before anything is recorded
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Wall-clock timer for a single phase (training, labeling)
#[derive(Debug, Clone, Copy)]
pub struct PhaseClock {
    started: Instant,
}

impl PhaseClock {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since the clock started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Result of evaluating a classifier against a labeled corpus
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    /// Per-document tally
    pub scoreboard: Scoreboard,
    /// Wall-clock time spent classifying
    pub elapsed: Duration,
}

impl Evaluation {
    /// Fraction of documents classified correctly
    pub fn accuracy(&self) -> f64 {
        self.scoreboard.accuracy()
    }
}

/// Classify every document and tally predictions against the gold labels.
///
/// Documents are classified in parallel; the tally is order-independent.
pub fn evaluate(
    classifier: &NaiveBayesClassifier,
    documents: &[LabeledDocument],
) -> Evaluation {
    let clock = PhaseClock::start();

    let predictions: Vec<Label> = documents
        .par_iter()
        .map(|doc| classifier.classify(&doc.tokens))
        .collect();

    let mut scoreboard = Scoreboard::new();
    for (doc, predicted) in documents.iter().zip(predictions) {
        scoreboard.record(predicted, doc.label);
    }

    Evaluation {
        scoreboard,
        elapsed: clock.elapsed(),
    }
}
