//! Whitespace tokenization
//!
//! Documents enter the classifier as token sequences; this tokenizer is the
//! canonical way to produce them from raw text. It splits on Unicode
//! whitespace only. Anything smarter (stemming, punctuation handling) is a
//! caller concern.

/// Splits raw text into owned tokens on whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer {
    /// Whether tokens are lowercased
    lowercase: bool,
}

impl WhitespaceTokenizer {
    /// Create a tokenizer that preserves case
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether tokens are lowercased
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tokenize `text` into owned tokens
    ///
    /// Consecutive whitespace is collapsed; leading/trailing whitespace
    /// produces no empty tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|t| {
                if self.lowercase {
                    t.to_lowercase()
                } else {
                    t.to_string()
                }
            })
            .collect()
    }
}
