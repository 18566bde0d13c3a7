//! Labeled corpus loading
//!
//! Parses the `"text,label"` record shape used by the training and testing
//! files: everything before the last comma is whitespace-tokenized document
//! text, everything after it is an integer label. Splitting on the *last*
//! comma keeps document text containing commas parseable.
//!
//! Label range checking happens at ingest time in the model core; the
//! loader only guarantees the label parses as a non-negative integer.

use std::io::{self, BufRead};

use thiserror::Error;

use crate::nlp::tokenizer::WhitespaceTokenizer;
use crate::types::Label;

/// Errors raised while reading a labeled corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The record has no `,label` field at all
    #[error("line {line}: missing \",label\" field")]
    MissingLabel { line: usize },

    /// The label field is not a non-negative integer
    #[error("line {line}: label {text:?} is not a non-negative integer")]
    InvalidLabel { line: usize, text: String },

    /// The underlying reader failed
    #[error("failed to read corpus")]
    Io(#[from] io::Error),
}

/// One parsed training or testing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDocument {
    /// Whitespace-split document tokens, in document order
    pub tokens: Vec<String>,
    /// The record's label
    pub label: Label,
}

/// Parse a single `"text,label"` record.
///
/// `line_number` (1-based) is only used for error reporting.
pub fn parse_record(line: &str, line_number: usize) -> Result<LabeledDocument, CorpusError> {
    let (text, label) = line
        .rsplit_once(',')
        .ok_or(CorpusError::MissingLabel { line: line_number })?;

    let label: Label = label.trim().parse().map_err(|_| CorpusError::InvalidLabel {
        line: line_number,
        text: label.trim().to_string(),
    })?;

    Ok(LabeledDocument {
        tokens: WhitespaceTokenizer::new().tokenize(text),
        label,
    })
}

/// Read every record from `reader`, one per line.
///
/// Blank lines are skipped; any malformed record aborts the read with its
/// line number.
pub fn read_documents<R: BufRead>(reader: R) -> Result<Vec<LabeledDocument>, CorpusError> {
    let mut documents = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        documents.push(parse_record(&line, index + 1)?);
    }
    Ok(documents)
}
