//! Scan configuration.
//!
//! [`ScanOptions`] is the opaque config handed to every matcher's `start`.
//! The chain root owns one instance for its whole lifetime; derived states
//! share it, so a matcher can cache nothing and still see a stable view.
//! The built-in keyword and operator matchers read their candidate tables
//! from here.

use crate::char_class;
use crate::error::{OptionsError, OptionsResult};

/// Shared, immutable-per-chain scanner configuration.
///
/// # Example
///
/// ```
/// use relex_scan::ScanOptions;
///
/// let mut options = ScanOptions::new();
/// options.set_keywords(["if", "while"]).unwrap();
/// options.set_operators(["==", "+=", "+", "="]).unwrap();
/// assert_eq!(options.keywords().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Candidate words for the keyword matcher.
    keywords: Vec<String>,
    /// Candidate symbols for the operator matcher.
    operators: Vec<String>,
}

impl ScanOptions {
    /// Creates options with empty candidate tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the keyword candidate table.
    ///
    /// # Errors
    ///
    /// Rejects empty candidates and candidates containing non-letter
    /// characters. A zero-length candidate could complete with empty text
    /// and stall the scan position.
    pub fn set_keywords<I, S>(&mut self, words: I) -> OptionsResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Vec::new();
        for word in words {
            let word = word.into();
            if word.is_empty() {
                return Err(OptionsError::EmptyKeyword);
            }
            if !word.chars().all(char_class::is_letter) {
                return Err(OptionsError::NonLetterKeyword(word));
            }
            table.push(word);
        }
        self.keywords = table;
        Ok(())
    }

    /// Replaces the operator candidate table.
    ///
    /// # Errors
    ///
    /// Rejects empty candidates and candidates containing characters
    /// outside the ASCII punctuation set.
    pub fn set_operators<I, S>(&mut self, ops: I) -> OptionsResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Vec::new();
        for op in ops {
            let op = op.into();
            if op.is_empty() {
                return Err(OptionsError::EmptyOperator);
            }
            if !op.chars().all(char_class::is_punctuation) {
                return Err(OptionsError::NonPunctuationOperator(op));
            }
            table.push(op);
        }
        self.operators = table;
        Ok(())
    }

    /// Keyword candidates, in the order supplied.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Operator candidates, in the order supplied.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }
}
