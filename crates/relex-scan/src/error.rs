//! Error types for scanner configuration.
//!
//! The scan itself is total: a rule that does not apply becomes a failure
//! diagnostic, and an unmatchable position becomes a no-match state, never
//! an error. The only real errors live at configuration time, before any
//! scanning starts.

use thiserror::Error;

/// Error type for [`ScanOptions`](crate::ScanOptions) construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// An empty keyword candidate was supplied. An empty candidate would
    /// complete with empty text, yielding a token that never advances the
    /// scan position.
    #[error("keyword candidates must be non-empty")]
    EmptyKeyword,

    /// A keyword candidate contains a character outside the ASCII letter
    /// set the keyword matcher consumes.
    #[error("keyword `{0}` contains a non-letter character")]
    NonLetterKeyword(String),

    /// An empty operator candidate was supplied.
    #[error("operator candidates must be non-empty")]
    EmptyOperator,

    /// An operator candidate contains a character outside the ASCII
    /// punctuation set the operator matcher consumes.
    #[error("operator `{0}` contains a non-punctuation character")]
    NonPunctuationOperator(String),
}

/// Error type for [`MatcherSet`](crate::MatcherSet) registration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A matcher with this name is already registered. Names key the
    /// registry and tag failure diagnostics, so they must be unique.
    #[error("matcher `{0}` is already registered")]
    DuplicateMatcher(String),
}

/// Result type alias for options construction
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

/// Result type alias for matcher registration
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
