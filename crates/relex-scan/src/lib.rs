//! relex-scan - Greedy, Pluggable Lexical Scanning
//!
//! This crate tokenizes text with an ordered set of matcher rules: at each
//! position every rule scans in lockstep, the longest successful match
//! wins, and shorter alternates plus per-rule failure reasons are kept for
//! debugging. Tokenization history is a persistent state chain - every
//! step is a node that can be rewound to, re-advanced from (memoized), or
//! explicitly invalidated and rescanned.
//!
//! # Example Usage
//!
//! ```
//! use relex_scan::{Chain, MatcherSet, ScanOptions};
//!
//! let mut options = ScanOptions::new();
//! options.set_keywords(["if"]).unwrap();
//! options.set_operators(["==", "="]).unwrap();
//!
//! let mut chain = Chain::new("if x == 1", MatcherSet::standard(), options);
//! let tokens = chain.scan_all();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["if", " ", "x", " ", "==", " ", "1"]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token-kind definitions
//! - [`char_class`] - ASCII character classification predicates
//! - [`cursor`] - Byte cursor with an end-of-input sentinel
//! - [`options`] - Shared scan configuration (keyword/operator tables)
//! - [`matcher`] - The matcher capability, the built-in rules, and the
//!   registry
//! - [`engine`] - Drives live continuations across the text
//! - [`arbiter`] - Longest-match selection
//! - [`chain`] - The persistent, memoized state chain
//!
//! # Matcher Rules
//!
//! Seven rules ship with the crate: identifier, keyword, operator,
//! whitespace, integer, float, and punctuation. Keyword and operator
//! tables come from [`ScanOptions`]; everything else is fixed ASCII
//! classification. Any type implementing [`Matcher`] can be registered
//! alongside or instead of them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod arbiter;
pub mod chain;
pub mod char_class;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod options;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use arbiter::longest_match;
pub use chain::{Chain, StateId};
pub use engine::{MatchEngine, StepSet};
pub use error::{OptionsError, RegistryError};
pub use matcher::{Continuation, Matcher, MatcherSet, Step};
pub use options::ScanOptions;
pub use token::{Token, TokenKind};

// Re-exported so extension matchers can build failure records without
// depending on relex-util directly.
pub use relex_util::Diagnostic;
