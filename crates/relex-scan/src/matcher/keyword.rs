//! Keyword matching.
//!
//! Table-driven prefix narrowing: the live candidate set starts as the
//! whole keyword table from [`ScanOptions`] and shrinks monotonically as
//! characters are consumed. The rule succeeds only when the scan stops
//! exactly at the end of a live candidate; there is no backtracking to a
//! shorter candidate that was completed earlier (identifier matching
//! covers that text anyway).

use relex_util::Diagnostic;

use crate::matcher::{Continuation, Matcher, Step};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Matches words from the keyword table in [`ScanOptions`].
pub struct KeywordMatcher;

impl Matcher for KeywordMatcher {
    fn name(&self) -> &str {
        "keyword"
    }

    fn start(&self, options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(KeywordScan {
            candidates: options.keywords().to_vec(),
            text: String::new(),
        })
    }
}

struct KeywordScan {
    /// Candidates whose prefix equals the consumed text. Shrinks
    /// monotonically; never grows.
    candidates: Vec<String>,
    /// Characters consumed so far.
    text: String,
}

impl KeywordScan {
    fn extends(&self, ch: char) -> bool {
        if !ch.is_ascii() {
            return false;
        }
        let offset = self.text.len();
        self.candidates
            .iter()
            .any(|word| word.as_bytes().get(offset) == Some(&(ch as u8)))
    }
}

impl Continuation for KeywordScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        if self.extends(ch) {
            let offset = self.text.len();
            self.candidates
                .retain(|word| word.as_bytes().get(offset) == Some(&(ch as u8)));
            self.text.push(ch);
            return Step::Continuing(self);
        }

        // Stopping step: every live candidate of exactly the consumed
        // length has been fully matched. Duplicate table entries complete
        // together and are all emitted.
        let offset = self.text.len();
        let completed: Vec<Token> = self
            .candidates
            .iter()
            .filter(|word| word.len() == offset)
            .map(|_| Token::new(TokenKind::Keyword, self.text.clone(), pos))
            .collect();

        if completed.is_empty() {
            let reason = if self.text.is_empty() {
                format!("no keyword starts with `{}`", ch.escape_default())
            } else {
                format!("`{}` does not complete any keyword", self.text)
            };
            Step::Failed(Diagnostic::new("keyword", reason))
        } else {
            Step::Succeeded(completed)
        }
    }
}
