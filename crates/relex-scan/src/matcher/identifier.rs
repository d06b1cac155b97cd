//! Identifier matching.
//!
//! Identifiers are runs of letters, digits, and underscores that do not
//! start with a digit. The leading-digit restriction is what lets the
//! integer and float matchers own digit-initial text.

use relex_util::Diagnostic;

use crate::char_class;
use crate::matcher::{Continuation, Matcher, Step};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Matches `[A-Za-z_][A-Za-z0-9_]*`.
pub struct IdentifierMatcher;

impl Matcher for IdentifierMatcher {
    fn name(&self) -> &str {
        "identifier"
    }

    fn start(&self, _options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(IdentifierScan {
            text: String::new(),
        })
    }
}

struct IdentifierScan {
    /// Characters consumed so far.
    text: String,
}

impl Continuation for IdentifierScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        let extends = char_class::is_letter(ch)
            || char_class::is_underscore(ch)
            || (char_class::is_digit(ch) && !self.text.is_empty());

        if extends {
            self.text.push(ch);
            return Step::Continuing(self);
        }

        if self.text.is_empty() {
            Step::Failed(Diagnostic::new(
                "identifier",
                format!("`{}` cannot start an identifier", ch.escape_default()),
            ))
        } else {
            Step::Succeeded(vec![Token::new(TokenKind::Identifier, self.text, pos)])
        }
    }
}
