//! Punctuation matching.

use relex_util::Diagnostic;

use crate::char_class;
use crate::matcher::{Continuation, Matcher, Step};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Matches a run of ASCII punctuation.
///
/// Greedy over the whole punctuation class: `"=-"` is a single
/// two-character punctuation run here, which is why the operator matcher
/// exists as a separate, table-driven rule.
pub struct PunctuationMatcher;

impl Matcher for PunctuationMatcher {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn start(&self, _options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(PunctuationScan {
            text: String::new(),
        })
    }
}

struct PunctuationScan {
    text: String,
}

impl Continuation for PunctuationScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        if char_class::is_punctuation(ch) {
            self.text.push(ch);
            return Step::Continuing(self);
        }

        if self.text.is_empty() {
            Step::Failed(Diagnostic::new(
                "punctuation",
                format!("`{}` is not punctuation", ch.escape_default()),
            ))
        } else {
            Step::Succeeded(vec![Token::new(TokenKind::Punctuation, self.text, pos)])
        }
    }
}
