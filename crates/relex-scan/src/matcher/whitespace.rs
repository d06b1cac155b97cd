//! Whitespace matching.

use relex_util::Diagnostic;

use crate::char_class;
use crate::matcher::{Continuation, Matcher, Step};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Matches a run of ASCII whitespace.
pub struct WhitespaceMatcher;

impl Matcher for WhitespaceMatcher {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn start(&self, _options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(WhitespaceScan {
            text: String::new(),
        })
    }
}

struct WhitespaceScan {
    text: String,
}

impl Continuation for WhitespaceScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        if char_class::is_whitespace(ch) {
            self.text.push(ch);
            return Step::Continuing(self);
        }

        if self.text.is_empty() {
            Step::Failed(Diagnostic::new(
                "whitespace",
                format!("`{}` is not whitespace", ch.escape_default()),
            ))
        } else {
            Step::Succeeded(vec![Token::new(TokenKind::Whitespace, self.text, pos)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str) -> Step {
        let options = ScanOptions::new();
        let mut step = Step::Continuing(WhitespaceMatcher.start(&options));
        for (pos, ch) in input.char_indices() {
            match step {
                Step::Continuing(cont) => step = cont.feed(ch, pos),
                resolved => return resolved,
            }
        }
        match step {
            Step::Continuing(cont) => cont.feed('\0', input.len()),
            resolved => resolved,
        }
    }

    #[test]
    fn test_single_space() {
        match resolve(" x") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Whitespace, " ", 1)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_mixed_run() {
        match resolve(" \t\n x") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Whitespace, " \t\n ", 4)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_non_whitespace_fails() {
        assert!(matches!(resolve("x"), Step::Failed(_)));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(resolve(""), Step::Failed(_)));
    }
}
