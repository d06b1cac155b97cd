//! Operator matching.
//!
//! Same prefix-narrowing discipline as keyword matching, applied to the
//! operator table. The completion check runs at every stopping step, not
//! only at end of input: operators are routinely prefixes of longer ones
//! (`+` of `+=`, `=` of `==`), and "maximal operator fully consumed, next
//! char doesn't extend it" has to be caught the moment it happens.

use relex_util::Diagnostic;

use crate::matcher::{Continuation, Matcher, Step};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Matches symbols from the operator table in [`ScanOptions`].
pub struct OperatorMatcher;

impl Matcher for OperatorMatcher {
    fn name(&self) -> &str {
        "operator"
    }

    fn start(&self, options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(OperatorScan {
            candidates: options.operators().to_vec(),
            text: String::new(),
        })
    }
}

struct OperatorScan {
    /// Candidates whose prefix equals the consumed text.
    candidates: Vec<String>,
    /// Characters consumed so far.
    text: String,
}

impl OperatorScan {
    fn extends(&self, ch: char) -> bool {
        if !ch.is_ascii() {
            return false;
        }
        let offset = self.text.len();
        self.candidates
            .iter()
            .any(|op| op.as_bytes().get(offset) == Some(&(ch as u8)))
    }
}

impl Continuation for OperatorScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        if self.extends(ch) {
            let offset = self.text.len();
            self.candidates
                .retain(|op| op.as_bytes().get(offset) == Some(&(ch as u8)));
            self.text.push(ch);
            return Step::Continuing(self);
        }

        let offset = self.text.len();
        let completed: Vec<Token> = self
            .candidates
            .iter()
            .filter(|op| op.len() == offset)
            .map(|_| Token::new(TokenKind::Operator, self.text.clone(), pos))
            .collect();

        if completed.is_empty() {
            let reason = if self.text.is_empty() {
                format!("no operator starts with `{}`", ch.escape_default())
            } else {
                format!("`{}` does not complete any operator", self.text)
            };
            Step::Failed(Diagnostic::new("operator", reason))
        } else {
            Step::Succeeded(completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATORS: &[&str] = &["==", "+=", "-", "+", "="];

    fn resolve(input: &str) -> Step {
        let mut options = ScanOptions::new();
        options.set_operators(OPERATORS.iter().copied()).unwrap();
        let mut step = Step::Continuing(OperatorMatcher.start(&options));
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
    fn test_prefix_operator_detected_mid_text() {
        // `=` is consumed, `-` does not extend `==`, so the completed `=`
        // must surface right there.
        match resolve("=-") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "=", 1)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_longest_consumable_operator() {
        match resolve("===") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "==", 2)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_single_char_at_end_of_input() {
        match resolve("+") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "+", 1)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_two_char_operator() {
        match resolve("+=1") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "+=", 2)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_minus_before_letter() {
        match resolve("-x") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Operator, "-", 1)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_unknown_symbol_fails() {
        match resolve("~") {
            Step::Failed(diag) => assert_eq!(diag.origin(), "operator"),
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(resolve(""), Step::Failed(_)));
    }
}
