//! Integer and float matching.
//!
//! Two independent rules rather than one: the integer matcher consumes a
//! plain digit run, the float matcher insists on a decimal point with at
//! least one digit after it. Running both side by side lets arbitration
//! decide: `"6.1"` is a float win, while `"96."` is an integer win because
//! the float rule refuses a trailing point (so a statement-terminator dot
//! is never swallowed into a number).

use relex_util::Diagnostic;

use crate::char_class;
use crate::matcher::{Continuation, Matcher, Step};
use crate::options::ScanOptions;
use crate::token::{Token, TokenKind};

/// Matches a run of ASCII digits.
pub struct IntegerMatcher;

impl Matcher for IntegerMatcher {
    fn name(&self) -> &str {
        "integer"
    }

    fn start(&self, _options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(IntegerScan {
            text: String::new(),
        })
    }
}

struct IntegerScan {
    text: String,
}

impl Continuation for IntegerScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        if char_class::is_digit(ch) {
            self.text.push(ch);
            return Step::Continuing(self);
        }

        if self.text.is_empty() {
            Step::Failed(Diagnostic::new(
                "integer",
                format!("`{}` is not a digit", ch.escape_default()),
            ))
        } else {
            Step::Succeeded(vec![Token::new(TokenKind::Integer, self.text, pos)])
        }
    }
}

/// Matches digits containing one decimal point followed by at least one
/// digit.
pub struct FloatMatcher;

impl Matcher for FloatMatcher {
    fn name(&self) -> &str {
        "float"
    }

    fn start(&self, _options: &ScanOptions) -> Box<dyn Continuation> {
        Box::new(FloatScan {
            text: String::new(),
            seen_point: false,
            fraction_digits: 0,
        })
    }
}

struct FloatScan {
    text: String,
    /// Whether the single permitted decimal point has been consumed.
    seen_point: bool,
    /// Digits consumed after the decimal point.
    fraction_digits: usize,
}

impl Continuation for FloatScan {
    fn feed(mut self: Box<Self>, ch: char, pos: usize) -> Step {
        if char_class::is_digit(ch) {
            if self.seen_point {
                self.fraction_digits += 1;
            }
            self.text.push(ch);
            return Step::Continuing(self);
        }
        if ch == '.' && !self.seen_point {
            self.seen_point = true;
            self.text.push(ch);
            return Step::Continuing(self);
        }

        if self.text.is_empty() {
            Step::Failed(Diagnostic::new(
                "float",
                format!("`{}` cannot start a float", ch.escape_default()),
            ))
        } else if !self.seen_point {
            Step::Failed(Diagnostic::new("float", "no decimal point"))
        } else if self.fraction_digits == 0 {
            Step::Failed(Diagnostic::new("float", "no digit after decimal point"))
        } else {
            Step::Succeeded(vec![Token::new(TokenKind::Float, self.text, pos)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(matcher: &dyn Matcher, input: &str) -> Step {
        let options = ScanOptions::new();
        let mut step = Step::Continuing(matcher.start(&options));
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
    fn test_integer_run() {
        match resolve(&IntegerMatcher, "96.") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Integer, "96", 2)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_integer_rejects_letter_start() {
        assert!(matches!(resolve(&IntegerMatcher, "x1"), Step::Failed(_)));
    }

    #[test]
    fn test_integer_leading_zeros_kept() {
        match resolve(&IntegerMatcher, "0042 ") {
            Step::Succeeded(tokens) => assert_eq!(tokens[0].text, "0042"),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_float_simple() {
        match resolve(&FloatMatcher, "6.1") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Float, "6.1", 3)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_float_trailing_point_fails() {
        match resolve(&FloatMatcher, "96.") {
            Step::Failed(diag) => {
                assert_eq!(diag.message(), "no digit after decimal point");
            },
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_float_without_point_fails() {
        match resolve(&FloatMatcher, "123 ") {
            Step::Failed(diag) => assert_eq!(diag.message(), "no decimal point"),
            _ => panic!("expected failure"),
        }
    }

    #[test]
    fn test_float_leading_point() {
        match resolve(&FloatMatcher, ".5;") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Float, ".5", 2)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_float_second_point_stops_scan() {
        // The second `.` is not consumed; the float ends before it.
        match resolve(&FloatMatcher, "1.5.2") {
            Step::Succeeded(tokens) => {
                assert_eq!(tokens, vec![Token::new(TokenKind::Float, "1.5", 3)]);
            },
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_float_empty_input_fails() {
        assert!(matches!(resolve(&FloatMatcher, ""), Step::Failed(_)));
    }
}
