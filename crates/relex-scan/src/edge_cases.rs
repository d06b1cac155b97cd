//! Edge case tests for relex-scan

use crate::matcher::{
    FloatMatcher, IdentifierMatcher, IntegerMatcher, OperatorMatcher, PunctuationMatcher,
    WhitespaceMatcher,
};
use crate::{Chain, MatcherSet, ScanOptions, Token, TokenKind};

fn single_rule(matcher: Box<dyn crate::Matcher>, text: &str) -> Chain {
    let mut matchers = MatcherSet::new();
    matchers.register(matcher).unwrap();
    Chain::new(text, matchers, ScanOptions::new())
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_underscore_identifier_with_digits() {
    let tokens = Chain::new(
        "_test1_2 ",
        MatcherSet::standard(),
        ScanOptions::new(),
    )
    .scan_all();
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "_test1_2", 8));
}

#[test]
fn test_edge_leading_digit_is_no_identifier() {
    let mut chain = single_rule(Box::new(IdentifierMatcher), "1test");
    let stuck = chain.advance(chain.root());
    assert_eq!(chain.longest_match(stuck), None);
    assert_eq!(chain.position(stuck), 0);
}

#[test]
fn test_edge_operator_not_extended_past_boundary() {
    let mut options = ScanOptions::new();
    options.set_operators(["==", "+=", "-", "+", "="]).unwrap();
    let mut matchers = MatcherSet::new();
    matchers.register(Box::new(OperatorMatcher)).unwrap();
    let mut chain = Chain::new("=-", matchers, options);
    let first = chain.advance(chain.root());
    assert_eq!(
        chain.longest_match(first),
        Some(&Token::new(TokenKind::Operator, "=", 1))
    );
}

#[test]
fn test_edge_triple_equals() {
    let mut options = ScanOptions::new();
    options.set_operators(["==", "+=", "-", "+", "="]).unwrap();
    let mut matchers = MatcherSet::new();
    matchers.register(Box::new(OperatorMatcher)).unwrap();
    let tokens = Chain::new("===", matchers, options).scan_all();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Operator, "==", 2),
            Token::new(TokenKind::Operator, "=", 3),
        ]
    );
}

#[test]
fn test_edge_statement_terminator_dot() {
    let mut matchers = MatcherSet::new();
    matchers.register(Box::new(IdentifierMatcher)).unwrap();
    matchers.register(Box::new(FloatMatcher)).unwrap();
    matchers.register(Box::new(IntegerMatcher)).unwrap();
    matchers.register(Box::new(PunctuationMatcher)).unwrap();
    let tokens = Chain::new("x.", matchers, ScanOptions::new()).scan_all();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "x", 1),
            Token::new(TokenKind::Punctuation, ".", 2),
        ]
    );
}

#[test]
fn test_edge_leading_point_float() {
    let mut chain = single_rule(Box::new(FloatMatcher), ".5");
    let first = chain.advance(chain.root());
    assert_eq!(
        chain.longest_match(first),
        Some(&Token::new(TokenKind::Float, ".5", 2))
    );
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let mut chain = single_rule(Box::new(IdentifierMatcher), &name);
    let first = chain.advance(chain.root());
    assert_eq!(chain.longest_match(first).unwrap().text, name);
    assert_eq!(chain.position(first), 10_000);
}

#[test]
fn test_edge_non_ascii_is_a_dead_end() {
    let tokens = Chain::new("héllo", MatcherSet::standard(), ScanOptions::new()).scan_all();
    // Matching stops at the non-ASCII character.
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "h", 1)]);
}

#[test]
fn test_edge_whitespace_and_identifier_interleaved() {
    let mut matchers = MatcherSet::new();
    matchers.register(Box::new(WhitespaceMatcher)).unwrap();
    matchers.register(Box::new(IdentifierMatcher)).unwrap();
    let tokens = Chain::new(" a b ", matchers, ScanOptions::new()).scan_all();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![" ", "a", " ", "b", " "]);
}

#[test]
fn test_edge_failures_recorded_at_dead_end() {
    let mut chain = Chain::new("§", MatcherSet::standard(), ScanOptions::new());
    let stuck = chain.advance(chain.root());
    assert_eq!(chain.longest_match(stuck), None);
    // All seven rules reported why they gave up.
    assert_eq!(chain.failures(stuck).len(), 7);
}
