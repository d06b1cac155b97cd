//! Token type definitions.

use std::fmt;

/// Category of a produced token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Name-like run: letters, digits, underscores; no leading digit.
    Identifier,
    /// A fully consumed keyword candidate.
    Keyword,
    /// A fully consumed operator candidate.
    Operator,
    /// Run of ASCII whitespace.
    Whitespace,
    /// Run of ASCII digits.
    Integer,
    /// Digits with one decimal point and at least one fractional digit.
    Float,
    /// Run of ASCII punctuation.
    Punctuation,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Punctuation => "punctuation",
        };
        f.write_str(name)
    }
}

/// One successful match. Immutable once produced.
///
/// `end` is the byte offset one past the last consumed character, i.e. the
/// position the scan resumes from when this token wins arbitration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Category the winning matcher assigned.
    pub kind: TokenKind,
    /// The matched text.
    pub text: String,
    /// Byte offset one past the last consumed character.
    pub end: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            end,
        }
    }

    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the matched text is empty. Built-in matchers never produce
    /// empty tokens.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
