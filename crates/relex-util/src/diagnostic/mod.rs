//! Diagnostic module - Informational failure records.
//!
//! A [`Diagnostic`] captures why a matcher rule gave up at some position:
//! the identity of the matcher that failed plus a human-readable reason.
//! Diagnostics exist purely for debugging - the matching engine collects
//! them but never branches on their contents.
//!
//! # Examples
//!
//! ```
//! use relex_util::Diagnostic;
//!
//! let diag = Diagnostic::new("identifier", "`1` cannot start an identifier");
//! assert_eq!(diag.origin(), "identifier");
//! assert_eq!(
//!     diag.to_string(),
//!     "identifier: `1` cannot start an identifier"
//! );
//! ```

use std::fmt;

/// A debug record describing one matcher failure.
///
/// Immutable once created. Equality compares both origin and message,
/// which makes diagnostics convenient to assert on in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the matcher that produced this failure.
    origin: String,
    /// Human-readable reason the rule could not apply.
    message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic from a matcher name and a reason.
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Name of the matcher that produced this failure.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Human-readable reason the rule could not apply.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let diag = Diagnostic::new("float", "no decimal point");
        assert_eq!(diag.origin(), "float");
        assert_eq!(diag.message(), "no decimal point");
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new("keyword", "no candidate starts with `z`");
        assert_eq!(format!("{}", diag), "keyword: no candidate starts with `z`");
    }

    #[test]
    fn test_equality() {
        let a = Diagnostic::new("whitespace", "empty");
        let b = Diagnostic::new("whitespace", "empty");
        let c = Diagnostic::new("integer", "empty");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
