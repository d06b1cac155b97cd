//! Character classification predicates.
//!
//! Pure ASCII predicates shared by the matcher variants. No side effects,
//! no errors. The end-of-input sentinel `'\0'` satisfies none of them,
//! which is what forces every live continuation to resolve at the end of
//! the text.

/// Whether `ch` is an ASCII letter.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Whether `ch` is an ASCII digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Whether `ch` is ASCII whitespace (space, tab, newline, carriage
/// return, or form feed).
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Whether `ch` belongs to the ASCII punctuation set.
///
/// Note that `_` is punctuation as well as an identifier character; when
/// both matchers are registered, arbitration decides which wins.
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    ch.is_ascii_punctuation()
}

/// Whether `ch` is an underscore.
#[inline]
pub fn is_underscore(ch: char) -> bool {
    ch == '_'
}
