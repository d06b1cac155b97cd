//! Character cursor for traversing the input text.
//!
//! The cursor maintains a byte position and yields `'\0'` once past the end
//! of the text. That sentinel satisfies no matcher's continue condition, so
//! a scan that reaches end-of-input forces every live continuation to
//! resolve without any explicit bounds branching in the engine loop.

/// A cursor over the input text.
///
/// # Example
///
/// ```
/// use relex_scan::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'b');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '\0');
/// assert!(cursor.is_at_end());
/// ```
pub struct Cursor<'a> {
    /// The text being traversed.
    source: &'a str,

    /// Current byte position.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::with_position(source, 0)
    }

    /// Creates a cursor at an arbitrary byte position.
    ///
    /// Positions at or past the end of the text are valid and read as the
    /// sentinel; the state chain resumes scans this way.
    pub fn with_position(source: &'a str, position: usize) -> Self {
        Self { source, position }
    }

    /// The character at the cursor, or `'\0'` past the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// The character `offset` bytes ahead of the cursor, or `'\0'` past
    /// the end.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (the common case for scanner input).
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances past the current character. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += self.current_char().len_utf8();
        }
    }

    /// Whether the cursor is at or past the end of the text.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The full text under the cursor.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_ascii_text() {
        let mut cursor = Cursor::new("let");
        assert_eq!(cursor.current_char(), 'l');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'e');
        cursor.advance();
        assert_eq!(cursor.current_char(), 't');
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_sentinel_at_end() {
        let cursor = Cursor::new("");
        assert_eq!(cursor.current_char(), '\0');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_with_position() {
        let cursor = Cursor::with_position("test this", 5);
        assert_eq!(cursor.current_char(), 't');
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_char_at_lookahead() {
        let cursor = Cursor::new("+=");
        assert_eq!(cursor.char_at(0), '+');
        assert_eq!(cursor.char_at(1), '=');
        assert_eq!(cursor.char_at(2), '\0');
    }

    #[test]
    fn test_non_ascii_advances_by_utf8_width() {
        let mut cursor = Cursor::new("é!");
        assert_eq!(cursor.current_char(), 'é');
        cursor.advance();
        assert_eq!(cursor.current_char(), '!');
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("abc def");
        for _ in 0..3 {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(0), "abc");
    }
}
