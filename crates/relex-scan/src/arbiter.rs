//! Longest-match arbitration.

use crate::token::Token;

/// Selects the winning match from a scan's accumulated successes.
///
/// Maximum text length wins. Ties go to the first success in accumulation
/// order, and because continuations are fed in lockstep and a success's
/// text always equals the full consumed text at its stopping step,
/// equal-length successes always surface at the same engine step - so the
/// tie-break is exactly matcher-registration order.
///
/// Returns `None` for an empty success list: no rule matched, and the
/// scan position must not advance.
pub fn longest_match(successes: &[Token]) -> Option<&Token> {
    successes.iter().fold(None, |best, candidate| match best {
        Some(token) if token.len() >= candidate.len() => Some(token),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_empty_list_yields_none() {
        assert_eq!(longest_match(&[]), None);
    }

    #[test]
    fn test_single_success_wins() {
        let successes = vec![Token::new(TokenKind::Integer, "96", 2)];
        assert_eq!(longest_match(&successes), Some(&successes[0]));
    }

    #[test]
    fn test_longer_match_beats_earlier_shorter() {
        let successes = vec![
            Token::new(TokenKind::Integer, "6", 1),
            Token::new(TokenKind::Float, "6.1", 3),
        ];
        assert_eq!(longest_match(&successes), Some(&successes[1]));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let successes = vec![
            Token::new(TokenKind::Keyword, "test", 4),
            Token::new(TokenKind::Identifier, "test", 4),
        ];
        let winner = longest_match(&successes).unwrap();
        assert_eq!(winner.kind, TokenKind::Keyword);
    }
}
