//! The matching engine.
//!
//! Drives every live continuation across successive characters of the text
//! until none is left, collecting successes and failures along the way.
//! Purely combinational: no I/O, no panics; a rule that cannot apply
//! becomes an entry in [`StepSet::failures`] and nothing else.

use relex_util::Diagnostic;

use crate::cursor::Cursor;
use crate::matcher::{Continuation, MatcherSet, Step};
use crate::options::ScanOptions;
use crate::token::Token;

/// The working state of one scan.
///
/// A fresh set is built at every character position; `successes` and
/// `failures` carry over additively and are never overwritten, so the
/// final set holds the complete record of the scan: every alternate match
/// and every rule that gave up, with its reason.
pub struct StepSet {
    /// Continuations still alive, in matcher-registration order.
    pub matching: Vec<Box<dyn Continuation>>,
    /// Every success emitted so far, in emission order.
    pub successes: Vec<Token>,
    /// Every failure emitted so far.
    pub failures: Vec<Diagnostic>,
}

/// Runs one scan from a fixed start position.
pub struct MatchEngine<'a> {
    cursor: Cursor<'a>,
}

impl<'a> MatchEngine<'a> {
    /// Creates an engine positioned at `start` within `text`.
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::with_position(text, start),
        }
    }

    /// Drives all matchers to resolution and returns the final set.
    ///
    /// Each iteration feeds the current character (the `'\0'` sentinel
    /// once past the end) to every live continuation. The sentinel
    /// satisfies no built-in continue condition; a third-party
    /// continuation that still reports `Continuing` on it is resolved to
    /// a failure instead of being fed again, so the loop always
    /// terminates.
    pub fn run(mut self, matchers: &MatcherSet, options: &ScanOptions) -> StepSet {
        let mut set = StepSet {
            matching: matchers.start_all(options),
            successes: Vec::new(),
            failures: Vec::new(),
        };

        while !set.matching.is_empty() {
            let ch = self.cursor.current_char();
            let pos = self.cursor.position();
            let at_end = self.cursor.is_at_end();

            let StepSet {
                matching: live,
                successes,
                failures,
            } = set;
            let mut next = StepSet {
                matching: Vec::with_capacity(live.len()),
                successes,
                failures,
            };

            for continuation in live {
                match continuation.feed(ch, pos) {
                    Step::Continuing(continuation) => {
                        if at_end {
                            next.failures.push(Diagnostic::new(
                                "engine",
                                "continuation did not resolve at end of input",
                            ));
                        } else {
                            next.matching.push(continuation);
                        }
                    },
                    Step::Succeeded(tokens) => next.successes.extend(tokens),
                    Step::Failed(diag) => next.failures.push(diag),
                }
            }

            set = next;
            self.cursor.advance();
        }

        set
    }
}
