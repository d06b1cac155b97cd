//! The lexer state chain.
//!
//! Tokenization history lives in an arena of immutable-once-written state
//! nodes, addressed by [`StateId`] handles. Every node remembers the
//! position it scans from, the node it was derived from, and the full
//! outcome of the scan that produced it. A node's forward link is an
//! explicit tri-state ([`NextLink`]): unset, cleared, or cached. There is
//! no fallback to an ancestor's cached link - clearing one node can never
//! resurrect or expose a cached value from somewhere else in the chain.
//!
//! Rewinding is free (follow `previous`), and re-advancing from an old
//! node replays the memoized chain without rescanning. Forcing a rescan
//! clears a single node's forward link; the old forward nodes stay in the
//! arena, so divergent branches remain addressable side by side.

use relex_util::{Diagnostic, Idx, IndexVec};

use crate::arbiter;
use crate::engine::MatchEngine;
use crate::matcher::MatcherSet;
use crate::options::ScanOptions;
use crate::token::Token;

/// Handle of one state node in a [`Chain`]'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(u32);

impl Idx for StateId {
    fn from_usize(idx: usize) -> Self {
        assert!(idx <= u32::MAX as usize);
        StateId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Forward-cache slot of a state node.
///
/// `Unset` (never computed) and `Cleared` (explicitly invalidated) both
/// cause the next `advance` to run the engine; they are kept distinct so
/// an invalidation is observable and can never be confused with a value
/// inherited from elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NextLink {
    Unset,
    Cleared,
    Cached(StateId),
}

/// One tokenization snapshot.
#[derive(Debug)]
struct StateNode {
    /// Byte offset the next scan starts from.
    position: usize,
    /// Node this one was derived from; `None` for the root.
    previous: Option<StateId>,
    /// Winning token of the scan that produced this node, if any.
    longest: Option<Token>,
    /// Every successful match of that scan, longest included.
    successes: Vec<Token>,
    /// Every rule failure of that scan.
    failures: Vec<Diagnostic>,
    /// Forward memo slot.
    next: NextLink,
}

/// The persistent, navigable tokenization history.
///
/// # Example
///
/// ```
/// use relex_scan::{Chain, MatcherSet, ScanOptions, TokenKind};
/// use relex_scan::matcher::{IdentifierMatcher, WhitespaceMatcher};
///
/// let mut matchers = MatcherSet::new();
/// matchers.register(Box::new(WhitespaceMatcher)).unwrap();
/// matchers.register(Box::new(IdentifierMatcher)).unwrap();
///
/// let mut chain = Chain::new("test this", matchers, ScanOptions::new());
/// let first = chain.advance(chain.root());
/// let token = chain.longest_match(first).unwrap();
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.text, "test");
/// ```
pub struct Chain {
    /// The text under scan. Immutable for the chain's lifetime.
    text: String,
    /// Matcher registry shared by every scan in this chain.
    matchers: MatcherSet,
    /// Config shared by every scan in this chain.
    options: ScanOptions,
    /// Node arena. Nodes are appended, never removed or rewritten apart
    /// from their own `next` slot.
    nodes: IndexVec<StateId, StateNode>,
    /// Handle of the root node.
    root: StateId,
}

impl Chain {
    /// Creates a chain rooted at position 0 of `text`.
    pub fn new(text: impl Into<String>, matchers: MatcherSet, options: ScanOptions) -> Self {
        let mut nodes = IndexVec::new();
        let root = nodes.push(StateNode {
            position: 0,
            previous: None,
            longest: None,
            successes: Vec::new(),
            failures: Vec::new(),
            next: NextLink::Unset,
        });
        Self {
            text: text.into(),
            matchers,
            options,
            nodes,
            root,
        }
    }

    /// Handle of the root state.
    pub fn root(&self) -> StateId {
        self.root
    }

    /// Advances one step from `state`.
    ///
    /// A cached forward link is returned as-is, without rescanning.
    /// Otherwise the engine runs from the node's position, arbitration
    /// picks the longest success, and a new node is appended and cached:
    /// its position is the winner's end, or unchanged when no rule
    /// matched (so a dead end is detected by [`Chain::longest_match`]
    /// returning `None`, never by an error).
    pub fn advance(&mut self, state: StateId) -> StateId {
        if let NextLink::Cached(next) = self.nodes[state].next {
            return next;
        }

        let start = self.nodes[state].position;
        let outcome = MatchEngine::new(&self.text, start).run(&self.matchers, &self.options);
        let longest = arbiter::longest_match(&outcome.successes).cloned();
        let position = longest.as_ref().map_or(start, |token| token.end);

        let next = self.nodes.push(StateNode {
            position,
            previous: Some(state),
            longest,
            successes: outcome.successes,
            failures: outcome.failures,
            next: NextLink::Unset,
        });
        self.nodes[state].next = NextLink::Cached(next);
        next
    }

    /// Clears `state`'s own forward link, forcing the next `advance` from
    /// it to rescan. Ancestor and descendant nodes are untouched, and any
    /// previously derived forward nodes remain addressable.
    pub fn force_rescan(&mut self, state: StateId) {
        self.nodes[state].next = NextLink::Cleared;
    }

    /// The winning token of the scan that produced `state`, if any.
    /// `None` on the root and on dead-end nodes.
    pub fn longest_match(&self, state: StateId) -> Option<&Token> {
        self.nodes[state].longest.as_ref()
    }

    /// Byte offset the next scan from `state` starts at.
    pub fn position(&self, state: StateId) -> usize {
        self.nodes[state].position
    }

    /// The node `state` was derived from; `None` for the root.
    pub fn previous(&self, state: StateId) -> Option<StateId> {
        self.nodes[state].previous
    }

    /// The cached forward node, if one is currently cached.
    pub fn cached_next(&self, state: StateId) -> Option<StateId> {
        match self.nodes[state].next {
            NextLink::Cached(next) => Some(next),
            NextLink::Unset | NextLink::Cleared => None,
        }
    }

    /// Every successful match of the scan that produced `state`,
    /// longest included, in emission order.
    pub fn matches(&self, state: StateId) -> &[Token] {
        &self.nodes[state].successes
    }

    /// Every rule failure of the scan that produced `state`.
    pub fn failures(&self, state: StateId) -> &[Diagnostic] {
        &self.nodes[state].failures
    }

    /// The text under scan.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The config shared by every scan in this chain.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Whether `state` sits at or past the end of the text.
    pub fn at_end(&self, state: StateId) -> bool {
        self.nodes[state].position >= self.text.len()
    }

    /// Number of nodes in the arena, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Advances from the root until no rule matches, collecting the
    /// winning tokens.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut state = self.root;
        loop {
            let next = self.advance(state);
            match self.longest_match(next) {
                Some(token) => {
                    tokens.push(token.clone());
                    state = next;
                },
                None => break,
            }
        }
        tokens
    }
}
