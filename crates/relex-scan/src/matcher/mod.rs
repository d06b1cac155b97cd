//! The matcher capability and registry.
//!
//! A [`Matcher`] recognizes one token category by incremental character
//! consumption. `start` hands back a [`Continuation`]: the resumable state
//! of one scan, fed a character at a time until it resolves. Matchers hold
//! no per-scan state themselves, so a single matcher instance can drive
//! any number of independent scans.
//!
//! Each feed produces a [`Step`]:
//!
//! - `Continuing` - the rule can still extend; carries the next
//!   continuation.
//! - `Succeeded` - the rule stopped at a token boundary; carries one token
//!   per completed candidate (more than one only when duplicate keyword
//!   candidates complete together).
//! - `Failed` - the rule cannot apply here; carries a debug diagnostic the
//!   engine records but never inspects.
//!
//! Anything implementing [`Matcher`] can be registered; the engine needs
//! no other coupling.

use relex_util::{Diagnostic, OrderedMap};

use crate::error::{RegistryError, RegistryResult};
use crate::options::ScanOptions;
use crate::token::Token;

mod identifier;
mod keyword;
mod number;
mod operator;
mod punctuation;
mod whitespace;

pub use identifier::IdentifierMatcher;
pub use keyword::KeywordMatcher;
pub use number::{FloatMatcher, IntegerMatcher};
pub use operator::OperatorMatcher;
pub use punctuation::PunctuationMatcher;
pub use whitespace::WhitespaceMatcher;

/// A rule recognizing one token category.
pub trait Matcher {
    /// Unique registry name; also tags this matcher's failure diagnostics.
    fn name(&self) -> &str;

    /// Begins one scan, reading any candidate tables from `options`.
    fn start(&self, options: &ScanOptions) -> Box<dyn Continuation>;
}

/// The resumable state of a matcher mid-scan.
///
/// `feed` consumes the continuation: either it comes back wrapped in
/// [`Step::Continuing`] or it resolves and is gone. `pos` is the byte
/// offset of `ch`; a continuation that stops emits tokens ending exactly
/// at `pos`, since the stopping character itself is not consumed.
pub trait Continuation {
    /// Consumes one character and produces the next step. At end of input
    /// the engine feeds the `'\0'` sentinel, which no built-in rule
    /// continues on.
    fn feed(self: Box<Self>, ch: char, pos: usize) -> Step;
}

/// Outcome of feeding one character to one continuation.
pub enum Step {
    /// The rule can consume more; resume with this continuation.
    Continuing(Box<dyn Continuation>),
    /// The rule stopped at a token boundary.
    Succeeded(Vec<Token>),
    /// The rule cannot apply at this scan position.
    Failed(Diagnostic),
}

/// An ordered registry of matchers.
///
/// Registration order is iteration order, and it is also the arbitration
/// tie-break order: among equal-length winning candidates, the earliest
/// registered matcher's token is chosen.
///
/// # Example
///
/// ```
/// use relex_scan::matcher::{IdentifierMatcher, MatcherSet, WhitespaceMatcher};
///
/// let mut matchers = MatcherSet::new();
/// matchers.register(Box::new(WhitespaceMatcher)).unwrap();
/// matchers.register(Box::new(IdentifierMatcher)).unwrap();
/// assert_eq!(matchers.len(), 2);
/// ```
#[derive(Default)]
pub struct MatcherSet {
    matchers: OrderedMap<String, Box<dyn Matcher>>,
}

impl MatcherSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            matchers: OrderedMap::new(),
        }
    }

    /// Creates a registry holding all seven built-in matchers, registered
    /// in the order: identifier, keyword, operator, whitespace, integer,
    /// float, punctuation.
    pub fn standard() -> Self {
        let mut set = Self::new();
        // Fresh registry, fixed distinct names: registration cannot fail.
        let _ = set.register(Box::new(IdentifierMatcher));
        let _ = set.register(Box::new(KeywordMatcher));
        let _ = set.register(Box::new(OperatorMatcher));
        let _ = set.register(Box::new(WhitespaceMatcher));
        let _ = set.register(Box::new(IntegerMatcher));
        let _ = set.register(Box::new(FloatMatcher));
        let _ = set.register(Box::new(PunctuationMatcher));
        set
    }

    /// Registers a matcher at the end of the order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateMatcher`] when a matcher with the
    /// same name is already present.
    pub fn register(&mut self, matcher: Box<dyn Matcher>) -> RegistryResult<()> {
        let name = matcher.name().to_string();
        if self.matchers.contains_key(name.as_str()) {
            return Err(RegistryError::DuplicateMatcher(name));
        }
        self.matchers.insert(name, matcher);
        Ok(())
    }

    /// Number of registered matchers.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether no matcher is registered.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    /// Starts one continuation per matcher, in registration order.
    pub(crate) fn start_all(&self, options: &ScanOptions) -> Vec<Box<dyn Continuation>> {
        self.matchers.fold(
            Vec::with_capacity(self.matchers.len()),
            |mut live, _name, matcher| {
                live.push(matcher.start(options));
                live
            },
        )
    }
}
