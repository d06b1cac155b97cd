//! relex-util - Foundation Types for the relex Scanner
//!
//! This crate provides the small, domain-free building blocks shared by the
//! relex workspace:
//!
//! - [`OrderedMap`] - a key-preserving, insertion-ordered map with
//!   `map`/`filter`/`fold` over its entries. The scanner iterates its
//!   matcher and result collections through this type and relies on it to
//!   preserve the relative order of entries it did not filter out.
//! - [`IndexVec`] and [`Idx`] - a vector addressed by a typed index,
//!   used as the arena backing the scanner's state chain.
//! - [`Diagnostic`] - a free-form debug record (origin + message) attached
//!   to matcher failures. Purely informational; nothing branches on it.
//!
//! # Example
//!
//! ```
//! use relex_util::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("first", 1);
//! map.insert("second", 2);
//! map.insert("third", 3);
//!
//! // Entry order is insertion order, and fold sees it in that order.
//! let keys = map.fold(String::new(), |acc, k, _v| acc + k + " ");
//! assert_eq!(keys, "first second third ");
//! ```

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod ordered;

pub use diagnostic::Diagnostic;
pub use error::{OrderedMapError, OrderedMapResult};
pub use index_vec::{Idx, IndexVec};
pub use ordered::OrderedMap;
