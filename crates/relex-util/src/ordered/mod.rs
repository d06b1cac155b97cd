//! OrderedMap - A key-preserving, insertion-ordered map.
//!
//! The scanner iterates its matcher registry and result collections through
//! this type. The one contract that matters to the engine is ordering:
//! iteration, [`map`](OrderedMap::map), [`filter`](OrderedMap::filter) and
//! [`fold`](OrderedMap::fold) all visit entries in insertion order, and
//! `filter` preserves the relative order of the entries it keeps. No
//! numeric-index contiguity is promised.
//!
//! Backed by `IndexMap` with the `FxHasher`, the same ordered-map stack the
//! rest of the workspace uses.
//!
//! # Example
//!
//! ```
//! use relex_util::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//!
//! // Insertion order, not key order.
//! let keys: Vec<&&str> = map.keys().collect();
//! assert_eq!(keys, vec![&"b", &"a"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasherDefault, Hash};

use indexmap::IndexMap;
use rustc_hash::FxHasher;

use crate::error::{OrderedMapError, OrderedMapResult};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// A map that remembers insertion order.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    inner: FxIndexMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            inner: FxIndexMap::default(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default()),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.inner.values()
    }

    /// Accumulates over entries in insertion order.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.inner
            .iter()
            .fold(init, |acc, (k, v)| f(acc, k, v))
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    /// Inserts a key-value pair.
    ///
    /// A fresh key is appended at the end of the order; re-inserting an
    /// existing key replaces its value in place (the entry keeps its
    /// original position) and returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns a reference to the value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Whether the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Fallible lookup.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedMapError::KeyNotFound`] when `key` is absent.
    pub fn try_get<Q>(&self, key: &Q) -> OrderedMapResult<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.inner
            .get(key)
            .ok_or_else(|| OrderedMapError::KeyNotFound(key.to_string()))
    }

    /// Applies `f` to every entry, producing a new map with the same keys
    /// in the same order.
    pub fn map<U, F>(&self, mut f: F) -> OrderedMap<K, U>
    where
        K: Clone,
        F: FnMut(&K, &V) -> U,
    {
        let mut out = OrderedMap::with_capacity(self.len());
        for (k, v) in &self.inner {
            out.insert(k.clone(), f(k, v));
        }
        out
    }

    /// Keeps the entries satisfying `pred`, preserving their relative order.
    pub fn filter<F>(&self, mut pred: F) -> OrderedMap<K, V>
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        let mut out = OrderedMap::new();
        for (k, v) in &self.inner {
            if pred(k, v) {
                out.insert(k.clone(), v.clone());
            }
        }
        out
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: FxIndexMap::from_iter(iter),
        }
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
