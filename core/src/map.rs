//! Combinators over key/value mappings.
//!
//! # Iteration order
//!
//! Operations visit pairs in the receiver's iteration order. For hash maps
//! that order is unspecified and may differ between runs, so results that
//! depend on it are not deterministic: which of two colliding keys survives
//! [`MappingOps::map`], or the value of an order-sensitive
//! [`MappingOps::reduce_with_accumulator`]. Use a `BTreeMap` receiver (and
//! collect into a `BTreeMap`) when that matters.
//!
//! Operations that build a new mapping collect into any
//! `FromIterator<(K, V)>` the caller picks, the same way `Iterator::collect`
//! does. Later insertions overwrite earlier ones on key collision.
use alloc::collections::BTreeMap;
use core::hash::BuildHasher;

use crate::Vec;

/// Higher-order operations over a key/value mapping.
pub trait MappingOps<K, V> {
    /// All pairs in iteration order.
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;

    /// Invoke `f` once per pair.
    fn each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.pairs() {
            f(k, v);
        }
    }

    /// Build a new mapping by merging the fragment `f` returns for each pair.
    ///
    /// A fragment may hold any number of pairs, all of which are merged.
    fn map<C, K2, V2, I, F>(&self, mut f: F) -> C
    where
        C: FromIterator<(K2, V2)>,
        I: IntoIterator<Item = (K2, V2)>,
        F: FnMut(&K, &V) -> I,
    {
        self.pairs().flat_map(|(k, v)| f(k, v)).collect()
    }

    /// Same keys, each value replaced by what `f` returns.
    fn map_values<C, U, F>(&self, mut f: F) -> C
    where
        K: Clone,
        C: FromIterator<(K, U)>,
        F: FnMut(&K, &V) -> U,
    {
        self.pairs().map(|(k, v)| (k.clone(), f(k, v))).collect()
    }

    /// One element per pair, in iteration order.
    fn map_to_array<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&K, &V) -> U,
    {
        self.pairs().map(|(k, v)| f(k, v)).collect()
    }

    /// Keep the pairs for which `predicate` holds.
    fn filter<C, P>(&self, mut predicate: P) -> C
    where
        K: Clone,
        V: Clone,
        C: FromIterator<(K, V)>,
        P: FnMut(&K, &V) -> bool,
    {
        self.pairs()
            .filter(|(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Fold over all pairs. Returns `init` untouched on an empty mapping.
    fn reduce_with_accumulator<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.pairs().fold(init, |acc, (k, v)| f(acc, k, v))
    }

    /// `true` iff `predicate` holds for every pair; `true` when empty.
    fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.pairs().all(|(k, v)| predicate(k, v))
    }

    /// `true` iff `predicate` holds for some pair; `false` when empty.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.pairs().any(|(k, v)| predicate(k, v))
    }
}

impl<K, V, S> MappingOps<K, V> for hashbrown::HashMap<K, V, S>
where
    S: BuildHasher,
{
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> MappingOps<K, V> for std::collections::HashMap<K, V, S>
where
    S: BuildHasher,
{
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

impl<K, V> MappingOps<K, V> for BTreeMap<K, V> {
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.iter()
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
