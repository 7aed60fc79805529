//! Combinators over ordered sequences.
use core::cmp::Ordering;

use crate::Vec;

/// Higher-order operations over an ordered sequence.
///
/// Implemented for `[T]`, so every `Vec<T>`, boxed slice, and `&[T]` picks
/// these up through auto-deref. Fixed-size arrays have an inherent `map`, so
/// call through a slice there (`arr[..].map(..)`).
///
/// None of the operations mutate the receiver. Callbacks run synchronously,
/// once per element, left to right; each is dropped when the call returns.
pub trait SequenceOps<T> {
    /// The first element, or `None` for an empty sequence.
    fn first_object(&self) -> Option<&T>;

    /// Invoke `f` on every element in order.
    fn each<F>(&self, f: F)
    where
        F: FnMut(&T);

    /// Invoke `f` on every element together with its index.
    fn each_with_index<F>(&self, f: F)
    where
        F: FnMut(&T, usize);

    /// Transform every element, preserving length and order.
    ///
    /// Whatever `f` returns is stored as-is: mapping to `Option<U>` yields a
    /// `Vec<Option<U>>`, `None`s included.
    fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U;

    /// Like [`map`](Self::map), with the element's index.
    fn map_with_index<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T, usize) -> U;

    /// Keep the elements for which `predicate` holds, in their original order.
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Left fold: `f(f(f(init, s[0]), s[1]), ...)`. Returns `init` untouched on
    /// an empty sequence.
    fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A;

    /// Left fold with the element's index.
    fn reduce_with_index<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T, usize) -> A;

    /// The first element satisfying `predicate`; stops at the first match.
    fn detect<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// `true` iff `predicate` holds for all elements; `true` when empty.
    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// `true` iff `predicate` holds for some element; `false` when empty.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// The smallest element under `compare`. Among equals the first one wins.
    fn min_by<C>(&self, compare: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering;

    /// The largest element under `compare`. Among equals the first one wins,
    /// unlike `Iterator::max_by`, which keeps the last.
    fn max_by<C>(&self, compare: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering;

    /// [`map`](Self::map) with a fallible callback. Returns the first error.
    fn try_map<U, E, F>(&self, f: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>;

    /// [`reduce`](Self::reduce) with a fallible callback. Returns the first
    /// error.
    fn try_reduce<A, E, F>(&self, init: A, f: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>;
}

impl<T> SequenceOps<T> for [T] {
    fn first_object(&self) -> Option<&T> {
        self.first()
    }

    fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for item in self {
            f(item);
        }
    }

    fn each_with_index<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
    }

    fn map<U, F>(&self, f: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    fn map_with_index<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.iter()
            .enumerate()
            .map(|(index, item)| f(item, index))
            .collect()
    }

    fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(init, f)
    }

    fn reduce_with_index<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        self.iter()
            .enumerate()
            .fold(init, |acc, (index, item)| f(acc, item, index))
    }

    fn detect<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    fn min_by<C>(&self, compare: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        extremum(self, compare, Ordering::Less)
    }

    fn max_by<C>(&self, compare: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        extremum(self, compare, Ordering::Greater)
    }

    fn try_map<U, E, F>(&self, f: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        self.iter().map(f).collect()
    }

    fn try_reduce<A, E, F>(&self, init: A, mut f: F) -> Result<A, E>
    where
        F: FnMut(A, &T) -> Result<A, E>,
    {
        let mut acc = init;
        for item in self {
            acc = f(acc, item)?;
        }
        Ok(acc)
    }
}

/// Single pass keeping the current best; a candidate only replaces it when it
/// compares strictly `wanted`, so the first of several equals survives.
fn extremum<T, C>(items: &[T], mut compare: C, wanted: Ordering) -> Option<&T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = items.split_first()?;
    let mut best = first;
    for candidate in rest {
        if compare(candidate, best) == wanted {
            best = candidate;
        }
    }
    Some(best)
}

#[cfg(test)]
#[path = "seq_test.rs"]
mod seq_test;
