//! Arbitrarily nested sequences and their flattening.
use crate::{Vec, vec};

/// An element of a sequence that may itself hold further sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    pub fn seq(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Seq(items.into_iter().collect())
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }
}

/// Collapse nested sequences into a single flat sequence.
///
/// Nested sequences are expanded recursively in pre-order, so
/// `[[1, 2], [3, [4, 5]]]` becomes `[1, 2, 3, 4, 5]`. Plain items pass
/// through and empty nested sequences contribute nothing. Flattening a
/// sequence that is already flat returns its items unchanged.
///
/// ```
/// use funcussion_core::{Flatten, nested};
///
/// let xs = nested![[1, 2], [3, [4, 5]], []];
/// assert_eq!(xs.flatten(), vec![1, 2, 3, 4, 5]);
/// ```
pub trait Flatten {
    type Item;

    fn flatten(&self) -> Vec<Self::Item>;
}

impl<T: Clone> Flatten for [Nested<T>] {
    type Item = T;

    fn flatten(&self) -> Vec<T> {
        let mut out = Vec::new();
        // Explicit stack of slice iterators; nesting depth is bounded by the
        // heap, not the call stack.
        let mut stack = vec![self.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Nested::Item(value)) => out.push(value.clone()),
                Some(Nested::Seq(inner)) => stack.push(inner.iter()),
                None => {
                    stack.pop();
                }
            }
        }
        out
    }
}

impl<T: Clone> Flatten for Nested<T> {
    type Item = T;

    fn flatten(&self) -> Vec<T> {
        core::slice::from_ref(self).flatten()
    }
}

/// Build a `Vec<Nested<T>>` from a bracketed literal.
///
/// Each element must be a single token tree: a literal, an identifier, a
/// bracketed sub-sequence, or a parenthesized expression. Negative literals
/// are two tokens, so write them as `(-1)`.
///
/// ```
/// use funcussion_core::{Flatten, Nested, nested};
///
/// let xs = nested![1, [2, (1 + 2)]];
/// assert_eq!(
///     xs,
///     vec![Nested::Item(1), Nested::Seq(vec![Nested::Item(2), Nested::Item(3)])],
/// );
///
/// let signed = nested![(-1), [2, [(-3)]]];
/// assert_eq!(signed.flatten(), vec![-1, 2, -3]);
/// ```
#[macro_export]
macro_rules! nested {
    (@elem [$($inner:tt),* $(,)?]) => {
        $crate::Nested::Seq($crate::shim::vec![$($crate::nested!(@elem $inner)),*])
    };
    (@elem $item:expr) => {
        $crate::Nested::Item($item)
    };
    ($($elem:tt),* $(,)?) => {
        $crate::shim::vec![$($crate::nested!(@elem $elem)),*]
    };
}
