//! Tests for the sequence combinators

use super::SequenceOps;
use alloc::{string::String, vec, vec::Vec};
use core::cmp::Ordering;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Tagged {
    v: i32,
    tag: &'static str,
}

fn by_v(a: &Tagged, b: &Tagged) -> Ordering {
    a.v.cmp(&b.v)
}

// ============================================================================
// firstObject / each
// ============================================================================

#[test]
fn test_first_object() {
    assert_eq!(vec![7, 8, 9].first_object(), Some(&7));
    assert_eq!(Vec::<i32>::new().first_object(), None);

    // A present-but-empty element is distinguishable from no element.
    let xs: Vec<Option<i32>> = vec![None];
    assert_eq!(xs.first_object(), Some(&None));
}

#[test]
fn test_each_visits_in_order() {
    let mut seen = Vec::new();
    vec!["a", "b", "c"].each(|s| seen.push(*s));
    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[test]
fn test_each_with_index() {
    let mut seen = Vec::new();
    vec!['x', 'y'].each_with_index(|c, i| seen.push((i, *c)));
    assert_eq!(seen, vec![(0, 'x'), (1, 'y')]);
}

#[test]
fn test_each_on_empty_never_calls() {
    let mut calls = 0;
    Vec::<u8>::new().each(|_| calls += 1);
    Vec::<u8>::new().each_with_index(|_, _| calls += 1);
    assert_eq!(calls, 0);
}

// ============================================================================
// map / filter
// ============================================================================

#[test]
fn test_map() {
    let words = vec!["one", "three"];
    assert_eq!(words.map(|w| w.len()), vec![3, 5]);
    assert_eq!(Vec::<i32>::new().map(|x| x + 1), Vec::<i32>::new());
}

#[test]
fn test_map_keeps_empty_results() {
    let xs = vec![1, 2, 3];
    let halves = xs.map(|x| if x % 2 == 0 { Some(x / 2) } else { None });
    assert_eq!(halves, vec![None, Some(1), None]);
}

#[test]
fn test_map_with_index() {
    let xs = vec![10, 20, 30];
    assert_eq!(xs.map_with_index(|x, i| x * i as i32), vec![0, 20, 60]);
}

#[test]
fn test_map_on_slice_of_array() {
    let arr = [1, 2, 3];
    assert_eq!(arr[..].map(|x| x * x), vec![1, 4, 9]);
}

#[test]
fn test_filter() {
    let xs = vec![5, 2, 8, 1, 9];
    assert_eq!(xs.filter(|x| *x > 4), vec![5, 8, 9]);
    assert_eq!(xs.filter(|_| false), Vec::<i32>::new());
    assert_eq!(xs, vec![5, 2, 8, 1, 9]);
}

// ============================================================================
// reduce
// ============================================================================

#[test]
fn test_reduce() {
    let xs = vec!["a", "b", "c"];
    let joined = xs.reduce(String::new(), |mut acc, s| {
        acc.push_str(s);
        acc
    });
    assert_eq!(joined, "abc");
}

#[test]
fn test_reduce_empty_returns_init() {
    let xs: Vec<i32> = Vec::new();
    assert_eq!(xs.reduce(42, |acc, x| acc + x), 42);
    assert_eq!(xs.reduce_with_index(42, |acc, x, i| acc + x + i as i32), 42);
}

#[test]
fn test_reduce_with_index() {
    let xs = vec![1, 1, 1];
    // 0*1 + 1*1 + 2*1
    assert_eq!(xs.reduce_with_index(0, |acc, x, i| acc + x * i as i32), 3);
}

#[test]
fn test_reduce_is_a_left_fold() {
    let xs = vec![1, 2, 3];
    assert_eq!(xs.reduce(100, |acc, x| acc - x), ((100 - 1) - 2) - 3);
}

// ============================================================================
// detect / every / any
// ============================================================================

#[test]
fn test_detect() {
    let xs = vec![1, 4, 6, 7];
    assert_eq!(xs.detect(|x| x % 2 == 0), Some(&4));
    assert_eq!(xs.detect(|x| *x > 100), None);
}

#[test]
fn test_detect_short_circuits() {
    let xs = vec![1, 2, 3, 4];
    let mut calls = 0;
    let found = xs.detect(|x| {
        calls += 1;
        *x == 2
    });
    assert_eq!(found, Some(&2));
    assert_eq!(calls, 2);
}

#[test]
fn test_every_and_any() {
    let xs = vec![2, 4, 6];
    assert!(xs.every(|x| x % 2 == 0));
    assert!(!xs.every(|x| *x < 5));
    assert!(xs.any(|x| *x == 6));
    assert!(!xs.any(|x| *x > 6));
}

#[test]
fn test_every_and_any_on_empty() {
    let xs: Vec<i32> = Vec::new();
    assert!(xs.every(|_| false));
    assert!(!xs.any(|_| true));
}

#[test]
fn test_every_and_any_short_circuit() {
    let xs = vec![1, 2, 3];

    let mut calls = 0;
    assert!(!xs.every(|_| {
        calls += 1;
        false
    }));
    assert_eq!(calls, 1);

    calls = 0;
    assert!(xs.any(|_| {
        calls += 1;
        true
    }));
    assert_eq!(calls, 1);
}

// ============================================================================
// min / max
// ============================================================================

#[test]
fn test_min_max() {
    let xs = vec![3, 1, 2];
    assert_eq!(xs.max_by(|a, b| a.cmp(b)), Some(&3));
    assert_eq!(xs.min_by(|a, b| a.cmp(b)), Some(&1));
}

#[test]
fn test_min_max_empty() {
    let xs: Vec<i32> = Vec::new();
    assert_eq!(xs.max_by(|a, b| a.cmp(b)), None);
    assert_eq!(xs.min_by(|a, b| a.cmp(b)), None);
}

#[test]
fn test_min_max_ties_keep_first() {
    let xs = vec![
        Tagged { v: 0, tag: "low" },
        Tagged { v: 1, tag: "first" },
        Tagged { v: 1, tag: "second" },
        Tagged { v: 0, tag: "low-again" },
    ];
    assert_eq!(xs.max_by(by_v).map(|t| t.tag), Some("first"));
    assert_eq!(xs.min_by(by_v).map(|t| t.tag), Some("low"));
}

#[test]
fn test_max_with_reversed_comparator_is_min() {
    let xs = vec![4, 9, 2];
    assert_eq!(xs.max_by(|a, b| b.cmp(a)), Some(&2));
}

// ============================================================================
// Fallible variants
// ============================================================================

#[test]
fn test_try_map() {
    let xs = vec!["1", "2", "3"];
    assert_eq!(xs.try_map(|s| s.parse::<i32>()), Ok(vec![1, 2, 3]));

    let bad = vec!["1", "x", "3"];
    assert!(bad.try_map(|s| s.parse::<i32>()).is_err());
}

#[test]
fn test_try_map_stops_at_first_error() {
    let xs = vec!["1", "x", "3", "y"];
    let mut calls = 0;
    let result = xs.try_map(|s| {
        calls += 1;
        s.parse::<i32>().map_err(|_| *s)
    });
    assert_eq!(result, Err("x"));
    assert_eq!(calls, 2);
}

#[test]
fn test_try_reduce_stops_at_first_error() {
    let xs = vec![1, 2, 3, 4];
    let mut visited = Vec::new();
    let result = xs.try_reduce(0, |acc, x| {
        visited.push(*x);
        if *x == 2 { Err("two") } else { Ok(acc + x) }
    });
    assert_eq!(result, Err("two"));
    assert_eq!(visited, vec![1, 2]);

    assert_eq!(xs.try_reduce(0, |acc, x| Ok::<_, ()>(acc + x)), Ok(10));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_map_preserves_length_and_order(xs in proptest::collection::vec(any::<i32>(), 0..64)) {
        let f = |x: &i32| x.wrapping_mul(3);
        let mapped = xs.map(f);
        prop_assert_eq!(mapped.len(), xs.len());
        for (i, x) in xs.iter().enumerate() {
            prop_assert_eq!(mapped[i], f(x));
        }
    }

    #[test]
    fn prop_filter_partitions(xs in proptest::collection::vec(any::<i16>(), 0..64)) {
        let p = |x: &i16| x % 3 == 0;
        let kept = xs.filter(p);
        prop_assert!(kept.every(p));
        let expected: Vec<i16> = xs.iter().copied().filter(|x| p(x)).collect();
        prop_assert_eq!(&kept, &expected);
        prop_assert_eq!(kept.len() + xs.filter(|x| !p(x)).len(), xs.len());
    }

    #[test]
    fn prop_reduce_matches_fold(xs in proptest::collection::vec(any::<i32>(), 0..64), init in any::<i32>()) {
        let folded = xs.iter().fold(init, |acc, x| acc.wrapping_sub(*x));
        prop_assert_eq!(xs.reduce(init, |acc, x| acc.wrapping_sub(*x)), folded);
    }

    #[test]
    fn prop_every_is_dual_of_any(xs in proptest::collection::vec(any::<u8>(), 0..32), pivot in any::<u8>()) {
        let p = |x: &u8| *x < pivot;
        prop_assert_eq!(xs.every(p), !xs.any(|x| !p(x)));
    }

    #[test]
    fn prop_detect_is_first_of_filter(xs in proptest::collection::vec(0u8..10, 0..32), target in 0u8..10) {
        let p = |x: &u8| *x >= target;
        let filtered = xs.filter(p);
        prop_assert_eq!(xs.detect(p), filtered.first_object());
    }
}
