//! Funcussion - functional combinators for everyday collections
//!
//! # Overview
//!
//! Funcussion adds `map`, `filter`, `reduce`, `detect`, `every`, `any`,
//! `flatten`, `min`/`max`, and indexed variants to the collections you already
//! use. Nothing is wrapped: bring a trait into scope and call the operations on
//! a `Vec`, a slice, a `HashMap`, or a `BTreeMap`.
//!
//! # Quick Start
//!
//! ```
//! use funcussion::prelude::*;
//! use std::collections::HashMap;
//!
//! let xs = vec![1, 2, 3, 4];
//! assert_eq!(xs.filter(|x| x % 2 == 0), vec![2, 4]);
//! assert_eq!(xs.detect(|x| *x > 2), Some(&3));
//! assert!(xs.every(|x| *x > 0));
//!
//! let prices: HashMap<&str, u32> = [("tea", 3), ("cake", 5)].into_iter().collect();
//! let total = prices.reduce_with_accumulator(0, |acc, _, p| acc + p);
//! assert_eq!(total, 8);
//! ```
//!
//! # Nested sequences
//!
//! ```
//! use funcussion::{Flatten, nested};
//!
//! assert_eq!(nested![[1, 2], [3, [4, 5]]].flatten(), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! # Untyped values
//!
//! [`Value`] holds heterogeneous data. Its container accessors check the
//! receiver's kind and return an [`Error`] on mismatch:
//!
//! ```
//! use funcussion::{Error, Value};
//!
//! let v = Value::from(vec![Value::from(1), Value::from(vec![Value::from("a")])]);
//! assert_eq!(v.flatten().unwrap(), Value::from(vec![Value::from(1), Value::from("a")]));
//! assert!(matches!(Value::from(1).flatten(), Err(Error::KindMismatch { .. })));
//! ```

pub use funcussion_core::{Error, Flatten, MappingOps, Nested, Result, SequenceOps, nested};
pub use funcussion_core::value::{self, Dict, Kind, Value};

/// The extension traits, for glob import.
pub mod prelude {
    pub use funcussion_core::{Flatten, MappingOps, SequenceOps};
}
