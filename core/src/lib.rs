#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Higher-order combinators over sequences and key/value mappings.
//!
//! Two extension traits carry the operations:
//!
//! - [`SequenceOps`] for slices (and therefore `Vec<T>`): `map`, `filter`,
//!   `reduce`, `detect`, `every`, `any`, `min_by`/`max_by` and friends.
//! - [`MappingOps`] for hash maps and B-tree maps: `map`, `map_values`,
//!   `map_to_array`, `filter`, `reduce_with_accumulator`, `every`, `any`.
//!
//! Nested sequences are flattened through [`Nested`] and [`Flatten`], and the
//! untyped, heterogeneous world lives in [`value::Value`].
//!
//! ```
//! use funcussion_core::SequenceOps;
//!
//! let xs = vec![3, 1, 2];
//! assert_eq!(xs.map(|x| x * 2), vec![6, 2, 4]);
//! assert_eq!(xs.reduce(0, |acc, x| acc + x), 6);
//! assert_eq!(xs.max_by(|a, b| a.cmp(b)), Some(&3));
//! ```

// Needed so that macros can uniformly refer to `::funcussion_core` and still
// work from within this crate or a different one.
extern crate self as funcussion_core;

extern crate alloc;

// Exports some symbols publicly so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{string::String, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod map;
pub mod nested;
pub mod seq;
pub mod value;

pub use error::{Error, Result};
pub use map::MappingOps;
pub use nested::{Flatten, Nested};
pub use seq::SequenceOps;
