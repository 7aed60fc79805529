//! Error types.
//!
//! Structurally valid inputs never fail: empty sequences and mappings are
//! handled by each operation, and "no result" is an `Option::None`. The only
//! failure is asking an untyped [`Value`](crate::value::Value) to act as a
//! container it is not.

use thiserror::Error;

use crate::value::Kind;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The receiver of `operation` had the wrong kind.
    #[error("{operation}: expected {expected}, found {found}")]
    KindMismatch {
        operation: &'static str,
        expected: Kind,
        found: Kind,
    },
}

impl Error {
    pub(crate) fn kind_mismatch(operation: &'static str, expected: Kind, found: Kind) -> Self {
        tracing::debug!(operation, %expected, %found, "receiver kind mismatch");
        Error::KindMismatch {
            operation,
            expected,
            found,
        }
    }
}
