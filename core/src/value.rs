//! Untyped, heterogeneous values.
//!
//! [`Value`] covers the case where a sequence mixes element kinds, including
//! nested arrays at any depth. Typed code should prefer [`SequenceOps`] and
//! [`MappingOps`] directly; a `Value` only adds the receiver-kind check and
//! then hands out plain slices and maps those traits work on.
//!
//! [`SequenceOps`]: crate::SequenceOps
//! [`MappingOps`]: crate::MappingOps
use core::fmt;

use crate::{Error, Result, String, Vec, vec};

pub type Dict = hashbrown::HashMap<String, Value>;

/// The kind of a [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    Array,
    Dict,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::Array => "array",
            Kind::Dict => "dict",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Dict(Dict),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Dict(_) => Kind::Dict,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// The elements of an array receiver, or `KindMismatch` naming `operation`.
    pub fn expect_array(&self, operation: &'static str) -> Result<&[Value]> {
        self.as_array()
            .ok_or_else(|| Error::kind_mismatch(operation, Kind::Array, self.kind()))
    }

    /// The pairs of a dict receiver, or `KindMismatch` naming `operation`.
    pub fn expect_dict(&self, operation: &'static str) -> Result<&Dict> {
        self.as_dict()
            .ok_or_else(|| Error::kind_mismatch(operation, Kind::Dict, self.kind()))
    }

    /// The first element of an array receiver. `Ok(None)` when it is empty,
    /// which is distinct from `Ok(Some(&Value::Nil))`.
    pub fn first_object(&self) -> Result<Option<&Value>> {
        Ok(self.expect_array("first_object")?.first())
    }

    /// Expand nested arrays at any depth into one flat array.
    ///
    /// Elements that are not arrays, dicts included, are copied through as-is.
    pub fn flatten(&self) -> Result<Value> {
        let items = self.expect_array("flatten")?;
        let mut out = Vec::with_capacity(items.len());
        let mut stack = vec![items.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Value::Array(inner)) => stack.push(inner.iter()),
                Some(other) => out.push(other.clone()),
                None => {
                    stack.pop();
                }
            }
        }
        Ok(Value::Array(out))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(String::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}
