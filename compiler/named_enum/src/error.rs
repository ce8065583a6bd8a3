//! Runtime lookup failures.
//!
//! These are the only errors reachable after compilation. Both are ordinary
//! values: raw storage may legitimately hold a bit pattern no enumerator uses,
//! and text may name nothing.

use std::fmt;

use thiserror::Error;

/// A raw value that no enumerator of `type_name` holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("no enumerator of `{type_name}` has value {value}")]
pub struct UnknownEnumerator<R: fmt::Display + fmt::Debug> {
    pub type_name: &'static str,
    pub value: R,
}

/// A name that no enumerator of `type_name` was declared with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("no enumerator of `{type_name}` is named `{name}`")]
pub struct UnknownName {
    pub type_name: &'static str,
    pub name: String,
}
