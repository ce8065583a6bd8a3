//! Declaration-time errors.
//!
//! Every variant that concerns a single member carries that member's index
//! in declaration order, so callers holding source spans can point at it.

use thiserror::Error;

use crate::IntKind;

/// A declaration that cannot be turned into an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclError {
    /// Two members share a name.
    #[error("duplicate enumerator name `{name}` (first declared at position {first})")]
    DuplicateName {
        name: String,
        first: usize,
        index: usize,
    },

    /// An explicit literal does not fit the underlying type.
    #[error("value {value} of enumerator `{name}` is out of range for `{kind}`")]
    OutOfRange {
        name: String,
        value: i128,
        kind: IntKind,
        index: usize,
    },

    /// An inferred value (previous + 1) does not fit the underlying type.
    #[error("implicit value of enumerator `{name}` overflows `{kind}` (previous value is {previous})")]
    ImplicitOverflow {
        name: String,
        previous: i128,
        kind: IntKind,
        index: usize,
    },

    /// The underlying type is not a fixed-width integer.
    #[error("unsupported underlying type `{found}`, expected one of i8, i16, i32, i64, u8, u16, u32, u64")]
    UnsupportedRepr { found: String },

    /// A declaration with no members.
    #[error("an enumeration needs at least one enumerator")]
    Empty,
}

impl DeclError {
    /// Position of the offending member, when the error is about one member.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::DuplicateName { index, .. }
            | Self::OutOfRange { index, .. }
            | Self::ImplicitOverflow { index, .. } => Some(*index),
            Self::UnsupportedRepr { .. } | Self::Empty => None,
        }
    }
}
