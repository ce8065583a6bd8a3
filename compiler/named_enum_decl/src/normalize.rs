//! C-style sequential value inference.
//!
//! A running cursor starts at zero. A member with an explicit value takes
//! that value; a member without one takes the cursor. Either way the cursor
//! moves to the member's value plus one. The cursor lives in `i128`, so
//! `max + 1` after the last member is not an error; only a member that would
//! actually take an out-of-range cursor is.

use rustc_hash::FxHashMap;

use crate::{DeclError, IntKind};

/// One declared member, before inference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumeratorSpec {
    pub name: String,
    pub explicit_value: Option<i128>,
}

impl EnumeratorSpec {
    /// A member whose value is inferred.
    pub fn implicit(name: impl Into<String>) -> Self {
        EnumeratorSpec {
            name: name.into(),
            explicit_value: None,
        }
    }

    /// A member with an explicit `name = value`.
    pub fn explicit(name: impl Into<String>, value: i128) -> Self {
        EnumeratorSpec {
            name: name.into(),
            explicit_value: Some(value),
        }
    }
}

/// One member with its concrete value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedEnumerator {
    pub name: String,
    pub value: i128,
}

/// Resolve every member's value, preserving declaration order.
///
/// Duplicate names are reported at the second occurrence. Range errors are
/// reported at the first member that leaves `kind`'s range.
pub fn normalize(
    kind: IntKind,
    specs: &[EnumeratorSpec],
) -> Result<Vec<ResolvedEnumerator>, DeclError> {
    if specs.is_empty() {
        return Err(DeclError::Empty);
    }

    check_unique_names(specs)?;

    let mut resolved = Vec::with_capacity(specs.len());
    let mut cursor: i128 = 0;

    for (index, spec) in specs.iter().enumerate() {
        let value = match spec.explicit_value {
            Some(value) => {
                if !kind.contains(value) {
                    return Err(DeclError::OutOfRange {
                        name: spec.name.clone(),
                        value,
                        kind,
                        index,
                    });
                }
                value
            }
            None => {
                if !kind.contains(cursor) {
                    return Err(DeclError::ImplicitOverflow {
                        name: spec.name.clone(),
                        previous: cursor - 1,
                        kind,
                        index,
                    });
                }
                cursor
            }
        };

        tracing::trace!(
            name = %spec.name,
            value = %value,
            explicit = spec.explicit_value.is_some(),
            "resolved enumerator"
        );

        cursor = value + 1;
        resolved.push(ResolvedEnumerator {
            name: spec.name.clone(),
            value,
        });
    }

    tracing::debug!(kind = %kind, members = resolved.len(), "normalized declaration");

    Ok(resolved)
}

fn check_unique_names(specs: &[EnumeratorSpec]) -> Result<(), DeclError> {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    seen.reserve(specs.len());

    for (index, spec) in specs.iter().enumerate() {
        if let Some(&first) = seen.get(spec.name.as_str()) {
            return Err(DeclError::DuplicateName {
                name: spec.name.clone(),
                first,
                index,
            });
        }
        seen.insert(&spec.name, index);
    }

    Ok(())
}
