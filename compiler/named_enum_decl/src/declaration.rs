//! A normalized enumeration declaration.
//!
//! Members may share a value. The first member declared with a given value
//! is canonical: it owns the value's name in reflection and becomes a real
//! variant. Later members with the same value are aliases of it.

use crate::{normalize, DeclError, EnumeratorSpec, IntKind, ResolvedEnumerator};

/// One enumeration: its name, underlying kind and resolved members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub type_name: String,
    pub kind: IntKind,
    /// Declaration order; never empty.
    members: Vec<ResolvedEnumerator>,
}

impl EnumDeclaration {
    /// Normalize `specs` and build the declaration.
    pub fn new(
        type_name: impl Into<String>,
        kind: IntKind,
        specs: &[EnumeratorSpec],
    ) -> Result<Self, DeclError> {
        let members = normalize(kind, specs)?;
        Ok(EnumDeclaration {
            type_name: type_name.into(),
            kind,
            members,
        })
    }

    /// All members in declaration order, aliases included.
    #[inline]
    pub fn members(&self) -> &[ResolvedEnumerator] {
        &self.members
    }

    /// The first-declared member holding `value`.
    fn first_with_value(&self, value: i128) -> Option<usize> {
        self.members.iter().position(|m| m.value == value)
    }

    /// Position of the first member holding the same value as the member
    /// at `index`. Equal to `index` unless that member is an alias.
    fn canonical_index(&self, index: usize) -> Option<usize> {
        self.first_with_value(self.members.get(index)?.value)
    }

    fn is_canonical(&self, index: usize) -> bool {
        self.canonical_index(index) == Some(index)
    }

    /// Canonical members with their positions, one per distinct value, in
    /// declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (usize, &ResolvedEnumerator)> {
        self.members
            .iter()
            .enumerate()
            .filter(move |&(index, _)| self.is_canonical(index))
    }

    /// Positions of aliased members, each paired with the position of the
    /// canonical member it repeats.
    pub fn aliases(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.members.len()).filter_map(move |index| {
            self.canonical_index(index)
                .filter(|&canonical| canonical != index)
                .map(|canonical| (index, canonical))
        })
    }
}
