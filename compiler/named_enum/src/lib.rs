//! Scoped integer enumerations that know their own enumerator names.
//!
//! [`named_enum!`] takes a type name, an underlying integer type and an
//! ordered list of enumerators, each optionally with an explicit value:
//!
//! ```
//! use named_enum::{enum_name, named_enum};
//!
//! named_enum!(pub Mixed, i16, val1 = -10, val2);
//!
//! assert_eq!(Mixed::val2 as i16, -9);
//! assert_eq!(enum_name(Mixed::val1), "val1");
//! assert_eq!(Mixed::from_raw(-9), Some(Mixed::val2));
//! assert_eq!(Mixed::name_of_raw(0), None);
//! ```
//!
//! Values are inferred C-style: an enumerator without a value takes the
//! previous enumerator's value plus one, starting from zero. Duplicate
//! names, literals that do not fit the underlying type, and inferred values
//! that overflow it are compile errors.
//!
//! # Aliases
//!
//! Two enumerators may hold the same value. The first one declared becomes
//! the enum variant and owns the value's name; later ones are associated
//! constants equal to it.
//!
//! ```
//! use named_enum::named_enum;
//!
//! named_enum!(Status, u8, ok, failed, success = 0);
//!
//! assert_eq!(Status::success, Status::ok);
//! assert_eq!(Status::success.name(), "ok");
//! assert_eq!(Status::TABLE, &[("ok", 0), ("failed", 1), ("success", 0)]);
//! ```
//!
//! # Generated items
//!
//! For `named_enum!(T, R, ...)`:
//! - `enum T` with `#[repr(R)]` and `Clone, Copy, PartialEq, Eq, Hash, Debug`
//! - `T::name`, `T::to_raw`, `T::from_raw`, `T::name_of_raw`, `T::from_name`
//! - `T::TABLE` (every enumerator in declaration order) and `T::COUNT`
//! - `NamedEnum`, `Display`, `FromStr`, `TryFrom<R>` for `T`, `From<T>` for `R`
//!
//! A variant named like one of these items shadows it for `T::item` paths;
//! use method-call syntax or [`NamedEnum`] instead. An alias named like one
//! of them is a compile error.
//!
//! Leading attributes are forwarded to the enum. The option attribute
//! `#[named_enum(crate = path)]` changes the path generated code uses to
//! reach this crate, for crates that re-export it.

mod error;

use std::fmt;

pub use error::{UnknownEnumerator, UnknownName};
pub use named_enum_macros::named_enum;

/// An enumeration generated by [`named_enum!`].
pub trait NamedEnum: Copy + Eq + fmt::Debug + 'static {
    /// The underlying integer type.
    type Repr: Copy + Eq + fmt::Display + fmt::Debug + 'static;

    /// The enumeration's type name as declared.
    const TYPE_NAME: &'static str;

    /// Every enumerator with its value, in declaration order.
    const TABLE: &'static [(&'static str, Self::Repr)];

    /// The name this value was declared with.
    fn name(self) -> &'static str;

    /// The underlying value.
    fn to_raw(self) -> Self::Repr;

    /// The enumerator holding `raw`, if any.
    fn from_raw(raw: Self::Repr) -> Option<Self>;
}

/// Name of an enumerator.
///
/// For values shared by several enumerators this is the first one declared.
#[inline]
pub fn enum_name<E: NamedEnum>(value: E) -> &'static str {
    value.name()
}

/// Name of the enumerator holding `raw`.
pub fn name_of_raw<E: NamedEnum>(
    raw: E::Repr,
) -> Result<&'static str, UnknownEnumerator<E::Repr>> {
    E::from_raw(raw).map(E::name).ok_or(UnknownEnumerator {
        type_name: E::TYPE_NAME,
        value: raw,
    })
}

/// The enumerator holding `raw`.
pub fn try_enum_from_raw<E: NamedEnum>(raw: E::Repr) -> Result<E, UnknownEnumerator<E::Repr>> {
    E::from_raw(raw).ok_or(UnknownEnumerator {
        type_name: E::TYPE_NAME,
        value: raw,
    })
}

/// The enumerator declared as `name`. Aliases resolve to their variant.
pub fn enum_from_name<E: NamedEnum>(name: &str) -> Result<E, UnknownName> {
    E::TABLE
        .iter()
        .find(|(declared, _)| *declared == name)
        .and_then(|&(_, raw)| E::from_raw(raw))
        .ok_or_else(|| UnknownName {
            type_name: E::TYPE_NAME,
            name: name.to_string(),
        })
}
