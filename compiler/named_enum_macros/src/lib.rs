//! Procedural macro behind `named_enum`.
//!
//! Use it through the `named_enum` crate, which re-exports the macro and
//! provides the `NamedEnum` trait and error types the expansion refers to.
//!
//! # Expansion
//!
//! ```text
//! named_enum!(pub Mixed, i16, val1 = -10, val2);
//! ```
//!
//! becomes, in outline:
//!
//! ```text
//! #[repr(i16)]
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! pub enum Mixed { val1 = -10, val2 = -9 }
//!
//! impl Mixed {
//!     pub const TABLE: &'static [(&'static str, i16)] = &[("val1", -10), ("val2", -9)];
//!     pub const fn name(self) -> &'static str { match self { .. } }
//!     // to_raw, from_raw, name_of_raw, from_name, COUNT
//! }
//! // NamedEnum, Display, FromStr, TryFrom<i16>, From<Mixed> for i16
//! ```

mod expand;
mod input;
mod utils;

use proc_macro::TokenStream;

/// Declare a scoped integer enumeration with enumerator name reflection.
///
/// # Syntax
///
/// `named_enum!(attrs* vis? TypeName, repr, entry (, entry)* ,?)` where
/// `repr` is one of `i8 i16 i32 i64 u8 u16 u32 u64` and each entry is
/// `name` or `name = literal`. Literals are integers, optionally negated.
///
/// Enumerators without a value take the previous value plus one, starting
/// at zero. Enumerators may share a value; the first one declared becomes
/// the variant and the rest become associated constants.
///
/// # Options
///
/// - `#[named_enum(crate = path)]` - path to the runtime crate
///   (default `::named_enum`).
///
/// # Errors
///
/// Compile errors for: duplicate names, literals outside `repr`'s range,
/// inferred values that overflow `repr`, unsupported `repr`, non-literal
/// values, and non-doc attributes on enumerators.
#[proc_macro]
pub fn named_enum(input: TokenStream) -> TokenStream {
    expand::named_enum(input)
}
