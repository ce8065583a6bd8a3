//! Declaration model for `named_enum`.
//!
//! This crate holds everything the `named_enum!` macro decides before it
//! emits any tokens:
//! - [`IntKind`]: the fixed-width integer backing an enumeration
//! - [`normalize`]: C-style sequential value inference
//! - [`EnumDeclaration`]: the normalized result, with alias resolution
//!
//! It has no proc-macro dependencies, so the rules can be unit tested
//! directly.
//!
//! ```
//! use named_enum_decl::{EnumDeclaration, EnumeratorSpec, IntKind};
//!
//! let decl = EnumDeclaration::new(
//!     "Mixed",
//!     IntKind::I16,
//!     &[EnumeratorSpec::explicit("val1", -10), EnumeratorSpec::implicit("val2")],
//! )?;
//! assert_eq!(decl.members()[1].value, -9);
//! assert_eq!(decl.aliases().count(), 0);
//! # Ok::<(), named_enum_decl::DeclError>(())
//! ```

mod declaration;
mod error;
mod int_kind;
mod normalize;

pub use declaration::EnumDeclaration;
pub use error::DeclError;
pub use int_kind::IntKind;
pub use normalize::{normalize, EnumeratorSpec, ResolvedEnumerator};
