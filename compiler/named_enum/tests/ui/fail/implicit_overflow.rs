//! Error: An inferred value may not leave the underlying type's range.

use named_enum::named_enum;

named_enum!(Overflow, i8, max = 127, next);

fn main() {}
