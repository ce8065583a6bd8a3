//! Error: Only fixed-width integers can back an enumeration.

use named_enum::named_enum;

named_enum!(Pointer, usize, a);

fn main() {}
