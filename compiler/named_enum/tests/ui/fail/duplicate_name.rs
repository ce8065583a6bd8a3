//! Error: Enumerator names must be unique.

use named_enum::named_enum;

named_enum!(Duplicate, u8, val1, val2, val1);

fn main() {}
