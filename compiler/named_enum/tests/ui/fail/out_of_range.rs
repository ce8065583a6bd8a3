//! Error: Explicit values must fit the underlying type.

use named_enum::named_enum;

named_enum!(Small, u8, ok = 255, big = 256);

fn main() {}
