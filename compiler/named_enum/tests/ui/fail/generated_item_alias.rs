//! Error: An alias constant cannot take the name of a generated item.

use named_enum::named_enum;

named_enum!(Al, u8, a, from_raw = 0);

fn main() {}
