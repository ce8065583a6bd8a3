//! Error: Values are integer literals, not expressions.

use named_enum::named_enum;

named_enum!(Computed, u8, a = 1 + 1);

fn main() {}
