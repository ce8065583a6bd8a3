//! Implicit values count up from zero, or from the last explicit value.

use named_enum::{enum_name, named_enum};

named_enum!(signed_enum, i16, val1, val2);
named_enum!(unsigned_enum_mixed, u16, val1 = 10, val2);

fn main() {
    assert_eq!(signed_enum::val2 as i16, 1);
    assert_eq!(unsigned_enum_mixed::val2 as u16, 11);
    assert_eq!(enum_name(unsigned_enum_mixed::val2), "val2");
}
