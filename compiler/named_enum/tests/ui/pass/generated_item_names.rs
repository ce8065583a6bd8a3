//! Variants may be named like the items the macro generates.

use named_enum::{enum_name, name_of_raw, named_enum, NamedEnum};

named_enum!(Field, u8, id, name, value);
named_enum!(Meta, u8, TABLE, COUNT, from_raw, from_name, name_of_raw, to_raw);

fn main() {
    assert_eq!(enum_name(Field::name), "name");
    assert_eq!(Field::value.to_string(), "value");
    assert_eq!("name".parse::<Field>(), Ok(Field::name));
    assert_eq!(Field::try_from(2u8), Ok(Field::value));
    assert_eq!(u8::from(Field::name), 1);
    assert_eq!(<Field as NamedEnum>::TABLE.len(), 3);

    assert_eq!(Meta::TABLE.to_raw(), 0);
    assert_eq!(Meta::COUNT.name(), "COUNT");
    assert_eq!(<Meta as NamedEnum>::TABLE[1], ("COUNT", 1));
    assert_eq!(<Meta as NamedEnum>::from_raw(2), Some(Meta::from_raw));
    assert_eq!(name_of_raw::<Meta>(5), Ok("to_raw"));
    assert_eq!("from_name".parse::<Meta>(), Ok(Meta::from_name));
}
