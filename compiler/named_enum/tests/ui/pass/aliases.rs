//! Shared values resolve to the first-declared enumerator.

use named_enum::named_enum;

named_enum!(Answer, u8, no, yes, off = 0, on);

fn main() {
    assert_eq!(Answer::off, Answer::no);
    assert_eq!(Answer::on, Answer::yes);
    assert_eq!(Answer::on.name(), "yes");
    assert_eq!(Answer::COUNT, 4);

    match Answer::on {
        Answer::no => unreachable!(),
        Answer::yes => {}
    }
}
