//! Generated code can reach the runtime crate through a re-export.

mod support {
    pub use named_enum as reflection;
}

support::reflection::named_enum! {
    #[named_enum(crate = crate::support::reflection)]
    #[derive(PartialOrd, Ord)]
    pub(crate) Level, i32,
    /// Most verbose.
    trace = -2,
    debug,
    info,
}

fn main() {
    use support::reflection::NamedEnum;

    assert!(Level::trace < Level::info);
    assert_eq!(Level::debug.to_raw(), -1);
    assert_eq!(NamedEnum::name(Level::info), "info");
    assert_eq!(<Level as NamedEnum>::TYPE_NAME, "Level");
}
