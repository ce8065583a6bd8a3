use super::*;
use pretty_assertions::assert_eq;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Expr, ImplItem, Item, ItemEnum, ItemImpl};

fn expand_tokens(tokens: TokenStream2) -> syn::Result<syn::File> {
    let input: EnumInput = syn::parse2(tokens)?;
    let output = expand(&input)?;
    syn::parse2(output)
}

fn expand_ok(tokens: TokenStream2) -> syn::File {
    match expand_tokens(tokens) {
        Ok(file) => file,
        Err(err) => panic!("expansion failed: {err}"),
    }
}

fn expand_err(tokens: TokenStream2) -> String {
    match expand_tokens(tokens) {
        Ok(_) => panic!("expansion unexpectedly succeeded"),
        Err(err) => err.to_string(),
    }
}

fn the_enum(file: &syn::File) -> &ItemEnum {
    file.items
        .iter()
        .find_map(|item| match item {
            Item::Enum(e) => Some(e),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no enum in expansion"))
}

fn inherent_impl(file: &syn::File) -> &ItemImpl {
    file.items
        .iter()
        .find_map(|item| match item {
            Item::Impl(i) if i.trait_.is_none() => Some(i),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no inherent impl in expansion"))
}

fn trait_impl<'a>(file: &'a syn::File, name: &str) -> &'a ItemImpl {
    file.items
        .iter()
        .find_map(|item| match item {
            Item::Impl(i @ ItemImpl {
                trait_: Some((_, path, _)),
                ..
            }) if path.segments.last().is_some_and(|s| s.ident == name) => Some(i),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no `{name}` impl in expansion"))
}

/// `(variant, discriminant)` pairs, discriminants rendered as source text.
fn discriminants(item: &ItemEnum) -> Vec<(String, String)> {
    item.variants
        .iter()
        .map(|v| {
            let value = v
                .discriminant
                .as_ref()
                .map(|(_, expr)| quote!(#expr).to_string())
                .unwrap_or_default();
            (v.ident.to_string(), value)
        })
        .collect()
}

fn assoc_consts(item: &ItemImpl) -> Vec<(String, String)> {
    item.items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Const(c) => {
                let expr: &Expr = &c.expr;
                Some((c.ident.to_string(), quote!(#expr).to_string()))
            }
            _ => None,
        })
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|&(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn test_sequential_discriminants() {
    let file = expand_ok(quote!(signed_enum, i16, val1, val2));
    assert_eq!(
        discriminants(the_enum(&file)),
        pairs(&[("val1", "0"), ("val2", "1")])
    );
}

#[test]
fn test_signed_mixed_discriminants() {
    let file = expand_ok(quote!(signed_enum_mixed, i16, val1 = -10, val2));
    assert_eq!(
        discriminants(the_enum(&file)),
        pairs(&[("val1", "- 10"), ("val2", "- 9")])
    );
}

#[test]
fn test_unsigned_mixed_discriminants() {
    let file = expand_ok(quote!(unsigned_enum_mixed, u16, val1 = 10, val2));
    assert_eq!(
        discriminants(the_enum(&file)),
        pairs(&[("val1", "10"), ("val2", "11")])
    );
}

#[test]
fn test_repr_and_visibility() {
    let file = expand_ok(quote!(pub Flags, u32, a));
    let item = the_enum(&file);
    assert!(matches!(item.vis, syn::Visibility::Public(_)));
    let repr = item
        .attrs
        .iter()
        .find(|a| a.path().is_ident("repr"))
        .map(|a| a.meta.require_list().map(|l| l.tokens.to_string()));
    assert!(matches!(repr, Some(Ok(ref r)) if r == "u32"));
}

#[test]
fn test_aliases_become_associated_consts() {
    let file = expand_ok(quote!(Status, u8, ok, failed, success = 0, broken = 1));
    assert_eq!(
        discriminants(the_enum(&file)),
        pairs(&[("ok", "0"), ("failed", "1")])
    );

    let consts = assoc_consts(inherent_impl(&file));
    assert_eq!(
        consts,
        pairs(&[
            ("success", "Self :: ok"),
            ("broken", "Self :: failed"),
            ("TABLE", "< Status as :: named_enum :: NamedEnum > :: TABLE"),
            ("COUNT", "4usize"),
        ])
    );
    assert_eq!(
        assoc_consts(trait_impl(&file, "NamedEnum")),
        pairs(&[
            ("TYPE_NAME", "\"Status\""),
            (
                "TABLE",
                "& [(\"ok\" , 0) , (\"failed\" , 1) , (\"success\" , 0) , (\"broken\" , 1)]"
            ),
        ])
    );
}

#[test]
fn test_variants_may_share_generated_item_names() {
    let file = expand_ok(quote!(Field, u8, id, name, value, TABLE));
    assert_eq!(
        discriminants(the_enum(&file)),
        pairs(&[("id", "0"), ("name", "1"), ("value", "2"), ("TABLE", "3")])
    );

    // Trait impls must not reach generated items through `Field::<item>`,
    // which would resolve to the variant.
    for item in &file.items {
        if let Item::Impl(ItemImpl {
            trait_: Some(_),
            items,
            ..
        }) = item
        {
            let body = quote!(#(#items)*).to_string();
            assert!(!body.contains("Field :: name ("), "{body}");
            assert!(!body.contains("Field :: TABLE"), "{body}");
        }
    }
}

#[test]
fn test_alias_named_like_generated_item_error() {
    assert_eq!(
        expand_err(quote!(Al, u8, a, from_raw = 0)),
        "alias `from_raw` of `a` clashes with the generated `Al::from_raw`"
    );
    assert_eq!(
        expand_err(quote!(Al, u8, a, r#COUNT = 0)),
        "alias `COUNT` of `a` clashes with the generated `Al::COUNT`"
    );
}

#[test]
fn test_trait_impls_use_crate_path_option() {
    let file = expand_ok(quote!(#[named_enum(crate = my::reexport)] T, u8, a));
    let trait_paths: Vec<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(ItemImpl {
                trait_: Some((_, path, _)),
                ..
            }) => Some(quote!(#path).to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(
        trait_paths,
        vec![
            "my :: reexport :: NamedEnum",
            ":: core :: fmt :: Display",
            ":: core :: str :: FromStr",
            ":: core :: convert :: TryFrom < u8 >",
            ":: core :: convert :: From < T >",
        ]
    );
}

#[test]
fn test_forwarded_attributes() {
    let file = expand_ok(quote!(
        /// Documented.
        #[derive(PartialOrd)]
        T, i8, a
    ));
    let names: Vec<String> = the_enum(&file)
        .attrs
        .iter()
        .map(|a| quote!(#a).to_string())
        .collect();
    assert!(names.iter().any(|a| a.contains("Documented.")));
    assert!(names.iter().any(|a| a.contains("PartialOrd")));
}

#[test]
fn test_duplicate_name_error() {
    assert_eq!(
        expand_err(quote!(T, u8, val1, val2, val1)),
        "duplicate enumerator name `val1` (first declared at position 0)"
    );
}

#[test]
fn test_out_of_range_error() {
    assert_eq!(
        expand_err(quote!(T, u16, val1 = -1)),
        "value -1 of enumerator `val1` is out of range for `u16`"
    );
    assert_eq!(
        expand_err(quote!(T, i8, val1 = 128)),
        "value 128 of enumerator `val1` is out of range for `i8`"
    );
}

#[test]
fn test_implicit_overflow_error() {
    assert_eq!(
        expand_err(quote!(T, u8, max = 255, next)),
        "implicit value of enumerator `next` overflows `u8` (previous value is 255)"
    );
}

#[test]
fn test_unsupported_repr_error() {
    assert_eq!(
        expand_err(quote!(T, usize, a)),
        "unsupported underlying type `usize`, expected one of i8, i16, i32, i64, u8, u16, u32, u64"
    );
}

#[test]
fn test_empty_declaration_error() {
    assert_eq!(
        expand_err(quote!(T, u8)),
        "an enumeration needs at least one enumerator"
    );
}

#[test]
fn test_extreme_values() {
    let file = expand_ok(quote!(T, i64, lo = -9223372036854775808, hi = 9223372036854775807));
    assert_eq!(
        discriminants(the_enum(&file)),
        pairs(&[
            ("lo", "- 9223372036854775808"),
            ("hi", "9223372036854775807"),
        ])
    );
}
