//! `named_enum!` expansion.
//!
//! Input is parsed into an [`EnumInput`], normalized through
//! `named_enum_decl`, and emitted as:
//! - a fieldless `#[repr(R)]` enum with one variant per distinct value
//! - associated constants for aliased enumerators
//! - inherent lookup functions and the constant name table
//! - trait impls (`NamedEnum`, `Display`, `FromStr`, `TryFrom<R>`, `From<T> for R`)
//!
//! Declaration errors are reported at the offending token.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Ident, LitStr};

use named_enum_decl::{DeclError, EnumDeclaration, EnumeratorSpec, IntKind};

use crate::input::{EntryInput, EnumInput};
use crate::utils::{default_crate_path, int_tokens};

/// Main entry point for the `named_enum!` macro.
pub fn named_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as EnumInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Associated items every expansion defines on the enum. A variant may
/// share one of these names, an associated alias constant may not.
const GENERATED_ITEMS: [&str; 7] = [
    "TABLE",
    "COUNT",
    "name",
    "to_raw",
    "from_raw",
    "name_of_raw",
    "from_name",
];

/// Validate and normalize the declaration, then emit it.
pub fn expand(input: &EnumInput) -> syn::Result<TokenStream2> {
    let kind = input
        .repr
        .to_string()
        .parse::<IntKind>()
        .map_err(|err| decl_error(input, &err))?;

    let specs: Vec<EnumeratorSpec> = input
        .entries
        .iter()
        .map(|entry| EnumeratorSpec {
            name: entry.name.clone(),
            explicit_value: entry.value.as_ref().map(|v| v.value),
        })
        .collect();

    let decl = EnumDeclaration::new(input.ident.unraw().to_string(), kind, &specs)
        .map_err(|err| decl_error(input, &err))?;

    let aliases = aliases(input, &decl)?;

    Ok(emit(input, &decl, &aliases))
}

/// Turn a declaration error into a compile error at the member it concerns.
fn decl_error(input: &EnumInput, err: &DeclError) -> syn::Error {
    let message = err.to_string();
    let entry = err.index().and_then(|index| input.entries.get(index));

    match (err, entry) {
        (DeclError::OutOfRange { .. }, Some(entry)) => match &entry.value {
            Some(value) => syn::Error::new_spanned(&value.expr, message),
            None => syn::Error::new(entry.ident.span(), message),
        },
        (_, Some(entry)) => syn::Error::new(entry.ident.span(), message),
        (DeclError::UnsupportedRepr { .. }, None) => syn::Error::new(input.repr.span(), message),
        (_, None) => syn::Error::new(input.ident.span(), message),
    }
}

/// An aliased entry and the variant it stands for.
struct Alias<'a> {
    entry: &'a EntryInput,
    variant: &'a Ident,
}

/// Pair each alias entry with its variant, rejecting aliases whose constant
/// would collide with a generated associated item.
fn aliases<'a>(input: &'a EnumInput, decl: &EnumDeclaration) -> syn::Result<Vec<Alias<'a>>> {
    decl.aliases()
        .filter_map(|(index, canonical)| {
            Some((input.entries.get(index)?, input.entries.get(canonical)?))
        })
        .map(|(entry, canonical)| {
            let name = &entry.name;
            if GENERATED_ITEMS.contains(&name.as_str()) {
                return Err(syn::Error::new(
                    entry.ident.span(),
                    format!(
                        "alias `{name}` of `{}` clashes with the generated `{}::{name}`",
                        canonical.name, decl.type_name
                    ),
                ));
            }
            Ok(Alias {
                entry,
                variant: &canonical.ident,
            })
        })
        .collect()
}

fn name_lit(entry: &EntryInput) -> LitStr {
    LitStr::new(&entry.name, entry.ident.span())
}

// Trait impls below never name an item through `#ident::item`: a variant
// with the same name would take precedence over it.
fn emit(input: &EnumInput, decl: &EnumDeclaration, aliases: &[Alias<'_>]) -> TokenStream2 {
    let EnumInput {
        attrs,
        crate_path,
        vis,
        ident,
        repr,
        entries,
    } = input;

    let krate = crate_path
        .as_ref()
        .map_or_else(default_crate_path, |path| quote!(#path));
    let named_enum = quote!(<#ident as #krate::NamedEnum>);
    let type_name = LitStr::new(&decl.type_name, ident.span());
    let count = decl.members().len();

    let variants: Vec<(&EntryInput, i128)> = decl
        .variants()
        .filter_map(|(index, resolved)| Some((entries.get(index)?, resolved.value)))
        .collect();

    let variant_defs = variants.iter().map(|&(entry, value)| {
        let doc = &entry.attrs;
        let variant = &entry.ident;
        let value = int_tokens(value, variant.span());
        quote! {
            #(#doc)*
            #variant = #value,
        }
    });

    let alias_defs = aliases.iter().map(|alias| {
        let doc = &alias.entry.attrs;
        let name = &alias.entry.ident;
        let variant = alias.variant;
        quote! {
            #(#doc)*
            pub const #name: Self = Self::#variant;
        }
    });

    let table_rows = entries.iter().zip(decl.members()).map(|(entry, resolved)| {
        let name = name_lit(entry);
        let value = int_tokens(resolved.value, entry.ident.span());
        quote!((#name, #value))
    });

    let name_arms: Vec<TokenStream2> = variants
        .iter()
        .map(|&(entry, _)| {
            let variant = &entry.ident;
            let name = name_lit(entry);
            quote!(Self::#variant => #name,)
        })
        .collect();

    let from_raw_arms: Vec<TokenStream2> = variants
        .iter()
        .map(|&(entry, value)| {
            let variant = &entry.ident;
            let value = int_tokens(value, variant.span());
            quote!(#value => ::core::option::Option::Some(Self::#variant),)
        })
        .collect();

    let name_of_raw_arms = variants.iter().map(|&(entry, value)| {
        let name = name_lit(entry);
        let value = int_tokens(value, entry.ident.span());
        quote!(#value => ::core::option::Option::Some(#name),)
    });

    let alias_variants = aliases.iter().map(|alias| (alias.entry, alias.variant));
    let from_name_arms: Vec<TokenStream2> = variants
        .iter()
        .map(|&(entry, _)| (entry, &entry.ident))
        .chain(alias_variants)
        .map(|(entry, variant)| {
            let name = name_lit(entry);
            quote!(#name => ::core::option::Option::Some(Self::#variant),)
        })
        .collect();

    quote! {
        #(#attrs)*
        #[repr(#repr)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[allow(non_camel_case_types, dead_code)]
        #vis enum #ident {
            #(#variant_defs)*
        }

        #[allow(
            non_upper_case_globals,
            dead_code,
            unreachable_patterns,
            clippy::all,
            clippy::pedantic
        )]
        impl #ident {
            #(#alias_defs)*

            /// Every enumerator with its value, in declaration order.
            pub const TABLE: &'static [(&'static str, #repr)] = #named_enum::TABLE;

            /// Number of declared enumerators, aliases included.
            pub const COUNT: usize = #count;

            /// The name this value was declared with.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            /// The underlying value.
            #[must_use]
            pub const fn to_raw(self) -> #repr {
                self as #repr
            }

            /// The enumerator holding `raw`, if any.
            #[must_use]
            pub const fn from_raw(raw: #repr) -> ::core::option::Option<Self> {
                match raw {
                    #(#from_raw_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            /// The name of the enumerator holding `raw`, if any.
            #[must_use]
            pub const fn name_of_raw(raw: #repr) -> ::core::option::Option<&'static str> {
                match raw {
                    #(#name_of_raw_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            /// The enumerator declared as `name`; aliases resolve to their variant.
            #[must_use]
            pub fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#from_name_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[allow(unreachable_patterns)]
        impl #krate::NamedEnum for #ident {
            type Repr = #repr;
            const TYPE_NAME: &'static str = #type_name;
            const TABLE: &'static [(&'static str, #repr)] = &[#(#table_rows),*];

            fn name(self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            fn to_raw(self) -> #repr {
                self as #repr
            }

            fn from_raw(raw: #repr) -> ::core::option::Option<Self> {
                match raw {
                    #(#from_raw_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(#named_enum::name(*self))
            }
        }

        impl ::core::str::FromStr for #ident {
            type Err = #krate::UnknownName;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let found = match s {
                    #(#from_name_arms)*
                    _ => ::core::option::Option::None,
                };
                found.ok_or_else(|| #krate::UnknownName {
                    type_name: #type_name,
                    name: ::std::borrow::ToOwned::to_owned(s),
                })
            }
        }

        impl ::core::convert::TryFrom<#repr> for #ident {
            type Error = #krate::UnknownEnumerator<#repr>;

            fn try_from(raw: #repr) -> ::core::result::Result<Self, Self::Error> {
                #named_enum::from_raw(raw).ok_or(#krate::UnknownEnumerator {
                    type_name: #type_name,
                    value: raw,
                })
            }
        }

        impl ::core::convert::From<#ident> for #repr {
            fn from(value: #ident) -> Self {
                value as #repr
            }
        }
    }
}

#[cfg(test)]
mod tests;
