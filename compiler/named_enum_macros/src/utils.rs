//! Token helpers shared by the expansion.

use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};

/// An unsuffixed integer literal for `value`, negated when needed.
///
/// Unsuffixed literals take the type of their context (discriminant,
/// pattern, tuple field), so the same tokens work for every underlying kind.
pub fn int_tokens(value: i128, span: Span) -> TokenStream2 {
    let mut magnitude = Literal::u128_unsuffixed(value.unsigned_abs());
    magnitude.set_span(span);
    if value < 0 {
        quote_spanned!(span=> -#magnitude)
    } else {
        quote!(#magnitude)
    }
}

/// Default path of the runtime crate.
pub fn default_crate_path() -> TokenStream2 {
    quote!(::named_enum)
}
