//! Parsing of `named_enum!` invocations.
//!
//! ```text
//! named_enum!(
//!     #[named_enum(crate = path)]     // optional, consumed
//!     #[derive(PartialOrd)]           // forwarded to the enum
//!     pub TypeName, u16,
//!     /// doc comment                 // forwarded to the variant
//!     first = 10,
//!     second,
//! );
//! ```

use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Expr, Ident, Lit, Path, Token, UnOp, Visibility};

/// A parsed invocation.
pub struct EnumInput {
    /// Attributes forwarded to the generated enum.
    pub attrs: Vec<Attribute>,
    /// Path of the runtime crate, from `#[named_enum(crate = ...)]`.
    pub crate_path: Option<Path>,
    pub vis: Visibility,
    pub ident: Ident,
    /// Underlying type, as written.
    pub repr: Ident,
    pub entries: Vec<EntryInput>,
}

/// One enumerator: `name` or `name = literal`.
pub struct EntryInput {
    /// Doc comments only.
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    /// The declared name with any `r#` prefix removed.
    pub name: String,
    pub value: Option<ValueInput>,
}

/// An explicit value and the expression it was read from.
pub struct ValueInput {
    pub value: i128,
    pub expr: Expr,
}

impl Parse for EnumInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let (crate_path, attrs) = split_options(attrs)?;

        let vis: Visibility = input.parse()?;
        let ident: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let repr: Ident = input.parse()?;

        let mut entries = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            entries.push(input.parse()?);
        }

        Ok(EnumInput {
            attrs,
            crate_path,
            vis,
            ident,
            repr,
            entries,
        })
    }
}

impl Parse for EntryInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        for attr in &attrs {
            if !attr.path().is_ident("doc") {
                return Err(syn::Error::new_spanned(
                    attr,
                    "only doc comments are allowed on enumerators",
                ));
            }
        }

        let ident: Ident = input.parse()?;
        let name = ident.unraw().to_string();

        let value = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let expr: Expr = input.parse()?;
            let value = eval_literal(&expr)?;
            Some(ValueInput { value, expr })
        } else {
            None
        };

        Ok(EntryInput {
            attrs,
            ident,
            name,
            value,
        })
    }
}

/// Evaluate an integer literal, optionally negated or parenthesized.
///
/// Suffixes are ignored; range checking happens during normalization.
pub fn eval_literal(expr: &Expr) -> syn::Result<i128> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse::<i128>(),
            other => Err(syn::Error::new_spanned(
                other,
                "enumerator value must be an integer literal",
            )),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            let value = eval_literal(&unary.expr)?;
            value
                .checked_neg()
                .ok_or_else(|| syn::Error::new_spanned(expr, "integer literal is too large"))
        }
        Expr::Paren(paren) => eval_literal(&paren.expr),
        Expr::Group(group) => eval_literal(&group.expr),
        _ => Err(syn::Error::new_spanned(
            expr,
            "enumerator value must be an integer literal, optionally negated",
        )),
    }
}

/// Remove `#[named_enum(...)]` option attributes, returning the crate path
/// they set and the attributes to forward.
fn split_options(attrs: Vec<Attribute>) -> syn::Result<(Option<Path>, Vec<Attribute>)> {
    let mut crate_path: Option<Path> = None;
    let mut forwarded = Vec::with_capacity(attrs.len());

    for attr in attrs {
        if attr.path().is_ident("repr") {
            return Err(syn::Error::new_spanned(
                attr,
                "`repr` is set from the underlying type argument",
            ));
        }
        if !attr.path().is_ident("named_enum") {
            forwarded.push(attr);
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                if crate_path.is_some() {
                    return Err(meta.error("duplicate `crate` option"));
                }
                crate_path = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown named_enum option, expected `crate`"))
            }
        })?;
    }

    Ok((crate_path, forwarded))
}
