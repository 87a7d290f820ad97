//! Attribute parsing for the `TreeBind` derive.
//!
//! Field annotations are gathered with `parse_nested_meta`, and every entry
//! — recognised or not — is recorded in declaration order so the bound
//! `Field` can expose the complete annotation set at runtime.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token, parenthesized};

/// Struct-level `#[treebind(...)]` metadata.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[treebind(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `treebind::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[treebind(...)]` metadata.
///
/// `key`, `nilable`, and `external` drive binding behaviour and `skip`
/// removes the field from the pass. The `attrs` list carries every declared
/// entry, bare entries with an empty value.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub key: Option<String>,
    pub nilable: bool,
    pub external: bool,
    pub skip: bool,
    pub attrs: Vec<(String, String)>,
}

/// Iterate all `#[treebind(...)]` attributes once and apply a callback.
fn parse_treebind<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta<'_>) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("treebind")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[treebind(...)]` metadata applied to a struct.
///
/// Only the `crate` key is recognised at struct level. Unknown keys are
/// discarded so callers keep compiling when new attributes appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_treebind(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let lit: LitStr = meta.value()?.parse()?;
            out.crate_path = Some(lit.parse()?);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[treebind(...)]` attributes.
///
/// An empty `key = ""` alias falls back to the field's own name, matching
/// the lookup behaviour of an undeclared alias. Annotation values are
/// irrelevant for `nilable`, `external`, and `skip`; declaring the entry is
/// what switches the behaviour on.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_treebind(&field.attrs, |meta| apply_field_meta(meta, &mut out))?;
    Ok(out)
}

fn apply_field_meta(meta: &ParseNestedMeta<'_>, out: &mut FieldAttrs) -> syn::Result<()> {
    let Some(ident) = meta.path.get_ident().map(ToString::to_string) else {
        return Err(meta.error("treebind annotations must be named by an identifier"));
    };
    let value = if meta.input.peek(Token![=]) {
        meta.value()?.parse::<LitStr>()?.value()
    } else {
        String::new()
    };
    match ident.as_str() {
        "key" if !value.is_empty() => out.key = Some(value.clone()),
        "nilable" => out.nilable = true,
        "external" => out.external = true,
        "skip" => out.skip = true,
        _ => {}
    }
    out.attrs.push((ident, value));
    Ok(())
}
