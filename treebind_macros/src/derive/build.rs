//! Per-field code generation.
//!
//! Each named field becomes a braced block holding its `FieldSpec` const
//! and the dispatch on the resolution outcome. Slot classification is
//! shallow type inspection: a `Field` (or `Box<Field>`) slot constructs the
//! wrapper, anything else is a nested section bound by recursion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

use super::parse;

/// Shape of a declared field slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    /// `Field`: direct wrapper assignment.
    Wrapper,
    /// `Box<Field>`: wrapper behind one owning box.
    BoxedWrapper,
    /// Anything else: a nested section, which must itself bind.
    Nested,
}

/// Classify a declared slot type.
pub(crate) fn classify(ty: &Type) -> Slot {
    if is_field(ty) {
        Slot::Wrapper
    } else if boxed_inner(ty).is_some_and(is_field) {
        Slot::BoxedWrapper
    } else {
        Slot::Nested
    }
}

/// Whether the type's final path segment names the wrapper type.
///
/// The check is shallow and accepts qualified forms such as
/// `treebind::Field` without resolving the path.
fn is_field(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "Field" && segment.arguments.is_none())
}

/// Returns the boxed type if `ty` is `Box<T>`, matching qualified forms
/// such as `std::boxed::Box<T>` by their final segment.
fn boxed_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let last = path.path.segments.last()?;
    if last.ident != "Box" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

/// Generate the binding block for one named field.
pub(crate) fn field_block(field: &syn::Field, krate: &TokenStream) -> syn::Result<TokenStream> {
    let attrs = parse::parse_field_attrs(field)?;
    if attrs.skip {
        return Ok(TokenStream::new());
    }
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "TreeBind requires named fields"))?;

    let name = ident.to_string();
    let key = match &attrs.key {
        Some(key) => quote! { ::core::option::Option::Some(#key) },
        None => quote! { ::core::option::Option::None },
    };
    let nilable = attrs.nilable;
    let external = attrs.external;
    let entries = attrs
        .attrs
        .iter()
        .map(|(entry, value)| quote! { (#entry, #value) });

    let assign = match classify(&field.ty) {
        Slot::Wrapper => quote! {
            self.#ident = #krate::Field::bind(&SPEC, raw);
        },
        Slot::BoxedWrapper => quote! {
            self.#ident = ::std::boxed::Box::new(#krate::Field::bind(&SPEC, raw));
        },
        Slot::Nested => quote! {
            if let ::core::option::Option::Some(section) = raw {
                if !section.is_null() {
                    let sub = #krate::as_map(section, SPEC.binding_key())?;
                    #krate::TreeBind::load(&mut self.#ident, sub)?;
                }
            }
        },
    };

    Ok(quote! {
        {
            const SPEC: #krate::FieldSpec = #krate::FieldSpec {
                name: #name,
                key: #key,
                nilable: #nilable,
                external: #external,
                attrs: #krate::Attrs::new(&[#(#entries),*]),
            };
            match #krate::resolve(tree, &SPEC)? {
                #krate::Resolution::Skip => {}
                #krate::Resolution::Bind(raw) => {
                    #assign
                }
            }
        }
    })
}
