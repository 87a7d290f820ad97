//! Expansion pipeline for the `TreeBind` derive.
//!
//! [`expand`] validates the input shape, resolves the crate path, and
//! assembles one binding block per named field. The blocks run in
//! declaration order inside the generated `bind_fields`, so the first
//! failing field aborts the pass.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

mod build;
mod crate_path;
mod parse;
#[cfg(test)]
mod tests;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let struct_attrs = parse::parse_struct_attrs(&input.attrs)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());

    let fields = named_fields(input)?;
    let blocks = fields
        .named
        .iter()
        .map(|field| build::field_block(field, &krate))
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::TreeBind for #ident #ty_generics #where_clause {
            fn bind_fields(
                &mut self,
                tree: &#krate::Tree,
            ) -> ::core::result::Result<(), #krate::BindError> {
                #(#blocks)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named),
            _ => Err(syn::Error::new_spanned(
                &data.fields,
                "TreeBind requires named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "TreeBind can only be derived for structs",
        )),
    }
}
