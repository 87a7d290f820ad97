//! Procedural macros for `treebind`.
//!
//! The `TreeBind` derive reads the `#[treebind(...)]` annotations on a
//! struct's named fields and generates the per-field binding pass consumed
//! by the core crate's `TreeBind` trait. All
//! behaviour lives in compile-time descriptors; nothing is inspected at
//! runtime.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `treebind::TreeBind`.
///
/// The struct must have named fields and implement `Default`. Recognised
/// field annotations:
///
/// - `#[treebind(key = "name")]` — bind from `name` instead of the field's
///   own name.
/// - `#[treebind(nilable)]` — tolerate an absent key, leaving the slot at
///   its zero value.
/// - `#[treebind(external)]` — tolerate a null-equivalent (explicit null or
///   absent key), leaving the slot for another subsystem to populate.
/// - `#[treebind(skip)]` — the field does not participate in binding.
///
/// Any other entry is preserved verbatim and queryable through the bound
/// `Field`'s annotation accessors. At struct level,
/// `#[treebind(crate = "path")]` redirects the generated code's references
/// when the core crate is renamed.
#[proc_macro_derive(TreeBind, attributes(treebind))]
pub fn derive_tree_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
