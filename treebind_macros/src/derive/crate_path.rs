//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[treebind(crate = "...")]` attribute value into
//! a `TokenStream` that replaces hardcoded `treebind::` paths in generated
//! code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `treebind` when no override is present. When the user
/// specifies `#[treebind(crate = "...")]`, the returned tokens reference
/// types through the aliased dependency name instead.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { treebind }, |path| quote! { #path })
}
