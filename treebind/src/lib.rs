//! Bind decoded configuration trees onto typed structs.
//!
//! A [`trait@TreeBind`] struct declares its configuration schema directly in the
//! type: each participating field is either a [`Field`] wrapper capturing the
//! raw value and its provenance, or a nested section that is itself
//! `TreeBind`. The derive macro turns `#[treebind(...)]` annotations into
//! compile-time [`FieldSpec`] descriptors, and [`TreeBind::load`] walks the
//! declared fields in order, populating a scratch instance that is swapped
//! into the destination only when every field resolved.
//!
//! The input tree is a [`serde_json::Map`] of [`serde_json::Value`] — the
//! closed set of shapes a decoded JSON, YAML, or TOML document can take.
//! Producing that tree is the upstream decoder's job, and coercing scalar
//! values is the caller's: read a [`Field`] and convert at the point of use.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use treebind::{Field, TreeBind};
//!
//! #[derive(Debug, Default, TreeBind)]
//! struct Server {
//!     name: Field,
//!     #[treebind(key = "addr", nilable)]
//!     address: Field,
//! }
//!
//! let doc = json!({"name": "svc", "addr": "10.0.0.7:80"});
//! let tree = doc.as_object().ok_or("expected an object")?;
//! let server = Server::from_tree(tree)?;
//! assert_eq!(server.name.get(), &json!("svc"));
//! assert_eq!(server.address.name(), "addr");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub use treebind_macros::TreeBind;

mod bind;
mod error;
mod field;
mod schema;

pub use bind::{Resolution, as_map, resolve};
pub use error::{BindError, BindResult, ValueKind};
pub use field::Field;
pub use schema::{Attrs, FieldSpec};

/// A decoded, string-keyed input tree.
///
/// Values may themselves be nested mappings (bound by recursion into nested
/// sections), scalars, arrays, or nulls. The binder never mutates the tree.
pub type Tree = serde_json::Map<String, serde_json::Value>;

/// Trait implemented by structs that bind from an input tree.
///
/// Implementations come from `#[derive(TreeBind)]`; the struct must also
/// implement [`Default`], which supplies the zero value for unbound slots
/// and the scratch instance used by [`TreeBind::load`].
///
/// Exclusive access to the destination is a `&mut` borrow, so concurrent
/// loads into the same destination are rejected at compile time; loads into
/// distinct destinations are independent.
pub trait TreeBind: Default {
    /// Run the per-field binding pass over `self`, in declaration order.
    ///
    /// Generated by the derive. Callers normally use [`TreeBind::load`] or
    /// [`TreeBind::from_tree`], which add the all-or-nothing guarantee on
    /// top of this pass.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] produced by a field resolution, or
    /// propagated verbatim from a nested section.
    fn bind_fields(&mut self, tree: &Tree) -> BindResult<()>;

    /// Load `tree` into `self`.
    ///
    /// A fresh zero-valued scratch instance is populated first and only
    /// swapped into `self` once every field has resolved, so a failed call
    /// leaves the destination exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] encountered; see
    /// [`TreeBind::bind_fields`].
    fn load(&mut self, tree: &Tree) -> BindResult<()> {
        let mut scratch = Self::default();
        scratch.bind_fields(tree)?;
        *self = scratch;
        Ok(())
    }

    /// Construct a fresh instance from `tree`.
    ///
    /// # Errors
    ///
    /// Returns the first [`BindError`] encountered; see
    /// [`TreeBind::bind_fields`].
    fn from_tree(tree: &Tree) -> BindResult<Self> {
        let mut value = Self::default();
        value.bind_fields(tree)?;
        Ok(value)
    }
}

/// Boxed sections bind through to their contents.
///
/// `Default` allocates every layer, so a slot declared as a chain of boxes
/// is fully live before any recursion happens and stays allocated when the
/// tree maps the section to null.
impl<T: TreeBind> TreeBind for Box<T> {
    fn bind_fields(&mut self, tree: &Tree) -> BindResult<()> {
        (**self).bind_fields(tree)
    }
}
