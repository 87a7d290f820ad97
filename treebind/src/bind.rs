//! Per-field resolution engine behind [`TreeBind::load`](crate::TreeBind::load).
//!
//! Generated binding passes call [`resolve`] once per declared field and
//! dispatch on the outcome: wrapper slots construct a
//! [`Field`](crate::Field), nested slots recurse through [`as_map`]. The
//! precedence is fixed: an external field resolved to a null-equivalent is
//! skipped before the presence check runs, and the presence check runs
//! before any slot is touched.

use serde_json::Value;

use crate::Tree;
use crate::error::{BindError, ValueKind};
use crate::schema::FieldSpec;

/// Outcome of resolving one declared field against the input tree.
#[derive(Clone, Copy, Debug)]
pub enum Resolution<'t> {
    /// Leave the slot at its zero value: the field is externally managed
    /// and the tree resolved to a null-equivalent.
    Skip,
    /// Bind the slot from the lookup outcome. `None` means the binding key
    /// was absent from the tree (tolerated here only for `nilable` fields).
    Bind(Option<&'t Value>),
}

/// Resolve a field descriptor against the input tree.
///
/// The null-equivalent covers both an explicit [`Value::Null`] and an
/// absent key, so an `external` field is skipped in either case — its slot
/// belongs to whatever subsystem populates it after this pass.
///
/// # Errors
///
/// Returns [`BindError::MissingKey`] when the binding key is absent and the
/// field is neither `nilable` nor skipped as external.
pub fn resolve<'t>(tree: &'t Tree, spec: &FieldSpec) -> Result<Resolution<'t>, BindError> {
    let key = spec.binding_key();
    let raw = tree.get(key);
    let nulled = matches!(raw, None | Some(Value::Null));
    if nulled && spec.external {
        tracing::trace!(key, "leaving externally managed field at its zero value");
        return Ok(Resolution::Skip);
    }
    if raw.is_none() && !spec.nilable {
        return Err(BindError::MissingKey {
            key: key.to_owned(),
        });
    }
    Ok(Resolution::Bind(raw))
}

/// View a non-null value as a nested mapping for recursion.
///
/// # Errors
///
/// Returns [`BindError::NotAMap`] naming the binding key and the shape
/// actually found. A malformed section is a data-contract violation the
/// caller can match on, not a fault.
pub fn as_map<'t>(raw: &'t Value, key: &str) -> Result<&'t Tree, BindError> {
    raw.as_object().ok_or_else(|| BindError::NotAMap {
        key: key.to_owned(),
        kind: ValueKind::of(raw),
    })
}
