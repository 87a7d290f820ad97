//! The provenance-preserving leaf value holder.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::schema::{Attrs, FieldSpec};

/// A single configuration value bound from the input tree.
///
/// A `Field` captures the resolved binding key, the raw value found under
/// it, whether the key existed at all, and the full annotation set declared
/// on the source struct field. It is immutable once constructed, and the
/// binding pass generated by `#[derive(TreeBind)]` constructs one per
/// wrapper slot per load.
///
/// The raw value is deliberately untyped: converting it is the caller's
/// decision, made at the point of use.
///
/// # Examples
///
/// ```rust
/// use serde_json::{Value, json};
/// use treebind::{Attrs, Field};
///
/// let port = Field::new("port", json!(8080), true, Attrs::EMPTY);
/// assert_eq!(port.lookup(), (&json!(8080), true));
///
/// let absent = Field::new("port", Value::Null, false, Attrs::EMPTY);
/// assert_eq!(absent.get_or(&json!(80)), &json!(80));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    key: String,
    value: Value,
    present: bool,
    attrs: Attrs,
}

impl Field {
    /// Construct a wrapper from its parts.
    ///
    /// Application code normally receives `Field`s from a binding pass
    /// rather than building them; this constructor exists for the generated
    /// code and for tests.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Value, present: bool, attrs: Attrs) -> Self {
        Self {
            key: key.into(),
            value,
            present,
            attrs,
        }
    }

    /// Construct a wrapper from a field descriptor and a tree lookup
    /// outcome. An absent key binds [`Value::Null`] with the presence flag
    /// cleared.
    #[must_use]
    pub fn bind(spec: &FieldSpec, raw: Option<&Value>) -> Self {
        Self::new(
            spec.binding_key(),
            raw.cloned().unwrap_or(Value::Null),
            raw.is_some(),
            spec.attrs,
        )
    }

    /// The resolved binding key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.key
    }

    /// The raw bound value, unconditionally. An absent key reads as
    /// [`Value::Null`].
    #[must_use]
    pub const fn get(&self) -> &Value {
        &self.value
    }

    /// The raw bound value if the key was present, `default` otherwise.
    ///
    /// A present key holding an explicit null still returns the raw null;
    /// only absence triggers the substitution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::{Value, json};
    /// use treebind::{Attrs, Field};
    ///
    /// let explicit_null = Field::new("level", Value::Null, true, Attrs::EMPTY);
    /// assert_eq!(explicit_null.get_or(&json!("info")), &Value::Null);
    /// ```
    #[must_use]
    pub const fn get_or<'a>(&'a self, default: &'a Value) -> &'a Value {
        if self.present { &self.value } else { default }
    }

    /// The raw value together with the presence flag, with no default
    /// substitution — the precise "does this key exist" query.
    #[must_use]
    pub const fn lookup(&self) -> (&Value, bool) {
        (&self.value, self.present)
    }

    /// Whether the binding key existed in the input tree.
    #[must_use]
    pub const fn present(&self) -> bool {
        self.present
    }

    /// Value of the named annotation, or the empty string if it was never
    /// declared.
    #[must_use]
    pub fn attribute(&self, name: &str) -> &str {
        self.attrs.get(name)
    }

    /// Value of the named annotation, or `None` if it was never declared —
    /// distinguishing a declared-empty annotation from a missing one.
    #[must_use]
    pub fn lookup_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.lookup(name)
    }

    /// The full annotation set declared on the source field.
    #[must_use]
    pub const fn attrs(&self) -> Attrs {
        self.attrs
    }
}

/// Renders the raw value's default textual form (its JSON text).
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Serializes the raw value only. The key, the presence flag, and the
/// annotations never appear in an exported representation.
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
