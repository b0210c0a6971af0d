//! Property (field) declarations on schema types.

use crate::types::TypeId;

/// Wire value of the "any markup" element reference.
pub const XHTML_DIV_REF: &str = "xhtml:div";

/// Special element references that short-circuit normal value-type resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRef {
    /// `xhtml:div` — free-form markup content, represented as opaque string
    /// data in the generated model.
    XhtmlDiv,
}

impl PropertyRef {
    /// Parses a `ref` attribute value into a recognized marker.
    #[must_use]
    pub fn from_ref(value: &str) -> Option<Self> {
        match value {
            XHTML_DIV_REF => Some(Self::XhtmlDiv),
            _ => None,
        }
    }
}

/// A field declared on a schema type.
///
/// Constructed during parsing with `value_type` unset; the property-value
/// resolution pass fills it in.
#[derive(Debug, Clone)]
pub struct Property {
    /// Field name, unique within its declaring type.
    pub name: String,
    /// Unresolved textual reference to the field's value type.
    pub raw_type_name: String,
    /// Special reference marker, if the declaration used one.
    pub ref_marker: Option<PropertyRef>,
    /// Resolved value type, set by the property-value resolution pass.
    pub value_type: Option<TypeId>,
}

impl Property {
    /// Creates a new unresolved property.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type_name: raw_type_name.into(),
            ref_marker: None,
            value_type: None,
        }
    }

    /// Sets the special reference marker.
    #[must_use]
    pub fn with_ref_marker(mut self, marker: PropertyRef) -> Self {
        self.ref_marker = Some(marker);
        self
    }
}
