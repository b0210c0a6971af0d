//! Structural classification of schema types.

use std::fmt;

/// Structural kind of a schema type.
///
/// Set exactly once per type, either during parsing (a few specialty types)
/// or by the classification pass. The last three variants are the "known
/// root" kinds: types whose FHIR name itself denotes a structural root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Primitive value type (`string-primitive`, `decimal-primitive`, ...).
    Primitive,
    /// Enumerated list type (`AddressUse-list`) or a recognized legacy list name.
    List,
    /// Dotted component type nested inside a resource (`Patient.contact`).
    ResourceComponent,
    /// Container wrapping a same-named primitive (`string` over `string-primitive`).
    PrimitiveContainer,
    /// Everything without a stronger structural signal.
    Generic,
    /// The root `Resource` type.
    Resource,
    /// The `ResourceContainer` choice type.
    ResourceContainer,
    /// The inline `Resource.Inline` type.
    ResourceInline,
}

impl TypeKind {
    /// Looks up the kind for a recognized structural root name.
    #[must_use]
    pub fn from_known_root(fhir_name: &str) -> Option<Self> {
        match fhir_name {
            "Resource" => Some(Self::Resource),
            "ResourceContainer" => Some(Self::ResourceContainer),
            "Resource.Inline" => Some(Self::ResourceInline),
            _ => None,
        }
    }

    /// Returns true if this is the primitive kind.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive)
    }

    /// Returns true if this kind names a recognized structural root.
    #[must_use]
    pub const fn is_known_root(&self) -> bool {
        matches!(
            self,
            Self::Resource | Self::ResourceContainer | Self::ResourceInline
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Primitive => "primitive",
            Self::List => "list",
            Self::ResourceComponent => "resource_component",
            Self::PrimitiveContainer => "primitive_container",
            Self::Generic => "generic",
            Self::Resource => "Resource",
            Self::ResourceContainer => "ResourceContainer",
            Self::ResourceInline => "Resource.Inline",
        };
        f.write_str(s)
    }
}
