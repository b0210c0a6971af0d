//! Error types for type-graph resolution.

use thiserror::Error;

/// Error type for the resolution and classification passes.
///
/// Every variant is fatal to the current run and names the offending type
/// (and property, where one is involved) so the caller can report a precise
/// location. The first four variants are reference-resolution failures; the
/// rest are invariant violations caught by the validation gate or the
/// category-derivation pass.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A dotted component name whose prefix names no registered type.
    #[error("parent component type not found for component '{type_name}'")]
    ComponentParentNotFound {
        /// Component type name.
        type_name: String,
    },

    /// A declared restriction base that could not be resolved.
    #[error("restriction base '{base_name}' not found for type '{type_name}'")]
    RestrictionBaseNotFound {
        /// Declaring type name.
        type_name: String,
        /// Unresolvable base name.
        base_name: String,
    },

    /// A parent candidate that could not be resolved.
    #[error("parent type '{parent_name}' not found for type '{type_name}'")]
    ParentTypeNotFound {
        /// Declaring type name.
        type_name: String,
        /// Unresolvable parent name.
        parent_name: String,
    },

    /// A property value type that could not be resolved.
    #[error(
        "unknown value type '{value_type_name}' for property '{property_name}' on type '{type_name}'"
    )]
    UnknownPropertyType {
        /// Declaring type name.
        type_name: String,
        /// Property name.
        property_name: String,
        /// Unresolvable value type name.
        value_type_name: String,
    },

    /// A primitive whose canonical name maps to no known category.
    #[error("unknown primitive category '{category_name}' for type '{type_name}'")]
    UnknownPrimitiveCategory {
        /// Declaring type name.
        type_name: String,
        /// Unmapped canonical name.
        category_name: String,
    },

    /// A derived namespace that is not a valid identifier sequence.
    #[error("invalid namespace '{namespace}' for type '{type_name}'")]
    InvalidNamespace {
        /// Declaring type name.
        type_name: String,
        /// Offending namespace, dot-joined.
        namespace: String,
    },

    /// A derived class name that is not a valid identifier.
    #[error("invalid class name '{class_name}' for type '{type_name}'")]
    InvalidClassName {
        /// Declaring type name.
        type_name: String,
        /// Offending class name.
        class_name: String,
    },

    /// A type that reached the validation gate without a kind.
    #[error("type '{type_name}' has no kind")]
    MissingKind {
        /// Declaring type name.
        type_name: String,
    },

    /// A primitive-kind type without a primitive category.
    #[error("primitive type '{type_name}' has no primitive category")]
    MissingPrimitiveCategory {
        /// Declaring type name.
        type_name: String,
    },
}

/// Error type for the front-door `resolve_from_xml` convenience.
#[derive(Debug, Error)]
pub enum Error {
    /// Schema extraction error.
    #[error("schema parse error: {0}")]
    Parse(#[from] fhirgen_schema::ParseError),

    /// Resolution error.
    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),
}
