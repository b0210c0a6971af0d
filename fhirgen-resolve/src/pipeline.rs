//! The ordered resolution pipeline.
//!
//! Each stage reads object references established by an earlier one, so the
//! order of [`STAGES`] is load-bearing: reference resolution first (dotted
//! components, restriction bases, parents, property values), then
//! classification, category derivation, inherited-property pruning, and the
//! final validation gate. Kind classification runs before category
//! derivation because the latter reads `kind == primitive`.

use std::fmt;

use crate::classify::{classify_kinds, derive_primitive_categories};
use crate::dedup::remove_duplicate_properties;
use crate::error::ResolveError;
use crate::references::{
    resolve_component_types, resolve_parent_types, resolve_property_types,
    resolve_restriction_bases,
};
use crate::validation::validate_types;
use fhirgen_schema::Types;

/// One stage of the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolve dotted component names to their owning types.
    ComponentTypes,
    /// Resolve declared restriction bases.
    RestrictionBases,
    /// Resolve inheritance parents.
    ParentTypes,
    /// Resolve property value types.
    PropertyTypes,
    /// Classify the structural kind of every type.
    TypeKinds,
    /// Derive canonical categories for primitive types.
    PrimitiveCategories,
    /// Prune properties shadowed by an ancestor.
    DuplicateProperties,
    /// Final consistency gate.
    Validation,
}

/// The pipeline stages in execution order.
pub const STAGES: [Stage; 8] = [
    Stage::ComponentTypes,
    Stage::RestrictionBases,
    Stage::ParentTypes,
    Stage::PropertyTypes,
    Stage::TypeKinds,
    Stage::PrimitiveCategories,
    Stage::DuplicateProperties,
    Stage::Validation,
];

impl Stage {
    /// Runs this stage over the registry.
    ///
    /// # Errors
    /// Returns the stage's `ResolveError` on the first unresolvable
    /// reference or violated invariant.
    pub fn run(&self, types: &mut Types) -> Result<(), ResolveError> {
        match self {
            Self::ComponentTypes => resolve_component_types(types),
            Self::RestrictionBases => resolve_restriction_bases(types),
            Self::ParentTypes => resolve_parent_types(types),
            Self::PropertyTypes => resolve_property_types(types),
            Self::TypeKinds => classify_kinds(types),
            Self::PrimitiveCategories => derive_primitive_categories(types),
            Self::DuplicateProperties => remove_duplicate_properties(types),
            Self::Validation => validate_types(types),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ComponentTypes => "component_types",
            Self::RestrictionBases => "restriction_bases",
            Self::ParentTypes => "parent_types",
            Self::PropertyTypes => "property_types",
            Self::TypeKinds => "type_kinds",
            Self::PrimitiveCategories => "primitive_categories",
            Self::DuplicateProperties => "duplicate_properties",
            Self::Validation => "validation",
        };
        f.write_str(s)
    }
}

/// Runs the full resolution pipeline over an unresolved registry.
///
/// On success the registry is fully resolved, classified, deduplicated and
/// validated, ready for emission. On failure the registry must be treated as
/// unusable: no partial result is committed and a retry requires a fresh
/// registry build.
///
/// # Errors
/// Propagates the first stage failure; later stages do not execute.
pub fn resolve(types: &mut Types) -> Result<(), ResolveError> {
    for stage in STAGES {
        tracing::debug!("running resolution stage \"{}\"", stage);
        stage.run(types)?;
    }
    Ok(())
}
