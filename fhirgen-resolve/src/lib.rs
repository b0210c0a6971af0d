//! # fhirgen Resolve
//!
//! Type-graph resolution and classification engine.
//!
//! Converts a loosely-linked, textually-referencing [`Types`] registry into
//! a fully resolved graph: object references for component-of, restriction
//! base, parent and property value types; a structural kind for every type;
//! canonical categories for primitives; inherited properties pruned; and a
//! final validation gate. The passes run in a fixed order (see
//! [`pipeline::STAGES`]) and any failure aborts the whole run.

pub mod classify;
pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod references;
pub mod validation;

pub use classify::{classify_kinds, derive_primitive_categories};
pub use dedup::remove_duplicate_properties;
pub use error::{Error, ResolveError};
pub use pipeline::{STAGES, Stage, resolve};
pub use references::{
    resolve_component_types, resolve_parent_types, resolve_property_types,
    resolve_restriction_bases,
};
pub use validation::validate_types;

use fhirgen_schema::{GenConfig, Types, parse_definitions};

/// Extracts and fully resolves a type graph from FHIR XSD content.
///
/// # Errors
/// Returns `Error` if extraction or any resolution stage fails.
pub fn resolve_from_xml(xml: &str, config: &GenConfig) -> Result<Types, Error> {
    let mut types = parse_definitions(xml, config)?;
    resolve(&mut types)?;
    Ok(types)
}
