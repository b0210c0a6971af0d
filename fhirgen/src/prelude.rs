//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use fhirgen::prelude::*;
//! ```

// Schema types
pub use fhirgen_schema::{
    GenConfig, ParseError, PrimitiveCategory, Property, PropertyRef, Type, TypeId, TypeKind,
    Types,
};
pub use fhirgen_schema::{parse_definitions, parse_definitions_file};

// Resolution engine
pub use fhirgen_resolve::{Error, ResolveError, STAGES, Stage};
pub use fhirgen_resolve::{resolve, resolve_from_xml, validate_types};
