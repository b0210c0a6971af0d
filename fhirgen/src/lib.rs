//! # fhirgen
//!
//! FHIR XSD to resolved type-graph toolkit for code generation.
//!
//! fhirgen extracts type declarations from FHIR XML Schema documents and
//! resolves them into an internally consistent type graph: textual name
//! references become object references, every type gets a structural kind,
//! primitives get a canonical category, inherited properties are pruned,
//! and a validation gate checks the result before it is handed to an
//! emission stage.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fhirgen::prelude::*;
//!
//! let config = GenConfig::new().with_namespace(["HL7", "FHIR"]);
//! let types = resolve_from_xml(&xsd_content, &config)?;
//! for ty in types.iter() {
//!     println!("{} -> {:?}", ty.name, ty.kind());
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Data model, naming conventions, and XSD extraction
//! - [`resolve`] - The ordered resolution and classification pipeline

pub mod prelude;

/// Data model and XSD extraction.
pub mod schema {
    pub use fhirgen_schema::*;
}

/// Type-graph resolution and classification.
pub mod resolve {
    pub use fhirgen_resolve::*;
}

// Re-export commonly used items at the crate root
pub use fhirgen_resolve::{Error, ResolveError, STAGES, Stage, resolve, resolve_from_xml};
pub use fhirgen_schema::{
    GenConfig, ParseError, PrimitiveCategory, Property, PropertyRef, Type, TypeId, TypeKind,
    Types, parse_definitions, parse_definitions_file,
};
