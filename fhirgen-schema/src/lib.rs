//! # fhirgen Schema
//!
//! FHIR XSD type extraction and type-graph data model.
//!
//! This crate provides:
//! - The [`Types`] registry: the single owner of all extracted type
//!   declarations, with index-based cross-references
//! - Structural classification and primitive-category enumerations
//! - Naming-convention helpers for generated identifiers
//! - XSD extraction from FHIR schema documents

pub mod config;
pub mod error;
pub mod kind;
pub mod naming;
pub mod parser;
pub mod primitive;
pub mod property;
pub mod types;

pub use config::GenConfig;
pub use error::ParseError;
pub use kind::TypeKind;
pub use parser::{parse_definitions, parse_definitions_file};
pub use primitive::PrimitiveCategory;
pub use property::{Property, PropertyRef, XHTML_DIV_REF};
pub use types::{Type, TypeId, Types};

pub use naming::{LIST_SUFFIX, PRIMITIVE_SUFFIX, XML_SCHEMA_PREFIX};
