//! Naming conventions for generated identifiers.
//!
//! FHIR schema names carry structural markers (`-primitive`/`-list` suffixes,
//! dotted component names) that must be folded into flat PHP/Rust-style
//! identifiers before emission. This module derives and validates those
//! identifiers.

/// Suffix marking a primitive value type in the schema (`string-primitive`).
pub const PRIMITIVE_SUFFIX: &str = "-primitive";

/// Suffix marking an enumerated list type in the schema (`AddressUse-list`).
pub const LIST_SUFFIX: &str = "-list";

/// Prefix on names referring to built-in XML Schema types (`xs:string`).
pub const XML_SCHEMA_PREFIX: &str = "xs:";

/// Prefix applied to every generated class name.
pub const CLASS_NAME_PREFIX: &str = "FHIR";

/// Converts a FHIR schema name to PascalCase.
///
/// Dots, dashes and underscores all act as word separators, so
/// `Patient.contact` becomes `PatientContact` and `string-primitive`
/// becomes `StringPrimitive`.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '.' || c == '-' || c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Derives the generated class name for a FHIR schema name.
///
/// `Patient.contact` maps to `FHIRPatientContact`, `string-primitive` to
/// `FHIRStringPrimitive`.
#[must_use]
pub fn class_name_for(fhir_name: &str) -> String {
    format!("{CLASS_NAME_PREFIX}{}", to_pascal_case(fhir_name))
}

/// Returns true if `s` is a syntactically valid target-language identifier.
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `s` is a valid generated class name.
#[must_use]
pub fn is_valid_class_name(s: &str) -> bool {
    is_valid_identifier(s)
}

/// Returns true if every namespace segment is a valid identifier.
///
/// An empty segment list is the crate-root namespace and is valid.
#[must_use]
pub fn is_valid_namespace(segments: &[String]) -> bool {
    segments.iter().all(|s| is_valid_identifier(s))
}
